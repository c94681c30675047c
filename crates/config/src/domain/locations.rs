//! Location alias table.
//!
//! Canonical names are authored exactly as listings render them; aliases are
//! lower-case spelling variants, abbreviations and common typos. The
//! canonical name itself always matches, so aliases only list deviations.

use serde::{Deserialize, Serialize};

/// One canonical location and its spelling variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    pub canonical: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// The alias table plus fuzzy-match thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationsConfig {
    pub entries: Vec<LocationEntry>,
    /// Minimum normalized similarity for full-string and multi-word
    /// candidates.
    pub phrase_threshold: f64,
    /// Minimum normalized similarity for single-word candidates. Stricter
    /// than the phrase threshold since short words collide easily.
    pub word_threshold: f64,
}

impl Default for LocationsConfig {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            phrase_threshold: 0.75,
            word_threshold: 0.80,
        }
    }
}

fn entry(canonical: &str, aliases: &[&str]) -> LocationEntry {
    LocationEntry {
        canonical: canonical.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

fn default_entries() -> Vec<LocationEntry> {
    vec![
        // East Cairo
        entry("New Cairo", &["new kairo", "new ciro"]),
        entry(
            "Fifth Settlement",
            &["fifth settelment", "5th settlement", "fifth district"],
        ),
        entry("El Tagamoa", &["tagamoa", "tagamo3", "tagamo 3", "el tagamo3"]),
        entry("First Settlement", &["1st settlement"]),
        entry("Mostakbal City", &["mostakbal", "mostaqbal city"]),
        entry("El Shorouk", &["shorouk", "shorouk city"]),
        entry("Madinaty", &["madinty"]),
        entry("Rehab", &["al rehab", "el rehab", "rehab city", "al rehab city"]),
        entry(
            "New Capital",
            &["new administrative capital", "administrative capital", "the capital"],
        ),
        entry("Katameya", &["katameya heights", "kattameya", "qatameya"]),
        entry("Golden Square", &[]),
        entry("Golf Extension", &["golf area"]),
        entry("Taj City", &["taj sultan"]),
        entry("Eastown", &["east town"]),
        entry("Al Burouj", &["el burouj", "burouj"]),
        entry("La Verde", &[]),
        entry("East Cairo", &[]),
        // West Cairo
        entry("Sheikh Zayed", &["zayed", "el sheikh zayed", "shaikh zayed"]),
        entry("6th of October", &["6 october", "6th october", "october city"]),
        entry("Palm Hills", &["palm hills october"]),
        entry("Sodic West", &[]),
        entry("Sodic East", &[]),
        entry("Badya", &[]),
        entry("Mountain View", &["mountainview"]),
        entry("Hyde Park", &["hydepark"]),
        entry("West Cairo", &[]),
        // Cairo proper
        entry("Maadi", &["el maadi", "maady"]),
        entry("Mokattam", &["moqattam", "el mokattam"]),
        entry("Nasr City", &["madinet nasr", "naser city"]),
        entry("Heliopolis", &["masr el gedida", "misr el gedida"]),
        entry("Downtown", &["down town", "wust el balad"]),
        entry("Garden City", &[]),
        entry("Zamalek", &["el zamalek"]),
        entry("Dokki", &["el dokki"]),
        entry("Mohandessin", &["mohandiseen", "el mohandessin"]),
        entry("Giza", &["el giza"]),
        entry("Wadi Degla", &[]),
        entry("Uptown Cairo", &["uptown"]),
        // Coastal
        entry("North Coast", &["sahel", "el sahel", "north cost"]),
        entry("Ras El Hekma", &["ras al hekma", "ras el hikma"]),
        entry("Sidi Abdelrahman", &["sidi abdel rahman"]),
        entry("Marassi", &[]),
        entry("Hacienda", &["hacienda bay", "hacienda white"]),
        entry("Ain Sokhna", &["el sokhna", "sokhna", "ain el sokhna"]),
    ]
}
