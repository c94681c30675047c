//! Unit-type synonym table.

use estate_agent_core::UnitType;
use serde::{Deserialize, Serialize};

/// One unit type and the keywords that select it. Keywords are matched
/// word-bounded, longest first, so "town house" wins over any shorter
/// keyword that overlaps it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitTypeEntry {
    pub unit_type: UnitType,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitTypesConfig {
    pub entries: Vec<UnitTypeEntry>,
}

impl Default for UnitTypesConfig {
    fn default() -> Self {
        Self {
            entries: default_entries(),
        }
    }
}

fn entry(unit_type: UnitType, keywords: &[&str]) -> UnitTypeEntry {
    UnitTypeEntry {
        unit_type,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn default_entries() -> Vec<UnitTypeEntry> {
    vec![
        entry(
            UnitType::Apartment,
            &["apartment", "apartments", "apt", "flat", "flats", "appartment", "appartments"],
        ),
        entry(
            UnitType::Villa,
            &[
                "villa",
                "villas",
                "vila",
                "standalone villa",
                "separate villa",
                "garden villa",
                "sky villa",
                "twin villa",
            ],
        ),
        entry(UnitType::Studio, &["studio", "studios"]),
        entry(UnitType::Duplex, &["duplex", "duplexes", "duplx"]),
        entry(UnitType::Penthouse, &["penthouse", "pent house", "penthous"]),
        entry(UnitType::Chalet, &["chalet", "chalets", "shalet", "shaleet"]),
        entry(UnitType::TownHouse, &["town house", "townhouse", "town-home", "townhome"]),
        entry(UnitType::TwinHouse, &["twin house", "twinhouse"]),
        entry(UnitType::Loft, &["loft", "lofts"]),
        entry(UnitType::Cabin, &["cabin", "cabins"]),
        entry(UnitType::Office, &["office", "offices", "office space"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keyword_claimed_by_two_types() {
        let config = UnitTypesConfig::default();
        let mut seen = std::collections::HashSet::new();
        for e in &config.entries {
            for kw in &e.keywords {
                assert!(seen.insert(kw.clone()), "keyword in two entries: {kw}");
            }
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for e in &UnitTypesConfig::default().entries {
            for kw in &e.keywords {
                assert_eq!(kw, &kw.to_lowercase());
            }
        }
    }
}
