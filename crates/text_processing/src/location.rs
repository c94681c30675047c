//! Location resolution against the alias table.
//!
//! Resolution order: explicit override ("change location to X"), leftmost
//! segment of a multi-location message, directional phrases ("in X",
//! "near X"), whole-message alias lookup, then fuzzy matching. Exact always
//! beats fuzzy; the output is the canonical name exactly as authored in the
//! table.

use estate_agent_config::LocationsConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static OVERRIDE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b(?:change|set|update|switch)\s+(?:the\s+)?location\s+to\s+([a-z0-9' ]+)")
            .unwrap(),
        Regex::new(r"\blocation\s+to\s+([a-z0-9' ]+)").unwrap(),
        Regex::new(r"\blocation\s*[:=]\s*([a-z0-9' ]+)").unwrap(),
        Regex::new(r"\bmove\s+(?:the\s+)?search\s+to\s+([a-z0-9' ]+)").unwrap(),
    ]
});

// Splits "prefer X but open to Y" style messages; the leftmost segment that
// resolves wins.
static SEGMENT_SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:or|but|preferably|prefer|mainly|mostly|ideally|if possible)\b").unwrap()
});

static DIRECTIONAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:located in|situated in|close to|next to|in|at|near|by)\s+([a-z0-9' ]+)")
        .unwrap()
});

/// Minimum word length for single-word fuzzy candidates; anything shorter
/// collides with prepositions and counts.
const MIN_FUZZY_WORD_LEN: usize = 4;

/// Pluggable similarity score in `0.0..=1.0` (1.0 = identical).
pub trait SimilarityScorer: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Normalized Levenshtein similarity: `1 - distance / max_len`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return 1.0;
        }
        1.0 - levenshtein(a, b) as f64 / max_len as f64
    }
}

/// Character-level Levenshtein distance, two-row dynamic programming.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Resolves free text to a canonical location name.
pub struct LocationMatcher {
    canonicals: Vec<String>,
    /// Lowercase alias -> index into `canonicals`, longest alias first so
    /// "rehab city" wins over "rehab".
    aliases: Vec<(String, usize)>,
    phrase_threshold: f64,
    word_threshold: f64,
    scorer: Box<dyn SimilarityScorer>,
}

impl LocationMatcher {
    pub fn from_config(config: &LocationsConfig) -> Self {
        Self::with_scorer(config, Box::new(LevenshteinScorer))
    }

    pub fn with_scorer(config: &LocationsConfig, scorer: Box<dyn SimilarityScorer>) -> Self {
        let canonicals: Vec<String> =
            config.entries.iter().map(|e| e.canonical.clone()).collect();
        let mut aliases = Vec::new();
        for (idx, entry) in config.entries.iter().enumerate() {
            aliases.push((entry.canonical.to_lowercase(), idx));
            for alias in &entry.aliases {
                aliases.push((alias.to_lowercase(), idx));
            }
        }
        aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Self {
            canonicals,
            aliases,
            phrase_threshold: config.phrase_threshold,
            word_threshold: config.word_threshold,
            scorer,
        }
    }

    /// Resolve a normalized (lowercase) message to a canonical location.
    pub fn resolve(&self, text: &str) -> Option<String> {
        for re in OVERRIDE_PATTERNS.iter() {
            if let Some(caps) = re.captures(text) {
                if let Some(candidate) = caps.get(1) {
                    // An explicit override wins even when it fails to
                    // resolve; nothing else in the message should.
                    return self.resolve_candidate(candidate.as_str().trim());
                }
            }
        }

        let segments: Vec<&str> = SEGMENT_SEPARATORS
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if segments.len() > 1 {
            for segment in &segments {
                if let Some(hit) = self.resolve_candidate(segment) {
                    return Some(hit);
                }
            }
        }

        for caps in DIRECTIONAL.captures_iter(text) {
            if let Some(candidate) = caps.get(1) {
                if let Some(hit) = self.resolve_candidate(candidate.as_str().trim()) {
                    return Some(hit);
                }
            }
        }

        self.alias_substring(text)
            .or_else(|| self.fuzzy_scan(text))
    }

    fn resolve_candidate(&self, candidate: &str) -> Option<String> {
        self.alias_substring(candidate)
            .or_else(|| self.fuzzy_scan(candidate))
    }

    fn alias_substring(&self, text: &str) -> Option<String> {
        for (alias, idx) in &self.aliases {
            if text.contains(alias.as_str()) {
                return Some(self.canonicals[*idx].clone());
            }
        }
        None
    }

    /// Candidates are considered left to right (full text, single words,
    /// bigrams, trigrams); only a strictly better score displaces the
    /// current best, so equal scores keep the leftmost candidate.
    fn fuzzy_scan(&self, text: &str) -> Option<String> {
        let mut best: Option<(f64, usize)> = None;

        self.consider(text, self.phrase_threshold, &mut best);

        let words: Vec<&str> = text.unicode_words().collect();
        for word in &words {
            if word.chars().count() >= MIN_FUZZY_WORD_LEN
                && !word.chars().all(|c| c.is_ascii_digit())
            {
                self.consider(word, self.word_threshold, &mut best);
            }
        }
        for window in words.windows(2) {
            self.consider(&window.join(" "), self.phrase_threshold, &mut best);
        }
        for window in words.windows(3) {
            self.consider(&window.join(" "), self.phrase_threshold, &mut best);
        }

        let (score, idx) = best?;
        let canonical = &self.canonicals[idx];
        tracing::debug!(%canonical, score, "fuzzy location match");
        Some(canonical.clone())
    }

    fn consider(&self, candidate: &str, threshold: f64, best: &mut Option<(f64, usize)>) {
        for (alias, idx) in &self.aliases {
            let score = self.scorer.similarity(candidate, alias);
            if score >= threshold && best.map_or(true, |(b, _)| score > b) {
                *best = Some((score, *idx));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> LocationMatcher {
        LocationMatcher::from_config(&LocationsConfig::default())
    }

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("zayed", "zayed"), 0);
        assert_eq!(levenshtein("zayad", "zayed"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_canonical_resolves_to_itself() {
        let m = matcher();
        assert_eq!(m.resolve("new cairo").as_deref(), Some("New Cairo"));
        assert_eq!(m.resolve("sheikh zayed").as_deref(), Some("Sheikh Zayed"));
        assert_eq!(m.resolve("rehab").as_deref(), Some("Rehab"));
    }

    #[test]
    fn test_alias_maps_to_canonical() {
        let m = matcher();
        assert_eq!(m.resolve("apartment in tagamo3").as_deref(), Some("El Tagamoa"));
        assert_eq!(m.resolve("villa in zayed").as_deref(), Some("Sheikh Zayed"));
        assert_eq!(m.resolve("chalet in sahel").as_deref(), Some("North Coast"));
    }

    #[test]
    fn test_longest_alias_wins() {
        // "rehab city" must not resolve through the shorter "rehab" alias of
        // a different entry; both map to Rehab here, but order still matters
        // for compound names.
        let m = matcher();
        assert_eq!(m.resolve("al rehab city").as_deref(), Some("Rehab"));
        assert_eq!(m.resolve("garden city").as_deref(), Some("Garden City"));
    }

    #[test]
    fn test_one_edit_typo_resolves() {
        let m = matcher();
        // "zayad" vs "zayed": similarity 0.8, right at the word threshold.
        assert_eq!(m.resolve("villa in zayad").as_deref(), Some("Sheikh Zayed"));
    }

    #[test]
    fn test_two_edit_typo_on_long_name_resolves() {
        let m = matcher();
        // "new caior" vs "new cairo": similarity ~0.78, above the phrase
        // threshold.
        assert_eq!(m.resolve("apartment in new caior").as_deref(), Some("New Cairo"));
    }

    #[test]
    fn test_heavy_typo_does_not_resolve() {
        let m = matcher();
        assert_eq!(m.resolve("villa in zxqad"), None);
    }

    #[test]
    fn test_multi_location_takes_leftmost() {
        let m = matcher();
        assert_eq!(
            m.resolve("prefer rehab but open to new cairo").as_deref(),
            Some("Rehab")
        );
        assert_eq!(
            m.resolve("madinaty or el shorouk").as_deref(),
            Some("Madinaty")
        );
    }

    #[test]
    fn test_typo_in_leftmost_segment_still_wins() {
        // Each segment gets the full alias-then-fuzzy resolution, so a
        // typo'd first mention beats an exact later one.
        let m = matcher();
        assert_eq!(m.resolve("zayad or maadi").as_deref(), Some("Sheikh Zayed"));
    }

    #[test]
    fn test_override_beats_everything() {
        let m = matcher();
        assert_eq!(
            m.resolve("we said new cairo but change the location to madinaty")
                .as_deref(),
            Some("Madinaty")
        );
    }

    #[test]
    fn test_no_location_yields_none() {
        let m = matcher();
        assert_eq!(m.resolve("compare option 1 and 3"), None);
        assert_eq!(m.resolve("show me cheaper options"), None);
    }

    #[test]
    fn test_injected_scorer_is_used() {
        struct Never;
        impl SimilarityScorer for Never {
            fn similarity(&self, _: &str, _: &str) -> f64 {
                0.0
            }
        }
        let m = LocationMatcher::with_scorer(&LocationsConfig::default(), Box::new(Never));
        // Exact lookup still works, fuzzy is disabled.
        assert_eq!(m.resolve("villa in zayed").as_deref(), Some("Sheikh Zayed"));
        assert_eq!(m.resolve("villa in zayad"), None);
    }
}
