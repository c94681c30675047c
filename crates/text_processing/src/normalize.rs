//! Message normalization.
//!
//! Runs once per message before any extractor: lower-cases, collapses
//! whitespace, strips thousands separators, expands currency shorthand
//! (`5m` -> `5 million`, `750k` -> `750 thousand`) and folds approximation
//! markers (`around`, `~`) into a flag on the affected number token instead
//! of discarding them. `m²` unifies to `m2` so the area vocabulary has one
//! spelling. Normalization never fails; messages without numbers simply
//! yield an empty token list.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static DIGIT_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d),(\d)").unwrap());

// Spaced digit groups: "10 000 000" reads as one amount.
static DIGIT_GROUPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,3})((?:\s\d{3})+)\b").unwrap());

// Bare "m" is the currency multiplier; "m2" stays an area unit because the
// trailing digit blocks the word boundary.
static MILLION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)\s*m\b").unwrap());
static THOUSAND_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)\s*k\b").unwrap());

static APPROX_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\b(?:approximately|approx|around|about|roughly)\b\s*|~\s*)(\d)").unwrap()
});

static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)(?:\s*(million|thousand|sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)\b)?")
        .unwrap()
});

/// Unit attached to a number mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberUnit {
    /// Currency multiplier, already applied to the token value.
    Million,
    /// Currency multiplier, already applied to the token value.
    Thousand,
    /// Square-meter suffix; the value is taken as-is.
    Area,
}

/// One numeric mention in the normalized text. `value` is fully expanded
/// (`12 million` -> `12_000_000.0`); `span` is the byte range of the mention
/// in [`NormalizedMessage::text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberToken {
    pub value: f64,
    pub unit: Option<NumberUnit>,
    pub span: (usize, usize),
    pub approximate: bool,
}

/// Normalized message text plus its number tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMessage {
    pub text: String,
    pub numbers: Vec<NumberToken>,
}

pub fn normalize(raw: &str) -> NormalizedMessage {
    let mut text = raw.trim().to_lowercase().replace('²', "2");
    text = WHITESPACE.replace_all(&text, " ").into_owned();

    while DIGIT_COMMA.is_match(&text) {
        text = DIGIT_COMMA.replace_all(&text, "${1}${2}").into_owned();
    }
    text = DIGIT_GROUPS
        .replace_all(&text, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], caps[2].replace(' ', ""))
        })
        .into_owned();

    text = MILLION_SUFFIX.replace_all(&text, "${1} million").into_owned();
    text = THOUSAND_SUFFIX.replace_all(&text, "${1} thousand").into_owned();

    let (text, approx_positions) = strip_approx_markers(&text);
    let numbers = scan_numbers(&text, &approx_positions);

    NormalizedMessage { text, numbers }
}

/// Remove approximation markers that directly precede a number, returning
/// the byte positions (in the cleaned string) of the numbers they covered.
fn strip_approx_markers(text: &str) -> (String, Vec<usize>) {
    let mut out = String::with_capacity(text.len());
    let mut positions = Vec::new();
    let mut last = 0;
    for caps in APPROX_MARKER.captures_iter(text) {
        if let (Some(full), Some(digit)) = (caps.get(0), caps.get(1)) {
            out.push_str(&text[last..full.start()]);
            positions.push(out.len());
            out.push_str(digit.as_str());
            last = full.end();
        }
    }
    out.push_str(&text[last..]);
    (out, positions)
}

fn scan_numbers(text: &str, approx_positions: &[usize]) -> Vec<NumberToken> {
    let mut tokens = Vec::new();
    for caps in NUMBER_TOKEN.captures_iter(text) {
        let value_match = match caps.get(1) {
            Some(m) => m,
            None => continue,
        };
        let raw: f64 = match value_match.as_str().parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        let (value, unit, end) = match caps.get(2) {
            Some(unit_match) => match unit_match.as_str() {
                "million" => (raw * 1_000_000.0, Some(NumberUnit::Million), unit_match.end()),
                "thousand" => (raw * 1_000.0, Some(NumberUnit::Thousand), unit_match.end()),
                _ => (raw, Some(NumberUnit::Area), unit_match.end()),
            },
            None => (raw, None, value_match.end()),
        };
        tokens.push(NumberToken {
            value,
            unit,
            span: (value_match.start(), end),
            approximate: approx_positions.contains(&value_match.start()),
        });
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_trim_collapse() {
        let norm = normalize("  Villa   in New   Cairo  ");
        assert_eq!(norm.text, "villa in new cairo");
        assert!(norm.numbers.is_empty());
    }

    #[test]
    fn test_comma_separators_stripped() {
        let norm = normalize("budget 5,000,000");
        assert_eq!(norm.text, "budget 5000000");
        assert_eq!(norm.numbers[0].value, 5_000_000.0);
        assert_eq!(norm.numbers[0].unit, None);
    }

    #[test]
    fn test_spaced_digit_groups_join() {
        let norm = normalize("up to 10 000 000 egp");
        assert_eq!(norm.text, "up to 10000000 egp");
        assert_eq!(norm.numbers[0].value, 10_000_000.0);
    }

    #[test]
    fn test_million_shorthand_expands() {
        let norm = normalize("Around 8M");
        assert_eq!(norm.text, "8 million");
        let token = &norm.numbers[0];
        assert_eq!(token.value, 8_000_000.0);
        assert_eq!(token.unit, Some(NumberUnit::Million));
        assert!(token.approximate);
    }

    #[test]
    fn test_thousand_shorthand_expands() {
        let norm = normalize("rent 750k");
        assert_eq!(norm.text, "rent 750 thousand");
        assert_eq!(norm.numbers[0].value, 750_000.0);
        assert_eq!(norm.numbers[0].unit, Some(NumberUnit::Thousand));
    }

    #[test]
    fn test_area_suffix_survives_million_expansion() {
        let norm = normalize("200 sqm and 150 m2 and 120 m²");
        assert_eq!(norm.text, "200 sqm and 150 m2 and 120 m2");
        assert_eq!(norm.numbers.len(), 3);
        for token in &norm.numbers {
            assert_eq!(token.unit, Some(NumberUnit::Area));
        }
    }

    #[test]
    fn test_bare_meter_is_currency_not_area() {
        // "12m" is money shorthand; only explicit area suffixes count as area.
        let norm = normalize("around 12m");
        assert_eq!(norm.text, "12 million");
        assert_eq!(norm.numbers[0].unit, Some(NumberUnit::Million));
    }

    #[test]
    fn test_tilde_marks_approximate() {
        let norm = normalize("~3.5 million");
        assert_eq!(norm.text, "3.5 million");
        assert!(norm.numbers[0].approximate);
        assert_eq!(norm.numbers[0].value, 3_500_000.0);
    }

    #[test]
    fn test_marker_without_number_is_kept() {
        let norm = normalize("somewhere around the club");
        assert_eq!(norm.text, "somewhere around the club");
    }

    #[test]
    fn test_plain_counts_have_no_unit() {
        let norm = normalize("3 bedroom apartment");
        assert_eq!(norm.numbers.len(), 1);
        assert_eq!(norm.numbers[0].value, 3.0);
        assert_eq!(norm.numbers[0].unit, None);
        assert!(!norm.numbers[0].approximate);
    }

    #[test]
    fn test_token_spans_index_into_text() {
        let norm = normalize("between 3 million and 5 million");
        for token in &norm.numbers {
            let slice = &norm.text[token.span.0..token.span.1];
            assert!(slice.starts_with(|c: char| c.is_ascii_digit()));
        }
    }
}
