//! Numeric range extraction for budgets and areas.
//!
//! One engine, two vocabularies. Rules run in a fixed order and the first
//! hit wins: explicit range, maximum indicator, minimum indicator, bare
//! amount. A bare budget reads as a ceiling ("8 million" means spend at
//! most that); a bare area reads as a floor ("120 sqm" means at least
//! that).
//!
//! Budget numbers without a million/thousand multiplier must clear a
//! plausibility floor so bedroom counts and option indices never leak in.
//! Area numbers must carry an explicit area suffix.

use crate::normalize::{NumberToken, NumberUnit};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

/// Smallest believable budget written without a multiplier.
const BUDGET_RAW_FLOOR: f64 = 100_000.0;

static BUDGET_RANGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bbetween\s+(\d+(?:\.\d+)?)\s*(million|thousand)?\s+and\s+(\d+(?:\.\d+)?)\s*(million|thousand)?").unwrap(),
        Regex::new(r"\bfrom\s+(\d+(?:\.\d+)?)\s*(million|thousand)?\s+(?:to|till|until)\s+(\d+(?:\.\d+)?)\s*(million|thousand)?").unwrap(),
        Regex::new(r"\b(\d+(?:\.\d+)?)\s*(million|thousand)?\s+to\s+(\d+(?:\.\d+)?)\s*(million|thousand)?").unwrap(),
        Regex::new(r"\b(\d+(?:\.\d+)?)\s*(million|thousand)?\s*-\s*(\d+(?:\.\d+)?)\s*(million|thousand)?").unwrap(),
    ]
});

static AREA_RANGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bbetween\s+(\d+(?:\.\d+)?)\s*(sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)?\s+and\s+(\d+(?:\.\d+)?)\s*(sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)?").unwrap(),
        Regex::new(r"\bfrom\s+(\d+(?:\.\d+)?)\s*(sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)?\s+(?:to|till|until)\s+(\d+(?:\.\d+)?)\s*(sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)?").unwrap(),
        Regex::new(r"\b(\d+(?:\.\d+)?)\s*(sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)?\s+to\s+(\d+(?:\.\d+)?)\s*(sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)?").unwrap(),
        Regex::new(r"\b(\d+(?:\.\d+)?)\s*(sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)?\s*-\s*(\d+(?:\.\d+)?)\s*(sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)?").unwrap(),
    ]
});

// Checked in this order: a message carrying both kinds of indicator reads
// as a ceiling.
static MAX_INDICATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:up to|not more than|no more than|at most|maximum|max|less than|below|under|within)\b")
        .unwrap()
});
static MIN_INDICATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:starting from|starting at|from|at least|minimum|min|more than|above|over)\b")
        .unwrap()
});

// "area is 200" / "size: 180" qualify a plain number for the area
// vocabulary even without a unit suffix.
static AREA_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:area|size|space)\s*(?:is|of|:)?\s*(\d+(?:\.\d+)?)\b").unwrap()
});

/// A resolved bound pair plus the byte span it was read from, so the caller
/// can mask consumed text before running the next extractor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub span: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vocabulary {
    Budget,
    Area,
}

/// Range extractor bound to one vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct NumericRangeExtractor {
    vocab: Vocabulary,
}

impl NumericRangeExtractor {
    pub fn budget() -> Self {
        Self {
            vocab: Vocabulary::Budget,
        }
    }

    pub fn area() -> Self {
        Self {
            vocab: Vocabulary::Area,
        }
    }

    /// Extract a bound pair from normalized text. `tokens` must be the
    /// number tokens of the same text, minus any the caller already masked.
    pub fn extract(&self, text: &str, tokens: &[NumberToken]) -> Option<ExtractedRange> {
        if let Some(range) = self.explicit_range(text) {
            return Some(range);
        }

        let token = tokens
            .iter()
            .find(|t| self.token_qualifies(t))
            .cloned()
            .or_else(|| self.field_phrase_token(text))?;
        if MAX_INDICATORS.is_match(text) {
            return Some(ExtractedRange {
                min: None,
                max: Some(token.value),
                span: token.span,
            });
        }
        if MIN_INDICATORS.is_match(text) {
            return Some(ExtractedRange {
                min: Some(token.value),
                max: None,
                span: token.span,
            });
        }
        // Bare amount: ceiling for money, floor for space.
        let range = match self.vocab {
            Vocabulary::Budget => ExtractedRange {
                min: None,
                max: Some(token.value),
                span: token.span,
            },
            Vocabulary::Area => ExtractedRange {
                min: Some(token.value),
                max: None,
                span: token.span,
            },
        };
        Some(range)
    }

    fn explicit_range(&self, text: &str) -> Option<ExtractedRange> {
        let patterns = match self.vocab {
            Vocabulary::Budget => &*BUDGET_RANGE_PATTERNS,
            Vocabulary::Area => &*AREA_RANGE_PATTERNS,
        };
        for re in patterns {
            if let Some(caps) = re.captures(text) {
                if let Some(range) = self.resolve_pair(&caps) {
                    return Some(range);
                }
            }
        }
        None
    }

    fn resolve_pair(&self, caps: &Captures) -> Option<ExtractedRange> {
        let full = caps.get(0)?;
        let v1: f64 = caps.get(1)?.as_str().parse().ok()?;
        let v2: f64 = caps.get(3)?.as_str().parse().ok()?;
        let u1 = caps.get(2).map(|m| m.as_str());
        let u2 = caps.get(4).map(|m| m.as_str());

        let (a, b) = match self.vocab {
            Vocabulary::Budget => {
                // "3 to 5 million": a side without a multiplier inherits the
                // other side's.
                let a = v1 * currency_multiplier(u1.or(u2));
                let b = v2 * currency_multiplier(u2.or(u1));
                if u1.is_none() && u2.is_none() && (a < BUDGET_RAW_FLOOR || b < BUDGET_RAW_FLOOR) {
                    return None;
                }
                (a, b)
            }
            Vocabulary::Area => {
                if u1.is_none() && u2.is_none() {
                    return None;
                }
                (v1, v2)
            }
        };

        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Some(ExtractedRange {
            min: Some(min),
            max: Some(max),
            span: (full.start(), full.end()),
        })
    }

    fn field_phrase_token(&self, text: &str) -> Option<NumberToken> {
        if self.vocab != Vocabulary::Area {
            return None;
        }
        let caps = AREA_FIELD.captures(text)?;
        let m = caps.get(1)?;
        let value: f64 = m.as_str().parse().ok()?;
        Some(NumberToken {
            value,
            unit: None,
            span: (m.start(), m.end()),
            approximate: false,
        })
    }

    fn token_qualifies(&self, token: &NumberToken) -> bool {
        match self.vocab {
            Vocabulary::Budget => match token.unit {
                Some(NumberUnit::Million) | Some(NumberUnit::Thousand) => true,
                Some(NumberUnit::Area) => false,
                None => token.value >= BUDGET_RAW_FLOOR,
            },
            Vocabulary::Area => token.unit == Some(NumberUnit::Area),
        }
    }
}

fn currency_multiplier(unit: Option<&str>) -> f64 {
    match unit {
        Some("million") => 1_000_000.0,
        Some("thousand") => 1_000.0,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn budget_of(message: &str) -> Option<ExtractedRange> {
        let norm = normalize(message);
        NumericRangeExtractor::budget().extract(&norm.text, &norm.numbers)
    }

    fn area_of(message: &str) -> Option<ExtractedRange> {
        let norm = normalize(message);
        NumericRangeExtractor::area().extract(&norm.text, &norm.numbers)
    }

    #[test]
    fn test_budget_between_range() {
        let range = budget_of("between 10M and 15M").unwrap();
        assert_eq!(range.min, Some(10_000_000.0));
        assert_eq!(range.max, Some(15_000_000.0));
    }

    #[test]
    fn test_budget_range_unit_inheritance() {
        let range = budget_of("3 to 5 million").unwrap();
        assert_eq!(range.min, Some(3_000_000.0));
        assert_eq!(range.max, Some(5_000_000.0));
    }

    #[test]
    fn test_budget_range_reversed_bounds_swap() {
        let range = budget_of("5M-3M").unwrap();
        assert_eq!(range.min, Some(3_000_000.0));
        assert_eq!(range.max, Some(5_000_000.0));
    }

    #[test]
    fn test_budget_max_indicator() {
        let range = budget_of("up to 6 million").unwrap();
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(6_000_000.0));
    }

    #[test]
    fn test_budget_min_indicator() {
        let range = budget_of("at least 5M").unwrap();
        assert_eq!(range.min, Some(5_000_000.0));
        assert_eq!(range.max, None);
    }

    #[test]
    fn test_budget_max_beats_min_when_both_present() {
        let range = budget_of("less than 6 million but more than nothing").unwrap();
        assert_eq!(range.max, Some(6_000_000.0));
        assert_eq!(range.min, None);
    }

    #[test]
    fn test_bare_budget_is_a_ceiling() {
        let range = budget_of("my budget is 8 million").unwrap();
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(8_000_000.0));
    }

    #[test]
    fn test_raw_number_needs_plausibility_floor() {
        assert_eq!(budget_of("compare option 1 and 3"), None);
        assert_eq!(budget_of("3 bedrooms"), None);
        let range = budget_of("500000 egp").unwrap();
        assert_eq!(range.max, Some(500_000.0));
    }

    #[test]
    fn test_small_range_without_units_rejected() {
        assert_eq!(budget_of("between 2 and 3"), None);
        assert_eq!(budget_of("2 to 3 bedrooms"), None);
    }

    #[test]
    fn test_bare_area_is_a_floor() {
        let range = area_of("around 120 sqm").unwrap();
        assert_eq!(range.min, Some(120.0));
        assert_eq!(range.max, None);
    }

    #[test]
    fn test_area_max_indicator() {
        let range = area_of("at most 200 m2").unwrap();
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(200.0));
    }

    #[test]
    fn test_indicators_read_the_whole_message() {
        // An indicator anywhere in the message qualifies the matched
        // number, even when it sits next to the other vocabulary's amount.
        let range = area_of("minimum 100 sqm, up to 5 million").unwrap();
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(100.0));
    }

    #[test]
    fn test_area_range_with_trailing_unit_only() {
        let range = area_of("200-250 sqm").unwrap();
        assert_eq!(range.min, Some(200.0));
        assert_eq!(range.max, Some(250.0));
    }

    #[test]
    fn test_area_requires_explicit_unit() {
        assert_eq!(area_of("around 200"), None);
        assert_eq!(area_of("8 million"), None);
    }

    #[test]
    fn test_area_field_phrase_without_unit() {
        let range = area_of("size is 200").unwrap();
        assert_eq!(range.min, Some(200.0));
        assert_eq!(range.max, None);
        let range = area_of("area of 180 at least").unwrap();
        assert_eq!(range.min, Some(180.0));
        // A plain number with no field phrase still does not qualify.
        assert_eq!(area_of("something with 200"), None);
    }

    #[test]
    fn test_area_square_meters_spelled_out() {
        let range = area_of("from 150 to 180 square meters").unwrap();
        assert_eq!(range.min, Some(150.0));
        assert_eq!(range.max, Some(180.0));
    }

    #[test]
    fn test_range_span_covers_whole_expression() {
        let norm = normalize("200-250 sqm in Zayed");
        let range = NumericRangeExtractor::area()
            .extract(&norm.text, &norm.numbers)
            .unwrap();
        assert_eq!(&norm.text[range.span.0..range.span.1], "200-250 sqm");
    }
}
