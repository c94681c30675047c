//! Rule-based intent classification.
//!
//! Rules compile from the intents table and evaluate top to bottom; the
//! first rule with a firing predicate wins and later rules are never
//! consulted. PROVIDE_PREFERENCES sits last with a search-signal predicate
//! instead of trigger phrases, and anything that fires nothing is UNKNOWN.

use crate::unit_type::word_bounded;
use estate_agent_config::{ConfigError, DomainConfig};
use estate_agent_core::Intent;
use once_cell::sync::Lazy;
use regex::Regex;

static MONEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:\.\d+)?\s*(?:million|thousand)\b").unwrap());
static BIG_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{6,}\b").unwrap());
static BUDGET_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:budget|price|egp|pounds?)\b").unwrap());
static ANY_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());
static AREA_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?\s*(?:sqm|m2|square\s+met(?:er|re)s?|met(?:er|re)s?)\b").unwrap()
});
static BEDROOM_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}[-\s]*(?:bedrooms?|beds?|br)\b").unwrap());

struct CompiledRule {
    intent: Intent,
    exact: Vec<String>,
    triggers: Vec<Regex>,
    search_signals: bool,
}

/// Cheap lexical evidence that a message is supplying search criteria.
struct SearchSignals {
    unit_keywords: Vec<Regex>,
    location_aliases: Vec<String>,
}

impl SearchSignals {
    fn present(&self, text: &str) -> bool {
        MONEY.is_match(text)
            || BIG_NUMBER.is_match(text)
            || (BUDGET_WORD.is_match(text) && ANY_NUMBER.is_match(text))
            || AREA_MENTION.is_match(text)
            || BEDROOM_MENTION.is_match(text)
            || self.unit_keywords.iter().any(|re| re.is_match(text))
            || self
                .location_aliases
                .iter()
                .any(|alias| text.contains(alias.as_str()))
    }
}

pub struct IntentClassifier {
    rules: Vec<CompiledRule>,
    signals: SearchSignals,
}

impl IntentClassifier {
    pub fn from_config(config: &DomainConfig) -> Result<Self, ConfigError> {
        let mut rules = Vec::with_capacity(config.intents.rules.len());
        for rule in &config.intents.rules {
            let mut triggers = Vec::new();
            for phrase in &rule.phrases {
                triggers.push(word_bounded(phrase)?);
            }
            for pattern in &rule.patterns {
                triggers.push(Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
                    field: "intents.rules.patterns".to_string(),
                    message: format!("{pattern}: {e}"),
                })?);
            }
            rules.push(CompiledRule {
                intent: rule.intent,
                exact: rule.exact.iter().map(|e| e.to_lowercase()).collect(),
                triggers,
                search_signals: rule.search_signals,
            });
        }

        let mut unit_keywords = Vec::new();
        for entry in &config.unit_types.entries {
            for keyword in &entry.keywords {
                unit_keywords.push(word_bounded(keyword)?);
            }
        }
        let mut location_aliases = Vec::new();
        for entry in &config.locations.entries {
            location_aliases.push(entry.canonical.to_lowercase());
            for alias in &entry.aliases {
                location_aliases.push(alias.to_lowercase());
            }
        }

        Ok(Self {
            rules,
            signals: SearchSignals {
                unit_keywords,
                location_aliases,
            },
        })
    }

    /// Classify normalized (lowercase, shorthand-expanded) text.
    pub fn classify(&self, text: &str) -> Intent {
        for rule in &self.rules {
            if rule.exact.iter().any(|e| e == text) {
                return rule.intent;
            }
            if rule.triggers.iter().any(|re| re.is_match(text)) {
                return rule.intent;
            }
            if rule.search_signals && self.signals.present(text) {
                return rule.intent;
            }
        }
        Intent::Unknown
    }
}
