//! The extraction facade: one call per chat turn.
//!
//! Normalizes the message once, runs the extractors in a fixed order (area
//! before budget so suffixed numbers are consumed first), classifies the
//! intent on the same normalized text and merges the delta into the prior
//! session state. The extractor holds only compiled tables, so one instance
//! can serve every conversation concurrently.

use crate::amount::NumericRangeExtractor;
use crate::intent::IntentClassifier;
use crate::location::{LocationMatcher, SimilarityScorer};
use crate::normalize::{normalize, NumberToken};
use crate::unit_type::UnitTypeExtractor;
use estate_agent_config::{ConfigError, DomainConfig};
use estate_agent_core::{Intent, PreferenceDelta, SessionPreferenceState};
use serde::Serialize;

/// Result of one extraction turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    /// What this message contributed.
    pub delta: PreferenceDelta,
    /// Classified intent for this message.
    pub intent: Intent,
    /// Prior state with the delta merged in.
    pub state: SessionPreferenceState,
}

pub struct PreferenceExtractor {
    budget: NumericRangeExtractor,
    area: NumericRangeExtractor,
    locations: LocationMatcher,
    units: UnitTypeExtractor,
    intents: IntentClassifier,
}

impl PreferenceExtractor {
    pub fn from_config(config: &DomainConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            budget: NumericRangeExtractor::budget(),
            area: NumericRangeExtractor::area(),
            locations: LocationMatcher::from_config(&config.locations),
            units: UnitTypeExtractor::from_config(config)?,
            intents: IntentClassifier::from_config(config)?,
        })
    }

    /// Same as [`from_config`](Self::from_config) with a custom similarity
    /// scorer for location typo matching.
    pub fn with_scorer(
        config: &DomainConfig,
        scorer: Box<dyn SimilarityScorer>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            budget: NumericRangeExtractor::budget(),
            area: NumericRangeExtractor::area(),
            locations: LocationMatcher::with_scorer(&config.locations, scorer),
            units: UnitTypeExtractor::from_config(config)?,
            intents: IntentClassifier::from_config(config)?,
        })
    }

    /// Extract preferences and intent from one message. Never fails: a
    /// message with nothing to extract yields an empty delta, the UNKNOWN
    /// intent and an unchanged state.
    pub fn extract(&self, message: &str, prior: &SessionPreferenceState) -> Extraction {
        let norm = normalize(message);

        // Area first: it claims the unit-suffixed numbers, and whatever it
        // matched is masked out before the budget pass.
        let area = self.area.extract(&norm.text, &norm.numbers);
        let (budget_text, budget_tokens) = match &area {
            Some(range) => masked(&norm.text, &norm.numbers, range.span),
            None => (norm.text.clone(), norm.numbers.clone()),
        };
        let budget = self.budget.extract(&budget_text, &budget_tokens);

        let unit = self.units.extract(&norm.text);
        let delta = PreferenceDelta {
            budget_min: budget.as_ref().and_then(|r| r.min),
            budget_max: budget.as_ref().and_then(|r| r.max),
            area_min: area.as_ref().and_then(|r| r.min),
            area_max: area.as_ref().and_then(|r| r.max),
            location: self.locations.resolve(&norm.text),
            unit_type: unit.unit_type,
            bedrooms: unit.bedrooms,
            floor_type: unit.floor_type,
            features: unit.features,
        };

        let mut intent = self.intents.classify(&norm.text);
        if intent == Intent::Unknown && delta.has_search_criteria() {
            // No trigger fired but the message still yielded criteria, e.g.
            // a lone typo'd location that only the fuzzy matcher caught.
            intent = Intent::ProvidePreferences;
        }
        let state = prior.merged(&delta);

        tracing::debug!(
            %intent,
            empty_delta = delta.is_empty(),
            location = delta.location.as_deref().unwrap_or(""),
            "extracted turn"
        );

        Extraction {
            delta,
            intent,
            state,
        }
    }
}

/// Blank out a consumed span (byte-for-byte, so token spans stay valid) and
/// drop the tokens inside it.
fn masked(text: &str, tokens: &[NumberToken], span: (usize, usize)) -> (String, Vec<NumberToken>) {
    let mut text = text.to_string();
    text.replace_range(span.0..span.1, &" ".repeat(span.1 - span.0));
    let tokens = tokens
        .iter()
        .filter(|t| t.span.1 <= span.0 || t.span.0 >= span.1)
        .cloned()
        .collect();
    (text, tokens)
}
