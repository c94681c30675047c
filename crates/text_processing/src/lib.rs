//! Text extraction engine for the estate agent
//!
//! This crate turns one chat message plus the prior session state into a
//! preference delta, an intent tag and the merged new state:
//! - **Normalization**: lowercasing, shorthand expansion (`5m` -> `5 million`),
//!   separator stripping, approximation markers folded into number tokens
//! - **Amounts**: one generic range engine run twice (budget, then area),
//!   with min/max indicators and a plausibility floor for raw budgets
//! - **Locations**: alias table lookup with Levenshtein-based typo tolerance
//! - **Unit types**: synonym tables for unit type, bedrooms, floor, features
//! - **Intents**: ordered trigger rules, first match wins
//!
//! # Example
//!
//! ```ignore
//! use estate_agent_config::DomainConfig;
//! use estate_agent_core::SessionPreferenceState;
//! use estate_agent_text_processing::PreferenceExtractor;
//!
//! let extractor = PreferenceExtractor::from_config(&DomainConfig::default())?;
//! let out = extractor.extract(
//!     "3 bedroom apartment in New Cairo around 8M",
//!     &SessionPreferenceState::default(),
//! );
//! println!("{} -> {:?}", out.intent, out.delta);
//! ```

pub mod amount;
pub mod intent;
pub mod location;
pub mod normalize;
pub mod unit_type;

mod extractor;

pub use extractor::{Extraction, PreferenceExtractor};

// Re-export key types
pub use amount::{ExtractedRange, NumericRangeExtractor};
pub use intent::IntentClassifier;
pub use location::{levenshtein, LevenshteinScorer, LocationMatcher, SimilarityScorer};
pub use normalize::{normalize, NormalizedMessage, NumberToken, NumberUnit};
pub use unit_type::{UnitTypeExtraction, UnitTypeExtractor};
