//! Core types for the estate agent
//!
//! This crate provides foundational types used across all other crates:
//! - Preference types (budget, area, location, unit type, features)
//! - Turn-level extraction deltas and accumulated session state
//! - Intent tags produced by the rule-based classifier

pub mod intent;
pub mod preferences;

pub use intent::Intent;
pub use preferences::{
    FloorType, Furnishing, PreferenceDelta, SessionPreferenceState, SizePreference, UnitFeatures,
    UnitType, ViewType,
};
