//! Configuration for the estate agent
//!
//! This crate carries the domain tables the extraction engine is driven by:
//! - Location alias table (canonical names plus spelling/typo variants)
//! - Unit-type synonym table
//! - Feature, floor and view keyword sets
//! - Intent trigger rules in priority order
//!
//! Every table ships with a built-in default (`DomainConfig::default()`) and
//! can be overridden from a YAML file (`DomainConfig::load`). Tables are
//! loaded once at startup and treated as immutable afterwards.

pub mod domain;

pub use domain::{
    DomainConfig, FeaturesConfig, FloorTypeEntry, FurnishingEntry, IntentRule, IntentsConfig,
    LocationEntry, LocationsConfig, SizeEntry, UnitTypeEntry, UnitTypesConfig, ViewEntry,
};

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
