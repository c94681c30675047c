//! Intent tags for a single chat turn
//!
//! Intents are produced by the rule-based classifier in the text processing
//! crate. The order of the variants mirrors the classifier's priority order:
//! command-like intents (restart, compare) outrank content-bearing ones
//! (provide preferences), and `Unknown` is the fallback when nothing fires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete user intent for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Clear everything and start a new search.
    Restart,
    /// Compare previously shown options.
    Compare,
    /// Commit to a previously shown option.
    ConfirmChoice,
    /// Ask for more information about a shown option.
    ShowDetails,
    /// Narrow the current result set.
    FilterResults,
    /// Reorder the current result set.
    SortResults,
    /// Page through the current result set.
    Navigate,
    /// Ask to see matching results.
    ShowResults,
    /// Adjust an existing criterion relative to its current value.
    RefineSearch,
    /// Supply new search criteria.
    ProvidePreferences,
    /// No rule matched.
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Restart => "RESTART",
            Intent::Compare => "COMPARE",
            Intent::ConfirmChoice => "CONFIRM_CHOICE",
            Intent::ShowDetails => "SHOW_DETAILS",
            Intent::FilterResults => "FILTER_RESULTS",
            Intent::SortResults => "SORT_RESULTS",
            Intent::Navigate => "NAVIGATE",
            Intent::ShowResults => "SHOW_RESULTS",
            Intent::RefineSearch => "REFINE_SEARCH",
            Intent::ProvidePreferences => "PROVIDE_PREFERENCES",
            Intent::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
