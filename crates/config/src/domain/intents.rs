//! Intent trigger rules.
//!
//! Rules are evaluated top to bottom; the first rule with any firing
//! predicate wins, so table order IS the priority order. Command-like
//! intents sit above content-bearing ones: "cheaper in New Cairo" must
//! refine, not re-provide.

use estate_agent_core::Intent;
use serde::{Deserialize, Serialize};

/// One intent with its trigger predicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRule {
    pub intent: Intent,
    /// Whole-message equality matches ("yes", "ok"). Safe for words too
    /// ambiguous to trigger mid-sentence.
    #[serde(default)]
    pub exact: Vec<String>,
    /// Word-bounded phrase triggers.
    #[serde(default)]
    pub phrases: Vec<String>,
    /// Raw regex triggers for shapes phrases cannot express.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Fire when the message carries search signals (money, area, bedrooms,
    /// unit type or location). Used by PROVIDE_PREFERENCES only.
    #[serde(default)]
    pub search_signals: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentsConfig {
    pub rules: Vec<IntentRule>,
}

impl Default for IntentsConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule {
            intent: Intent::Restart,
            exact: vec![],
            phrases: strs(&[
                "restart",
                "reset",
                "start over",
                "start again",
                "new search",
                "from scratch",
                "begin again",
                "clear all",
                "clear filters",
                "clear everything",
                "wipe",
                // typos seen in chat logs
                "reastart",
                "restar",
                "restert",
                "re set",
                "re-set",
            ]),
            patterns: vec![],
            search_signals: false,
        },
        IntentRule {
            intent: Intent::Compare,
            exact: vec![],
            phrases: strs(&["compare", "comparison", "versus", "difference between"]),
            patterns: vec![
                r"\b(?:option|choice|unit)\s*\d+\s+(?:and|or|vs|versus)\s+(?:option|choice|unit)?\s*\d+\b"
                    .to_string(),
                r"\b\d+\s+(?:vs|versus)\s+\d+\b".to_string(),
            ],
            search_signals: false,
        },
        IntentRule {
            intent: Intent::ConfirmChoice,
            exact: strs(&[
                "yes", "yeah", "yep", "ok", "okay", "sure", "confirm", "confirmed", "deal",
                "done",
            ]),
            phrases: strs(&[
                "i confirm",
                "book it",
                "reserve it",
                "go ahead",
                "proceed",
                "take it",
                "i'll take",
                "i will take",
                "lets do it",
                "let's do it",
                "sounds good",
                "i want this one",
                "i choose",
                "i pick",
            ]),
            patterns: vec![
                r"\b(?:choose|pick|take|book|reserve|go with)\s+(?:option|choice|unit|number)?\s*\d+\b"
                    .to_string(),
            ],
            search_signals: false,
        },
        IntentRule {
            intent: Intent::ShowDetails,
            exact: vec![],
            phrases: strs(&[
                "tell me more",
                "more info",
                "more information",
                "more details",
                "details",
                "describe",
                "amenities",
                "facilities",
                "finishing",
                "payment plan",
                "down payment",
                "installments",
                "delivery date",
                "developer",
                "master plan",
                "floor plan",
                "brochure",
            ]),
            patterns: vec![
                r"\b(?:about|on)\s+(?:option|choice|unit|number)\s*\d+\b".to_string(),
            ],
            search_signals: false,
        },
        IntentRule {
            intent: Intent::FilterResults,
            exact: vec![],
            phrases: strs(&[
                "only show",
                "show only",
                "just show",
                "filter",
                "exclude",
                "remove the",
                "without the",
                "narrow down",
                "narrow it down",
            ]),
            patterns: vec![
                r"\b(?:only|just)\s+(?:the\s+)?(?:apartments?|villas?|studios?|duplexes?|chalets?|townhouses?|penthouses?)\b"
                    .to_string(),
            ],
            search_signals: false,
        },
        IntentRule {
            intent: Intent::SortResults,
            exact: vec![],
            phrases: strs(&[
                "sort",
                "sorted",
                "order by",
                "cheapest",
                "most expensive",
                "lowest price",
                "highest price",
                "price low to high",
                "price high to low",
                "biggest first",
                "smallest first",
                "largest first",
                "newest",
                "latest",
            ]),
            patterns: vec![],
            search_signals: false,
        },
        IntentRule {
            intent: Intent::Navigate,
            // Bare "next"/"back" only as a whole message: "next to the club"
            // is a location phrase, not paging.
            exact: strs(&["next", "back", "previous", "prev"]),
            phrases: strs(&[
                "next page",
                "previous page",
                "go back",
                "show more",
                "load more",
                "see more",
                "more options",
            ]),
            patterns: vec![r"\bpage\s*\d+\b".to_string()],
            search_signals: false,
        },
        IntentRule {
            intent: Intent::ShowResults,
            exact: strs(&["results", "options", "show", "list"]),
            phrases: strs(&[
                "show results",
                "show me results",
                "show options",
                "show me options",
                "show me what you have",
                "list options",
                "list results",
                "what do you have",
                "what's available",
                "what is available",
                "whats available",
                "give me options",
                "any options",
                "view results",
            ]),
            patterns: vec![],
            search_signals: false,
        },
        IntentRule {
            intent: Intent::RefineSearch,
            exact: vec![],
            phrases: strs(&[
                "cheaper",
                "less expensive",
                "lower the budget",
                "lower budget",
                "reduce the budget",
                "reduce budget",
                "decrease",
                "more expensive",
                "increase the budget",
                "increase budget",
                "raise the budget",
                "higher budget",
                "bigger",
                "larger",
                "more space",
                "smaller",
                "less space",
                "adjust",
                "modify",
                "change the budget",
            ]),
            patterns: vec![],
            search_signals: false,
        },
        IntentRule {
            intent: Intent::ProvidePreferences,
            exact: vec![],
            phrases: vec![],
            patterns: vec![],
            search_signals: true,
        },
    ]
}
