//! Feature, floor and view keyword sets.
//!
//! Boolean features (garden, roof, ...) are independent detectors; the
//! single-valued categories (view, furnishing, size) each resolve to at most
//! one value per message, leftmost keyword match winning.

use estate_agent_core::{FloorType, Furnishing, SizePreference, ViewType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorTypeEntry {
    pub floor_type: FloorType,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewEntry {
    pub view_type: ViewType,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnishingEntry {
    pub furnishing: Furnishing,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeEntry {
    pub size: SizePreference,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub floor_types: Vec<FloorTypeEntry>,
    pub garden: Vec<String>,
    pub roof: Vec<String>,
    pub terrace: Vec<String>,
    pub balcony: Vec<String>,
    pub corner_unit: Vec<String>,
    pub end_unit: Vec<String>,
    pub views: Vec<ViewEntry>,
    pub furnishing: Vec<FurnishingEntry>,
    pub sizes: Vec<SizeEntry>,
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            floor_types: vec![
                FloorTypeEntry {
                    floor_type: FloorType::Ground,
                    phrases: strs(&["ground floor", "ground level"]),
                },
                FloorTypeEntry {
                    floor_type: FloorType::First,
                    phrases: strs(&["first floor", "1st floor"]),
                },
                FloorTypeEntry {
                    floor_type: FloorType::Second,
                    phrases: strs(&["second floor", "2nd floor"]),
                },
                FloorTypeEntry {
                    floor_type: FloorType::Low,
                    phrases: strs(&["low floor", "lower floor"]),
                },
                FloorTypeEntry {
                    floor_type: FloorType::Middle,
                    phrases: strs(&["middle floor", "mid floor"]),
                },
                FloorTypeEntry {
                    floor_type: FloorType::High,
                    phrases: strs(&["high floor", "higher floor"]),
                },
                FloorTypeEntry {
                    floor_type: FloorType::Top,
                    phrases: strs(&["top floor", "upper floor", "last floor", "roof floor"]),
                },
            ],
            garden: strs(&["with garden", "private garden", "own garden", "garden unit", "garden villa"]),
            roof: strs(&["with roof", "private roof", "roof terrace", "rooftop"]),
            terrace: strs(&["terrace", "with terrace", "big terrace"]),
            balcony: strs(&["balcony", "balconies", "with balcony"]),
            corner_unit: strs(&["corner unit", "corner lot", "on the corner"]),
            end_unit: strs(&["end unit"]),
            views: vec![
                ViewEntry {
                    view_type: ViewType::Sea,
                    phrases: strs(&["sea view", "ocean view", "beach view", "overlooking the sea"]),
                },
                ViewEntry {
                    view_type: ViewType::Garden,
                    phrases: strs(&["garden view", "green view", "park view", "landscape view"]),
                },
                ViewEntry {
                    view_type: ViewType::Pool,
                    phrases: strs(&["pool view", "overlooking the pool", "lagoon view"]),
                },
                ViewEntry {
                    view_type: ViewType::Street,
                    phrases: strs(&["street view", "road view"]),
                },
            ],
            furnishing: vec![
                FurnishingEntry {
                    furnishing: Furnishing::Unfurnished,
                    phrases: strs(&["unfurnished", "not furnished", "without furniture"]),
                },
                FurnishingEntry {
                    furnishing: Furnishing::SemiFurnished,
                    phrases: strs(&[
                        "semi furnished",
                        "semi-furnished",
                        "half furnished",
                        "partly furnished",
                    ]),
                },
                FurnishingEntry {
                    furnishing: Furnishing::Furnished,
                    phrases: strs(&["furnished", "fully furnished", "with furniture"]),
                },
            ],
            sizes: vec![
                SizeEntry {
                    size: SizePreference::Small,
                    phrases: strs(&["small"]),
                },
                SizeEntry {
                    size: SizePreference::Compact,
                    phrases: strs(&["compact", "cozy"]),
                },
                SizeEntry {
                    size: SizePreference::Large,
                    phrases: strs(&["large", "big"]),
                },
                SizeEntry {
                    size: SizePreference::Spacious,
                    phrases: strs(&["spacious", "roomy"]),
                },
            ],
        }
    }
}
