//! Preference types and session-state merging
//!
//! A [`PreferenceDelta`] is what one message contributed; a
//! [`SessionPreferenceState`] is the accumulation across the conversation.
//! Both share the same shape so the merge is a field-wise overlay.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property category the user is searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Apartment,
    Villa,
    Studio,
    Duplex,
    Penthouse,
    Chalet,
    TownHouse,
    TwinHouse,
    Loft,
    Cabin,
    Office,
}

impl UnitType {
    /// Canonical display name, as listings render it.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Apartment => "Apartment",
            UnitType::Villa => "Villa",
            UnitType::Studio => "Studio",
            UnitType::Duplex => "Duplex",
            UnitType::Penthouse => "Penthouse",
            UnitType::Chalet => "Chalet",
            UnitType::TownHouse => "Town House",
            UnitType::TwinHouse => "Twin House",
            UnitType::Loft => "Loft",
            UnitType::Cabin => "Cabin",
            UnitType::Office => "Office",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested floor placement within the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorType {
    Ground,
    First,
    Second,
    Low,
    Middle,
    High,
    Top,
}

/// What the unit should look out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    Sea,
    Garden,
    Pool,
    Street,
}

/// Furnishing level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Furnishing {
    Furnished,
    SemiFurnished,
    Unfurnished,
}

/// Qualitative size wish, separate from the numeric area range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePreference {
    Small,
    Compact,
    Large,
    Spacious,
}

/// Unit feature wishes. Every field is tri-state: `None` means the user never
/// mentioned it, `Some(false)` means they explicitly ruled it out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_garden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_roof: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_terrace: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_balcony: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_corner_unit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_end_unit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_type: Option<ViewType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnishing: Option<Furnishing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_preference: Option<SizePreference>,
}

impl UnitFeatures {
    pub fn is_empty(&self) -> bool {
        self.has_garden.is_none()
            && self.has_roof.is_none()
            && self.has_terrace.is_none()
            && self.has_balcony.is_none()
            && self.is_corner_unit.is_none()
            && self.is_end_unit.is_none()
            && self.view_type.is_none()
            && self.furnishing.is_none()
            && self.size_preference.is_none()
    }

    /// Overlay `newer` onto `self`: set fields win, unset fields keep the
    /// existing value.
    pub fn merged(&self, newer: &UnitFeatures) -> UnitFeatures {
        UnitFeatures {
            has_garden: newer.has_garden.or(self.has_garden),
            has_roof: newer.has_roof.or(self.has_roof),
            has_terrace: newer.has_terrace.or(self.has_terrace),
            has_balcony: newer.has_balcony.or(self.has_balcony),
            is_corner_unit: newer.is_corner_unit.or(self.is_corner_unit),
            is_end_unit: newer.is_end_unit.or(self.is_end_unit),
            view_type: newer.view_type.or(self.view_type),
            furnishing: newer.furnishing.or(self.furnishing),
            size_preference: newer.size_preference.or(self.size_preference),
        }
    }
}

/// What a single message contributed. Unset fields mean "not mentioned this
/// turn", never "cleared".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<UnitType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_type: Option<FloorType>,
    #[serde(default, skip_serializing_if = "UnitFeatures::is_empty")]
    pub features: UnitFeatures,
}

impl PreferenceDelta {
    pub fn is_empty(&self) -> bool {
        self.budget_min.is_none()
            && self.budget_max.is_none()
            && self.area_min.is_none()
            && self.area_max.is_none()
            && self.location.is_none()
            && self.unit_type.is_none()
            && self.bedrooms.is_none()
            && self.floor_type.is_none()
            && self.features.is_empty()
    }

    /// Whether the delta carries any primary search criterion (budget, area,
    /// location or unit type).
    pub fn has_search_criteria(&self) -> bool {
        self.budget_min.is_some()
            || self.budget_max.is_some()
            || self.area_min.is_some()
            || self.area_max.is_some()
            || self.location.is_some()
            || self.unit_type.is_some()
    }
}

/// Accumulated preferences across the conversation. Same shape as
/// [`PreferenceDelta`]; the two are kept distinct so call sites cannot
/// confuse "this turn" with "so far".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionPreferenceState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<UnitType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_type: Option<FloorType>,
    #[serde(default, skip_serializing_if = "UnitFeatures::is_empty")]
    pub features: UnitFeatures,
}

impl SessionPreferenceState {
    /// Pure overlay merge: fields set in `delta` overwrite, unset fields keep
    /// the prior value. Never clears anything; a restart is signalled by the
    /// intent tag and handled by the conversation layer.
    pub fn merged(&self, delta: &PreferenceDelta) -> SessionPreferenceState {
        SessionPreferenceState {
            budget_min: delta.budget_min.or(self.budget_min),
            budget_max: delta.budget_max.or(self.budget_max),
            area_min: delta.area_min.or(self.area_min),
            area_max: delta.area_max.or(self.area_max),
            location: delta.location.clone().or_else(|| self.location.clone()),
            unit_type: delta.unit_type.or(self.unit_type),
            bedrooms: delta.bedrooms.or(self.bedrooms),
            floor_type: delta.floor_type.or(self.floor_type),
            features: self.features.merged(&delta.features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_delta() -> PreferenceDelta {
        PreferenceDelta {
            budget_max: Some(8_000_000.0),
            location: Some("New Cairo".to_string()),
            unit_type: Some(UnitType::Apartment),
            bedrooms: Some(3),
            features: UnitFeatures {
                has_garden: Some(true),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_delta_is_a_no_op() {
        let state = SessionPreferenceState {
            budget_max: Some(5_000_000.0),
            location: Some("Rehab".to_string()),
            ..Default::default()
        };
        let merged = state.merged(&PreferenceDelta::default());
        assert_eq!(merged, state);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let state = SessionPreferenceState::default();
        let delta = sample_delta();
        let once = state.merged(&delta);
        let twice = once.merged(&delta);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_fields_overwrite_and_unset_fields_survive() {
        let state = SessionPreferenceState {
            budget_max: Some(5_000_000.0),
            bedrooms: Some(2),
            floor_type: Some(FloorType::Ground),
            ..Default::default()
        };
        let merged = state.merged(&sample_delta());
        assert_eq!(merged.budget_max, Some(8_000_000.0));
        assert_eq!(merged.bedrooms, Some(3));
        // Never mentioned this turn, so the prior value stays.
        assert_eq!(merged.floor_type, Some(FloorType::Ground));
        assert_eq!(merged.location.as_deref(), Some("New Cairo"));
    }

    #[test]
    fn test_features_merge_field_wise() {
        let state = SessionPreferenceState {
            features: UnitFeatures {
                has_balcony: Some(true),
                view_type: Some(ViewType::Garden),
                ..Default::default()
            },
            ..Default::default()
        };
        let delta = PreferenceDelta {
            features: UnitFeatures {
                view_type: Some(ViewType::Sea),
                furnishing: Some(Furnishing::Furnished),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = state.merged(&delta);
        assert_eq!(merged.features.has_balcony, Some(true));
        assert_eq!(merged.features.view_type, Some(ViewType::Sea));
        assert_eq!(merged.features.furnishing, Some(Furnishing::Furnished));
    }

    #[test]
    fn test_delta_serialization_skips_unset_fields() {
        let delta = PreferenceDelta {
            budget_max: Some(8_000_000.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&delta).unwrap();
        assert_eq!(json, serde_json::json!({ "budget_max": 8_000_000.0 }));
    }

    #[test]
    fn test_has_search_criteria() {
        assert!(!PreferenceDelta::default().has_search_criteria());
        assert!(sample_delta().has_search_criteria());
        let floor_only = PreferenceDelta {
            floor_type: Some(FloorType::High),
            ..Default::default()
        };
        assert!(!floor_only.has_search_criteria());
    }
}
