//! Unit type, bedroom count, floor and feature extraction.
//!
//! All detectors are independent: a message can set any subset of them in a
//! single pass. Keywords come from the domain tables and are compiled to
//! word-bounded regexes once at construction.

use estate_agent_config::{ConfigError, DomainConfig};
use estate_agent_core::{FloorType, Furnishing, SizePreference, UnitFeatures, UnitType, ViewType};
use once_cell::sync::Lazy;
use regex::Regex;

static BEDROOMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})[-\s]*(?:bedrooms?|beds?|br)\b").unwrap());

/// Everything this extractor reads from one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitTypeExtraction {
    pub unit_type: Option<UnitType>,
    pub bedrooms: Option<u8>,
    pub floor_type: Option<FloorType>,
    pub features: UnitFeatures,
}

pub struct UnitTypeExtractor {
    /// Longest keyword first, so "town house" is tried before "house"-like
    /// overlaps ever could be.
    unit_keywords: Vec<(Regex, UnitType)>,
    floor_phrases: Vec<(Regex, FloorType)>,
    garden: Vec<Regex>,
    roof: Vec<Regex>,
    terrace: Vec<Regex>,
    balcony: Vec<Regex>,
    corner_unit: Vec<Regex>,
    end_unit: Vec<Regex>,
    views: Vec<(Vec<Regex>, ViewType)>,
    furnishing: Vec<(Vec<Regex>, Furnishing)>,
    sizes: Vec<(Vec<Regex>, SizePreference)>,
}

pub(crate) fn word_bounded(phrase: &str) -> Result<Regex, ConfigError> {
    Regex::new(&format!(r"\b{}\b", regex::escape(phrase))).map_err(|e| {
        ConfigError::InvalidValue {
            field: "keyword".to_string(),
            message: format!("{phrase}: {e}"),
        }
    })
}

fn compile_set(phrases: &[String]) -> Result<Vec<Regex>, ConfigError> {
    phrases.iter().map(|p| word_bounded(p)).collect()
}

impl UnitTypeExtractor {
    pub fn from_config(config: &DomainConfig) -> Result<Self, ConfigError> {
        let mut unit_keywords = Vec::new();
        for entry in &config.unit_types.entries {
            for keyword in &entry.keywords {
                unit_keywords.push((keyword.clone(), entry.unit_type));
            }
        }
        unit_keywords.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        let unit_keywords = unit_keywords
            .into_iter()
            .map(|(kw, ty)| word_bounded(&kw).map(|re| (re, ty)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut floor_phrases = Vec::new();
        for entry in &config.features.floor_types {
            for phrase in &entry.phrases {
                floor_phrases.push((word_bounded(phrase)?, entry.floor_type));
            }
        }

        let features = &config.features;
        Ok(Self {
            unit_keywords,
            floor_phrases,
            garden: compile_set(&features.garden)?,
            roof: compile_set(&features.roof)?,
            terrace: compile_set(&features.terrace)?,
            balcony: compile_set(&features.balcony)?,
            corner_unit: compile_set(&features.corner_unit)?,
            end_unit: compile_set(&features.end_unit)?,
            views: features
                .views
                .iter()
                .map(|e| compile_set(&e.phrases).map(|r| (r, e.view_type)))
                .collect::<Result<Vec<_>, _>>()?,
            furnishing: features
                .furnishing
                .iter()
                .map(|e| compile_set(&e.phrases).map(|r| (r, e.furnishing)))
                .collect::<Result<Vec<_>, _>>()?,
            sizes: features
                .sizes
                .iter()
                .map(|e| compile_set(&e.phrases).map(|r| (r, e.size)))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    /// Run every detector over normalized text.
    pub fn extract(&self, text: &str) -> UnitTypeExtraction {
        UnitTypeExtraction {
            unit_type: self.unit_type(text),
            bedrooms: self.bedrooms(text),
            floor_type: self.floor_type(text),
            features: self.features(text),
        }
    }

    pub fn unit_type(&self, text: &str) -> Option<UnitType> {
        self.unit_keywords
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, ty)| *ty)
    }

    pub fn bedrooms(&self, text: &str) -> Option<u8> {
        let caps = BEDROOMS.captures(text)?;
        caps.get(1)?.as_str().parse().ok()
    }

    pub fn floor_type(&self, text: &str) -> Option<FloorType> {
        leftmost(&self.floor_phrases, text)
    }

    pub fn features(&self, text: &str) -> UnitFeatures {
        UnitFeatures {
            has_garden: flag(&self.garden, text),
            has_roof: flag(&self.roof, text),
            has_terrace: flag(&self.terrace, text),
            has_balcony: flag(&self.balcony, text),
            is_corner_unit: flag(&self.corner_unit, text),
            is_end_unit: flag(&self.end_unit, text),
            view_type: leftmost_grouped(&self.views, text),
            furnishing: leftmost_grouped(&self.furnishing, text),
            size_preference: leftmost_grouped(&self.sizes, text),
        }
    }
}

fn flag(regexes: &[Regex], text: &str) -> Option<bool> {
    if regexes.iter().any(|re| re.is_match(text)) {
        Some(true)
    } else {
        None
    }
}

/// Earliest match in the text wins; on equal starts the longer match wins.
fn leftmost<T: Copy>(entries: &[(Regex, T)], text: &str) -> Option<T> {
    let mut best: Option<(usize, usize, T)> = None;
    for (re, value) in entries {
        if let Some(m) = re.find(text) {
            let better = match best {
                None => true,
                Some((start, len, _)) => {
                    m.start() < start || (m.start() == start && m.len() > len)
                }
            };
            if better {
                best = Some((m.start(), m.len(), *value));
            }
        }
    }
    best.map(|(_, _, v)| v)
}

fn leftmost_grouped<T: Copy>(groups: &[(Vec<Regex>, T)], text: &str) -> Option<T> {
    let mut best: Option<(usize, usize, T)> = None;
    for (regexes, value) in groups {
        for re in regexes {
            if let Some(m) = re.find(text) {
                let better = match best {
                    None => true,
                    Some((start, len, _)) => {
                        m.start() < start || (m.start() == start && m.len() > len)
                    }
                };
                if better {
                    best = Some((m.start(), m.len(), *value));
                }
            }
        }
    }
    best.map(|(_, _, v)| v)
}
