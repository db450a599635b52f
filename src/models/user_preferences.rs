use serde::{Deserialize, Serialize};

use super::{Category, Frequency};

/// Inclusive `[min, max]` window for a numeric product attribute
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PreferenceRange {
    pub min: f64,
    pub max: f64,
}

impl PreferenceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Finite, non-negative and ordered
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn distance_to_nearest_bound(&self, value: f64) -> f64 {
        (value - self.min).abs().min((value - self.max).abs())
    }
}

/// What the user is looking for in a lottery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Acceptable ticket price
    pub price: PreferenceRange,
    /// How often the user wants to play
    pub desired_frequency: Frequency,
    /// Preferred lottery kind; `None` takes the category out of scoring entirely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Acceptable current jackpot
    pub value_range: PreferenceRange,
    /// Acceptable win probability
    pub probability_range: PreferenceRange,
}

impl UserPreferences {
    /// Names the first range that breaks the `min <= max` contract, if any
    pub fn first_invalid_range(&self) -> Option<&'static str> {
        [
            ("price", &self.price),
            ("valueRange", &self.value_range),
            ("probabilityRange", &self.probability_range),
        ]
        .into_iter()
        .find(|(_, range)| !range.is_valid())
        .map(|(name, _)| name)
    }
}
