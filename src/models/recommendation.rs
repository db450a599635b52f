use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Product, UserPreferences};

/// A scoring dimension a product can satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Price,
    Category,
    Value,
    Probability,
    Frequency,
}

/// A product with its match score and explanation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    pub product: Product,
    /// 0-100
    pub score: u8,
    pub reason: String,
    pub matched_criteria: BTreeSet<Criterion>,
    /// True unless the product was recommended to this user before
    pub is_new: bool,
}

/// Request body for the recommendations endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub preferences: UserPreferences,
    /// Products shown to the user previously
    #[serde(default)]
    pub previous_lottery_ids: Vec<String>,
}

/// Ranked recommendations with aggregate statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// Score-descending, every entry at or above the match threshold
    pub recommendations: Vec<ScoredProduct>,
    pub total_matches: usize,
    pub average_score: f64,
}

impl RecommendationResult {
    pub fn empty() -> Self {
        Self {
            recommendations: Vec::new(),
            total_matches: 0,
            average_score: 0.0,
        }
    }
}
