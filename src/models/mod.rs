use serde::{Deserialize, Serialize};

mod filter;
mod lottery;
mod recommendation;
mod user_preferences;

pub use filter::FilterCriteria;
pub use lottery::{Category, Frequency, PrizeTier, Product};
pub use recommendation::{Criterion, RecommendationRequest, RecommendationResult, ScoredProduct};
pub use user_preferences::{PreferenceRange, UserPreferences};

// ============================================================================
// Catalog Upstream API Types
// ============================================================================

/// Raw response from the upstream `/api/draws/` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalog {
    #[serde(default)]
    pub request_status: String,
    #[serde(default)]
    pub games: Vec<RawGame>,
}

/// One game record as the upstream reports it, money in minor units
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    /// Game code, e.g. "6x45" or "rapido"
    pub name: String,
    pub display_name: String,
    pub ticket_price: i64,
    pub jackpot: i64,
    #[serde(default)]
    pub draw_frequency: String,
}
