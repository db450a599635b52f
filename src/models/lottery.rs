use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Kind of lottery product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Pick-your-numbers lotteries (6x45, 5x36, ...)
    Numbered,
    /// Fast lotteries with draws every few minutes
    Instant,
    /// Classic scheduled draw lotteries
    DrawBased,
    /// Sports lotteries
    Sport,
}

impl Category {
    /// Wire token, identical to the serde representation
    pub const fn token(self) -> &'static str {
        match self {
            Category::Numbered => "numbered",
            Category::Instant => "instant",
            Category::DrawBased => "draw_based",
            Category::Sport => "sport",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// How often a lottery holds draws (or how often a user wants to play)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    SeveralPerWeek,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Wire token, identical to the serde representation
    pub const fn token(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::SeveralPerWeek => "several_per_week",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }

    /// Whether a user who wants to play at `self` cadence is served by a
    /// lottery drawing at `product` cadence.
    ///
    /// Compares tokens, not variants: only the daily and weekly preferences
    /// can align, and only with a product token that contains them.
    pub fn aligns_with(self, product: Frequency) -> bool {
        let wanted = self.token().to_lowercase();
        let offered = product.token().to_lowercase();

        match self {
            Frequency::Daily | Frequency::Weekly => offered.contains(wanted.as_str()),
            Frequency::SeveralPerWeek | Frequency::Monthly => false,
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One row of a lottery's prize table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrizeTier {
    pub category: String,
    pub prize: String,
    pub probability: String,
}

/// A lottery offered in the catalog, in major currency units
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within one catalog snapshot (the upstream game code)
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Ticket price
    pub price: f64,
    /// Largest jackpot the lottery advertises
    pub value_ceiling: f64,
    /// Jackpot currently on offer
    pub current_value: f64,
    pub win_probability: f64,
    pub frequency: Frequency,
    pub description: String,
    pub rules: String,
    pub prize_tiers: Vec<PrizeTier>,
    pub is_active: bool,
}
