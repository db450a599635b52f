use crate::models::{Category, Frequency, PrizeTier, Product, RawGame};

use super::tables::{contains_any, NormalizationTables, PrizeAmount};

/// Converts an amount in minor units (kopecks) to major units, rounded
/// half away from zero at cent precision. 150 becomes 1.5, not 1.
pub fn minor_to_major(minor: i64) -> f64 {
    let major = minor as f64 / 100.0;
    (major * 100.0).round() / 100.0
}

/// Turns raw upstream game records into catalog products
#[derive(Debug, Clone, Default)]
pub struct CatalogNormalizer {
    tables: NormalizationTables,
}

impl CatalogNormalizer {
    pub fn new(tables: NormalizationTables) -> Self {
        Self { tables }
    }

    pub fn normalize(&self, game: &RawGame) -> Product {
        let price = minor_to_major(game.ticket_price);
        let jackpot = minor_to_major(game.jackpot);
        let category = self.infer_category(&game.name);

        Product {
            id: game.name.clone(),
            name: game.display_name.clone(),
            category,
            price,
            value_ceiling: jackpot,
            current_value: jackpot,
            win_probability: self.estimate_win_probability(&game.name),
            frequency: self.infer_frequency(&game.draw_frequency),
            description: describe(&game.display_name, category),
            rules: rules(&game.display_name),
            prize_tiers: self.prize_tiers(jackpot),
            is_active: true,
        }
    }

    /// Numbered, then instant, then sport codes; anything else is draw-based
    pub fn infer_category(&self, code: &str) -> Category {
        if contains_any(code, &self.tables.numbered_codes) {
            Category::Numbered
        } else if contains_any(code, &self.tables.instant_codes) {
            Category::Instant
        } else if contains_any(code, &self.tables.sport_codes) {
            Category::Sport
        } else {
            Category::DrawBased
        }
    }

    /// Daily, then weekly, then several-per-week synonyms; weekly otherwise
    pub fn infer_frequency(&self, raw: &str) -> Frequency {
        if contains_any(raw, &self.tables.daily_synonyms) {
            Frequency::Daily
        } else if contains_any(raw, &self.tables.weekly_synonyms) {
            Frequency::Weekly
        } else if contains_any(raw, &self.tables.several_per_week_synonyms) {
            Frequency::SeveralPerWeek
        } else {
            Frequency::Weekly
        }
    }

    pub fn estimate_win_probability(&self, code: &str) -> f64 {
        self.tables
            .win_probabilities
            .iter()
            .find(|rule| contains_any(code, &rule.codes))
            .map_or(self.tables.default_win_probability, |rule| rule.probability)
    }

    fn prize_tiers(&self, jackpot: f64) -> Vec<PrizeTier> {
        self.tables
            .prize_tiers
            .iter()
            .map(|tier| PrizeTier {
                category: tier.category.clone(),
                prize: match tier.prize {
                    PrizeAmount::JackpotMillions { share } => {
                        format!("{:.1}M RUB", jackpot * share / 1_000_000.0)
                    }
                    PrizeAmount::JackpotShare { share } => format!("{:.0} RUB", jackpot * share),
                    PrizeAmount::Fixed { amount } => format!("{:.0} RUB", amount),
                },
                probability: tier.odds.clone(),
            })
            .collect()
    }
}

fn describe(display_name: &str, category: Category) -> String {
    match category {
        Category::Numbered => format!(
            "{} is a popular numbered lottery. Pick your numbers and win a big prize!",
            display_name
        ),
        Category::Instant => format!(
            "{} is an instant lottery with frequent draws and quick results!",
            display_name
        ),
        Category::DrawBased => format!(
            "{} is a classic draw-based lottery with large prizes!",
            display_name
        ),
        Category::Sport => format!(
            "{} is a sports lottery for fans of fast-paced games!",
            display_name
        ),
    }
}

fn rules(display_name: &str) -> String {
    format!(
        "Buy a {} ticket and pick your numbers according to the game rules. \
         Draws follow the published schedule. Match every number to win the main prize!",
        display_name
    )
}
