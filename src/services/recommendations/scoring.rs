use crate::models::{PreferenceRange, Product, UserPreferences};

pub const PRICE_WEIGHT: f64 = 25.0;
pub const CATEGORY_WEIGHT: f64 = 20.0;
pub const VALUE_WEIGHT: f64 = 30.0;
pub const PROBABILITY_WEIGHT: f64 = 25.0;

/// Weighted 0-100 match between a product and the user's preferences.
///
/// The category weight only counts when the user asked for a category; when
/// absent it leaves both the earned and the applicable totals.
pub fn score(product: &Product, preferences: &UserPreferences) -> u8 {
    let mut earned = 0.0;
    let mut applicable = 0.0;

    applicable += PRICE_WEIGHT;
    earned += range_credit(product.price, &preferences.price, PRICE_WEIGHT);

    if let Some(category) = preferences.category {
        applicable += CATEGORY_WEIGHT;
        if category == product.category {
            earned += CATEGORY_WEIGHT;
        }
    }

    applicable += VALUE_WEIGHT;
    earned += range_credit(product.current_value, &preferences.value_range, VALUE_WEIGHT);

    applicable += PROBABILITY_WEIGHT;
    earned += range_credit(
        product.win_probability,
        &preferences.probability_range,
        PROBABILITY_WEIGHT,
    );

    if applicable <= 0.0 {
        return 0;
    }

    // f64::round rounds half away from zero
    (100.0 * earned / applicable).round().clamp(0.0, 100.0) as u8
}

/// Full `weight` inside the range, linearly less the further outside it.
///
/// A zero-width range gives full credit on exact equality and nothing else.
pub fn range_credit(value: f64, range: &PreferenceRange, weight: f64) -> f64 {
    if range.contains(value) {
        return weight;
    }

    let width = range.width();
    if width <= 0.0 {
        return 0.0;
    }

    (weight - (range.distance_to_nearest_bound(value) / width) * weight).max(0.0)
}
