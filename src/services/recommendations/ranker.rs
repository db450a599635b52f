use std::collections::HashSet;

use crate::models::{Product, RecommendationResult, ScoredProduct, UserPreferences};

use super::{reasons, scoring};

/// Products scoring below this are not recommended
pub const MATCH_THRESHOLD: u8 = 50;

/// Scores every product, keeps those at or above [`MATCH_THRESHOLD`] and
/// orders them by score, highest first. Equal scores keep catalog order.
pub fn recommend(
    products: &[Product],
    preferences: &UserPreferences,
    previous_ids: &[String],
) -> RecommendationResult {
    let previous: HashSet<&str> = previous_ids.iter().map(String::as_str).collect();

    let mut scored: Vec<ScoredProduct> = products
        .iter()
        .map(|product| {
            let score = scoring::score(product, preferences);
            ScoredProduct {
                product: product.clone(),
                score,
                reason: reasons::generate_reason(product, preferences, score),
                matched_criteria: reasons::matched_criteria(product, preferences),
                is_new: !previous.contains(product.id.as_str()),
            }
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.retain(|s| s.score >= MATCH_THRESHOLD);

    if scored.is_empty() {
        return RecommendationResult::empty();
    }

    let total: u32 = scored.iter().map(|s| u32::from(s.score)).sum();
    let average_score = f64::from(total) / scored.len() as f64;

    tracing::debug!(
        candidates = products.len(),
        matches = scored.len(),
        average_score,
        "Ranked recommendations"
    );

    RecommendationResult {
        total_matches: scored.len(),
        recommendations: scored,
        average_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Frequency, PreferenceRange};

    fn product(id: &str, price: f64, category: Category) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_uppercase(),
            category,
            price,
            value_ceiling: 1_000_000.0,
            current_value: 800_000.0,
            win_probability: 0.01,
            frequency: Frequency::Daily,
            description: String::new(),
            rules: String::new(),
            prize_tiers: vec![],
            is_active: true,
        }
    }

    fn preferences() -> UserPreferences {
        UserPreferences {
            price: PreferenceRange::new(80.0, 120.0),
            desired_frequency: Frequency::Daily,
            category: Some(Category::Numbered),
            value_range: PreferenceRange::new(700_000.0, 900_000.0),
            probability_range: PreferenceRange::new(0.008, 0.012),
        }
    }

    fn ids(result: &RecommendationResult) -> Vec<&str> {
        result
            .recommendations
            .iter()
            .map(|s| s.product.id.as_str())
            .collect()
    }

    #[test]
    fn test_empty_catalog() {
        let result = recommend(&[], &preferences(), &[]);
        assert_eq!(result, RecommendationResult::empty());
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let products = vec![
            // category miss: 80
            product("instant", 100.0, Category::Instant),
            // everything matches: 100
            product("exact", 100.0, Category::Numbered),
            // price earns 18.75 and category misses: 74
            product("pricey", 130.0, Category::Instant),
        ];

        let result = recommend(&products, &preferences(), &[]);

        assert_eq!(ids(&result), vec!["exact", "instant", "pricey"]);
        let scores: Vec<u8> = result.recommendations.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![100, 80, 74]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let products = vec![
            product("b", 100.0, Category::Numbered),
            product("a", 100.0, Category::Numbered),
            product("c", 100.0, Category::Numbered),
        ];

        let result = recommend(&products, &preferences(), &[]);
        assert_eq!(ids(&result), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        let mut far = product("far", 10_000.0, Category::Sport);
        far.current_value = 0.0;
        far.win_probability = 0.9;

        let result = recommend(
            &[far, product("exact", 100.0, Category::Numbered)],
            &preferences(),
            &[],
        );

        assert_eq!(ids(&result), vec!["exact"]);
        assert_eq!(result.total_matches, 1);
        assert!(result
            .recommendations
            .iter()
            .all(|s| s.score >= MATCH_THRESHOLD));
    }

    #[test]
    fn test_nothing_matches_gives_zero_average() {
        let mut far = product("far", 10_000.0, Category::Sport);
        far.current_value = 0.0;
        far.win_probability = 0.9;

        let result = recommend(&[far], &preferences(), &[]);
        assert!(result.recommendations.is_empty());
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.average_score, 0.0);
    }

    #[test]
    fn test_average_score() {
        let products = vec![
            product("exact", 100.0, Category::Numbered),
            product("instant", 100.0, Category::Instant),
        ];

        let result = recommend(&products, &preferences(), &[]);
        assert_eq!(result.total_matches, 2);
        assert_eq!(result.average_score, 90.0);
    }

    #[test]
    fn test_is_new_flags_previous_recommendations() {
        let products = vec![
            product("seen", 100.0, Category::Numbered),
            product("fresh", 100.0, Category::Numbered),
        ];

        let result = recommend(&products, &preferences(), &["seen".to_string()]);

        let flags: Vec<(&str, bool)> = result
            .recommendations
            .iter()
            .map(|s| (s.product.id.as_str(), s.is_new))
            .collect();
        assert_eq!(flags, vec![("seen", false), ("fresh", true)]);
    }

    #[test]
    fn test_everything_is_new_without_history() {
        let products = vec![
            product("first", 100.0, Category::Numbered),
            product("second", 110.0, Category::Instant),
            product("third", 90.0, Category::Numbered),
        ];

        let result = recommend(&products, &preferences(), &[]);

        assert_eq!(result.total_matches, 3);
        assert!(result.recommendations.iter().all(|s| s.is_new));
    }

    #[test]
    fn test_entries_carry_reason_and_criteria() {
        let result = recommend(
            &[product("exact", 100.0, Category::Numbered)],
            &preferences(),
            &[],
        );

        let entry = &result.recommendations[0];
        assert!(entry.reason.to_lowercase().contains("ideal"));
        assert_eq!(entry.matched_criteria.len(), 5);
    }
}
