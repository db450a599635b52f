use serde::{de::IntoDeserializer, Deserialize, Deserializer};

use super::{Category, PreferenceRange, Product};

/// Optional catalog filters; every provided filter must hold
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub price_range: Option<PreferenceRange>,
    /// A blank category means no category filter
    #[serde(default, deserialize_with = "blank_category_as_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub value_range: Option<PreferenceRange>,
    #[serde(default)]
    pub probability_range: Option<PreferenceRange>,
}

impl FilterCriteria {
    pub fn matches(&self, product: &Product) -> bool {
        let within = |range: &Option<PreferenceRange>, value: f64| {
            range.map_or(true, |range| range.contains(value))
        };

        within(&self.price_range, product.price)
            && self.category.map_or(true, |category| category == product.category)
            && within(&self.value_range, product.current_value)
            && within(&self.probability_range, product.win_probability)
    }

    /// Names the first provided range that breaks the `min <= max` contract
    pub fn first_invalid_range(&self) -> Option<&'static str> {
        [
            ("priceRange", &self.price_range),
            ("valueRange", &self.value_range),
            ("probabilityRange", &self.probability_range),
        ]
        .into_iter()
        .find(|(_, range)| range.is_some_and(|range| !range.is_valid()))
        .map(|(name, _)| name)
    }
}

fn blank_category_as_none<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(token) => {
            Category::deserialize(IntoDeserializer::<D::Error>::into_deserializer(token)).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;

    fn product(price: f64, category: Category, value: f64, probability: f64) -> Product {
        Product {
            id: "test".to_string(),
            name: "Test".to_string(),
            category,
            price,
            value_ceiling: value,
            current_value: value,
            win_probability: probability,
            frequency: Frequency::Weekly,
            description: String::new(),
            rules: String::new(),
            prize_tiers: vec![],
            is_active: true,
        }
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&product(1_000.0, Category::Sport, 1.0, 0.5)));
    }

    #[test]
    fn test_all_provided_filters_must_hold() {
        let criteria = FilterCriteria {
            price_range: Some(PreferenceRange::new(50.0, 150.0)),
            category: Some(Category::Numbered),
            value_range: None,
            probability_range: None,
        };

        assert!(criteria.matches(&product(100.0, Category::Numbered, 1.0, 0.1)));
        assert!(!criteria.matches(&product(100.0, Category::Instant, 1.0, 0.1)));
        assert!(!criteria.matches(&product(200.0, Category::Numbered, 1.0, 0.1)));
    }

    #[test]
    fn test_value_filter_uses_current_value() {
        let criteria = FilterCriteria {
            value_range: Some(PreferenceRange::new(0.0, 10.0)),
            ..FilterCriteria::default()
        };

        let mut lottery = product(100.0, Category::Numbered, 5.0, 0.1);
        lottery.value_ceiling = 1_000.0;
        assert!(criteria.matches(&lottery));
    }

    #[test]
    fn test_first_invalid_range_ignores_missing_filters() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.first_invalid_range(), None);

        criteria.probability_range = Some(PreferenceRange::new(1.0, 0.5));
        assert_eq!(criteria.first_invalid_range(), Some("probabilityRange"));
    }

    #[test]
    fn test_blank_category_is_no_filter() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"category": ""}"#).unwrap();
        assert_eq!(criteria, FilterCriteria::default());

        let criteria: FilterCriteria = serde_json::from_str(r#"{"category": null}"#).unwrap();
        assert_eq!(criteria.category, None);

        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"category": "draw_based"}"#).unwrap();
        assert_eq!(criteria.category, Some(Category::DrawBased));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(serde_json::from_str::<FilterCriteria>(r#"{"category": "lotto"}"#).is_err());
    }
}
