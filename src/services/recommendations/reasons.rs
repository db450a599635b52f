use std::collections::BTreeSet;

use crate::models::{Category, Criterion, Frequency, Product, UserPreferences};

pub const DEFAULT_REASON: &str = "This lottery might suit you!";

const IDEAL_SCORE: u8 = 90;
const STRONG_SCORE: u8 = 70;
const HIGH_PROBABILITY: f64 = 0.05;
const GOOD_PROBABILITY: f64 = 0.01;

/// Human-readable explanation of why a product was recommended. Never empty.
pub fn generate_reason(product: &Product, preferences: &UserPreferences, score: u8) -> String {
    let text = clauses(product, preferences)
        .into_iter()
        .map(sentence)
        .collect::<Vec<_>>()
        .join(" ");

    if score >= IDEAL_SCORE {
        format!("Ideal match! {}", text).trim_end().to_string()
    } else if score >= STRONG_SCORE {
        format!("Strong option! {}", text).trim_end().to_string()
    } else if text.is_empty() {
        DEFAULT_REASON.to_string()
    } else {
        text
    }
}

/// Criteria the product satisfies, independent of the reason text
pub fn matched_criteria(product: &Product, preferences: &UserPreferences) -> BTreeSet<Criterion> {
    let mut criteria = BTreeSet::new();

    if preferences.price.contains(product.price) {
        criteria.insert(Criterion::Price);
    }
    if preferences.category == Some(product.category) {
        criteria.insert(Criterion::Category);
    }
    if preferences.value_range.contains(product.current_value) {
        criteria.insert(Criterion::Value);
    }
    if preferences.probability_range.contains(product.win_probability) {
        criteria.insert(Criterion::Probability);
    }
    if preferences.desired_frequency.aligns_with(product.frequency) {
        criteria.insert(Criterion::Frequency);
    }

    criteria
}

fn clauses(product: &Product, preferences: &UserPreferences) -> Vec<String> {
    let mut clauses = Vec::new();

    if preferences.price.contains(product.price) {
        clauses.push(format!(
            "The ticket costs {:.0} RUB, within your budget of {:.0}-{:.0} RUB",
            product.price, preferences.price.min, preferences.price.max
        ));
    }

    if preferences.category == Some(product.category) {
        clauses.push(category_clause(product.category).to_string());
    }

    let jackpot_millions = product.current_value / 1_000_000.0;
    if preferences.value_range.contains(product.current_value) {
        clauses.push(format!(
            "The current jackpot of {:.1}M RUB is in the range you are looking for",
            jackpot_millions
        ));
    } else if product.current_value > preferences.value_range.max {
        clauses.push(format!(
            "A huge jackpot of {:.1}M RUB, a chance to win more than you planned!",
            jackpot_millions
        ));
    }

    if preferences.probability_range.contains(product.win_probability) {
        if let Some(clause) = probability_clause(product.win_probability) {
            clauses.push(clause);
        }
    }

    if preferences.desired_frequency.aligns_with(product.frequency) {
        if let Some(clause) = frequency_clause(product.frequency) {
            clauses.push(clause.to_string());
        }
    }

    clauses
}

fn sentence(mut clause: String) -> String {
    if !clause.ends_with('!') {
        clause.push('.');
    }
    clause
}

fn category_clause(category: Category) -> &'static str {
    match category {
        Category::Numbered => "You prefer numbered lotteries where you pick the numbers yourself",
        Category::Instant => "You enjoy fast-paced games with frequent draws",
        Category::DrawBased => "You prefer traditional draw-based lotteries",
        Category::Sport => "You are interested in sports lotteries",
    }
}

/// Only noticeably good odds are worth mentioning
fn probability_clause(probability: f64) -> Option<String> {
    if probability >= HIGH_PROBABILITY {
        Some(format!(
            "High win probability ({:.3}%), excellent odds!",
            probability
        ))
    } else if probability >= GOOD_PROBABILITY {
        Some(format!(
            "Good win probability ({:.3}%) with a solid prize pool",
            probability
        ))
    } else {
        None
    }
}

fn frequency_clause(frequency: Frequency) -> Option<&'static str> {
    match frequency {
        Frequency::Daily => Some("Daily draws, no long wait for the result"),
        Frequency::Weekly => Some("Weekly draws suit how often you like to play"),
        Frequency::SeveralPerWeek | Frequency::Monthly => None,
    }
}
