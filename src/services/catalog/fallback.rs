use crate::models::{Category, Frequency, PrizeTier, Product};

fn tier(category: &str, prize: &str, probability: &str) -> PrizeTier {
    PrizeTier {
        category: category.to_string(),
        prize: prize.to_string(),
        probability: probability.to_string(),
    }
}

/// Built-in catalog served whenever upstream data is unusable.
///
/// Always non-empty, every product active, IDs stable across calls.
pub fn fallback_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "6x45".to_string(),
            name: "Gosloto 6 of 45".to_string(),
            category: Category::Numbered,
            price: 100.0,
            value_ceiling: 400_000_000.0,
            current_value: 320_000_000.0,
            win_probability: 0.00001,
            frequency: Frequency::Daily,
            description: "The most popular numbered lottery in the country. Guess 6 numbers out of 45 to win the jackpot!".to_string(),
            rules: "Pick 6 numbers from 1 to 45. Draws take place daily at 20:00 MSK. Matching all 6 numbers wins the main prize!".to_string(),
            prize_tiers: vec![
                tier("6 of 6", "Jackpot", "1:8145060"),
                tier("5 of 6", "10000 RUB", "1:34808"),
                tier("4 of 6", "1000 RUB", "1:733"),
                tier("3 of 6", "100 RUB", "1:45"),
            ],
            is_active: true,
        },
        Product {
            id: "5x36".to_string(),
            name: "Gosloto 5 of 36".to_string(),
            category: Category::Numbered,
            price: 50.0,
            value_ceiling: 200_000_000.0,
            current_value: 156_000_000.0,
            win_probability: 0.0001,
            frequency: Frequency::Daily,
            description: "A fast numbered lottery with good odds of winning!".to_string(),
            rules: "Pick 5 numbers from 1 to 36. Draws take place daily at 14:00 MSK.".to_string(),
            prize_tiers: vec![
                tier("5 of 5", "Jackpot", "1:376992"),
                tier("4 of 5", "5000 RUB", "1:2432"),
                tier("3 of 5", "500 RUB", "1:81"),
                tier("2 of 5", "50 RUB", "1:8"),
            ],
            is_active: true,
        },
        Product {
            id: "4x20".to_string(),
            name: "Gosloto 4 of 20".to_string(),
            category: Category::Numbered,
            price: 60.0,
            value_ceiling: 50_000_000.0,
            current_value: 32_000_000.0,
            win_probability: 0.001,
            frequency: Frequency::SeveralPerWeek,
            description: "A lottery with high odds of winning and frequent draws!".to_string(),
            rules: "Pick 4 numbers from 1 to 20. Draws several times a week.".to_string(),
            prize_tiers: vec![
                tier("4 of 4", "Jackpot", "1:4845"),
                tier("3 of 4", "1000 RUB", "1:75"),
                tier("2 of 4", "100 RUB", "1:6"),
            ],
            is_active: true,
        },
        Product {
            id: "7x49".to_string(),
            name: "Gosloto 7 of 49".to_string(),
            category: Category::Numbered,
            price: 150.0,
            value_ceiling: 500_000_000.0,
            current_value: 412_000_000.0,
            win_probability: 0.000007,
            frequency: Frequency::Weekly,
            description: "One of the largest lotteries, with a jackpot above 400 million!".to_string(),
            rules: "Pick 7 numbers from 1 to 49. Draws every Wednesday and Saturday at 21:00 MSK.".to_string(),
            prize_tiers: vec![
                tier("7 of 7", "Jackpot", "1:85900584"),
                tier("6 of 7", "50000 RUB", "1:1235008"),
                tier("5 of 7", "5000 RUB", "1:24129"),
                tier("4 of 7", "500 RUB", "1:710"),
            ],
            is_active: true,
        },
        Product {
            id: "rapido".to_string(),
            name: "Rapido".to_string(),
            category: Category::Instant,
            price: 100.0,
            value_ceiling: 10_000_000.0,
            current_value: 7_500_000.0,
            win_probability: 0.01,
            frequency: Frequency::Daily,
            description: "An instant lottery with quick results! Draws every 15 minutes!".to_string(),
            rules: "Pick your numbers and wait for the result. Draws every 15 minutes from 09:00 to 23:00 MSK.".to_string(),
            prize_tiers: vec![
                tier("Super prize", "7.5M RUB", "1:100000"),
                tier("Main prize", "100000 RUB", "1:10000"),
                tier("Prize 3", "10000 RUB", "1:1000"),
                tier("Prize 4", "1000 RUB", "1:100"),
            ],
            is_active: true,
        },
    ]
}
