use serde::Deserialize;
use std::path::Path;

/// Lookup tables driving catalog normalization.
///
/// `Default` carries the built-in values; a TOML file may override any subset
/// of fields. Entries are matched as lower-case substrings of the upstream
/// game code or frequency string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizationTables {
    pub numbered_codes: Vec<String>,
    pub instant_codes: Vec<String>,
    pub sport_codes: Vec<String>,
    pub daily_synonyms: Vec<String>,
    pub weekly_synonyms: Vec<String>,
    pub several_per_week_synonyms: Vec<String>,
    /// First matching rule wins
    pub win_probabilities: Vec<WinProbabilityRule>,
    pub default_win_probability: f64,
    pub prize_tiers: Vec<PrizeTierRule>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WinProbabilityRule {
    pub codes: Vec<String>,
    pub probability: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PrizeTierRule {
    pub category: String,
    pub prize: PrizeAmount,
    pub odds: String,
}

/// How a prize tier's amount is derived from the current jackpot
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrizeAmount {
    /// Share of the jackpot, rendered in millions
    JackpotMillions { share: f64 },
    /// Share of the jackpot, rendered in whole units
    JackpotShare { share: f64 },
    /// Fixed amount regardless of the jackpot
    Fixed { amount: f64 },
}

fn codes(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for NormalizationTables {
    fn default() -> Self {
        Self {
            numbered_codes: codes(&["6x45", "5x36", "4x20", "7x49"]),
            instant_codes: codes(&["rapido", "12x24"]),
            sport_codes: codes(&["top3"]),
            daily_synonyms: codes(&["daily", "ежедневно"]),
            weekly_synonyms: codes(&["weekly", "еженедельно"]),
            several_per_week_synonyms: codes(&["several", "несколько"]),
            win_probabilities: vec![
                WinProbabilityRule {
                    codes: codes(&["6x45"]),
                    probability: 0.00001,
                },
                WinProbabilityRule {
                    codes: codes(&["5x36"]),
                    probability: 0.0001,
                },
                WinProbabilityRule {
                    codes: codes(&["4x20"]),
                    probability: 0.001,
                },
                WinProbabilityRule {
                    codes: codes(&["rapido", "12x24"]),
                    probability: 0.01,
                },
            ],
            default_win_probability: 0.0001,
            prize_tiers: vec![
                PrizeTierRule {
                    category: "Jackpot".to_string(),
                    prize: PrizeAmount::JackpotMillions { share: 1.0 },
                    odds: "1:1000000".to_string(),
                },
                PrizeTierRule {
                    category: "Tier 2".to_string(),
                    prize: PrizeAmount::JackpotShare { share: 0.1 },
                    odds: "1:100000".to_string(),
                },
                PrizeTierRule {
                    category: "Tier 3".to_string(),
                    prize: PrizeAmount::Fixed { amount: 10_000.0 },
                    odds: "1:10000".to_string(),
                },
                PrizeTierRule {
                    category: "Tier 4".to_string(),
                    prize: PrizeAmount::Fixed { amount: 1_000.0 },
                    odds: "1:1000".to_string(),
                },
            ],
        }
    }
}

impl NormalizationTables {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).map_err(|e| anyhow::anyhow!("Invalid normalization tables: {}", e))
    }

    /// Load tables from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read normalization tables {}: {}", path.display(), e)
        })?;
        Self::from_toml_str(&raw)
    }
}

/// Case-insensitive substring match against any needle
pub(crate) fn contains_any(haystack: &str, needles: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.contains(needle.to_lowercase().as_str()))
}
