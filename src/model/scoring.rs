use serde::{Deserialize, Serialize};

/// One weighted input to the marketability score.
///
/// Weights across the factor set sum to 1.0 and each value lies in `[0, 1]`. The
/// explanation string names the specific branch taken and is part of the scoring
/// contract: downstream consumers surface it verbatim for auditability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringFactor {
    pub name: String,
    pub weight: f64,
    pub value: f64,
    pub explanation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketabilityLabel {
    Hot,
    Warm,
    Neutral,
    Cold,
}

impl MarketabilityLabel {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Hot,
            60..=79 => Self::Warm,
            40..=59 => Self::Neutral,
            _ => Self::Cold,
        }
    }

    /// Multiplier applied to the 180-day baseline time-to-sell estimate.
    pub fn time_to_sell_multiplier(&self) -> f64 {
        match self {
            Self::Hot => 0.8,
            Self::Warm => 1.0,
            Self::Neutral => 1.25,
            Self::Cold => 1.7,
        }
    }
}

/// The marketability verdict: `round(100 × Σ value·weight)` over the factor set,
/// a label bucket, and a time-to-sell estimate in days.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HotNotScore {
    pub score: u32,
    pub label: MarketabilityLabel,
    pub estimated_days_to_sell: u32,
    pub factors: Vec<ScoringFactor>,
}
