use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Listing state sourced alongside the identity lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSignals {
    pub for_sale: bool,
    pub asking_price: Option<f64>,
    pub days_on_market: Option<u32>,
    pub listed_date: Option<NaiveDate>,
}

/// Per-model market summary from the model trends endpoint, cached by the
/// market trend cache.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelTrendSignals {
    pub model_id: i64,
    pub fleet_size: Option<u32>,
    pub active_listings: Option<u32>,
    pub sold_last_12_months: Option<u32>,
    pub avg_days_on_market: Option<u32>,
    pub asking_price_trend_pct: Option<f64>,
}

impl ModelTrendSignals {
    /// Months of supply: active listings divided by the monthly sales rate.
    /// `None` when either input is missing or no sales occurred.
    pub fn months_of_supply(&self) -> Option<f64> {
        let active = self.active_listings? as f64;
        let sold = self.sold_last_12_months? as f64;
        if sold <= 0.0 {
            return None;
        }
        Some(active / (sold / 12.0))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryKind {
    Sale,
    Transfer,
    Delivery,
    Listing,
    Other(String),
}

impl HistoryKind {
    /// Map a JETNET `transtype` string by case-insensitive substring.
    pub fn from_transaction_type(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        if lowered.contains("list") {
            Self::Listing
        } else if lowered.contains("sale") || lowered.contains("sold") {
            Self::Sale
        } else if lowered.contains("transfer") {
            Self::Transfer
        } else if lowered.contains("delivery") || lowered.contains("delivered") {
            Self::Delivery
        } else {
            Self::Other(raw.to_string())
        }
    }

    /// Sales, transfers, and deliveries all mark a change of hands for
    /// ownership-age purposes.
    pub fn is_ownership_change(&self) -> bool {
        matches!(self, Self::Sale | Self::Transfer | Self::Delivery)
    }
}

/// One transaction-history row from the trailing ten-year window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: Option<NaiveDate>,
    pub kind: HistoryKind,
    pub buyer: Option<String>,
    pub seller: Option<String>,
    pub price: Option<f64>,
}
