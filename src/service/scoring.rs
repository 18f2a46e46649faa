//! Marketability scoring engine.
//!
//! Seven independently documented factors, each a value in `[0, 1]` under a fixed
//! weight; the weights sum to 1.0. Scoring is pure: the same profile always yields
//! the same score and the same explanation strings, and a missing input degrades
//! to its documented baseline instead of failing.

use chrono::{Datelike, Utc};

use crate::model::{
    market::HistoryKind,
    profile::AircraftProfile,
    scoring::{HotNotScore, MarketabilityLabel, ScoringFactor},
};

const WEIGHT_MODEL_LIQUIDITY: f64 = 0.20;
const WEIGHT_DAYS_ON_MARKET: f64 = 0.15;
const WEIGHT_AGE_FIT: f64 = 0.15;
const WEIGHT_TRANSACTION_PATTERN: f64 = 0.15;
const WEIGHT_UTILIZATION: f64 = 0.15;
const WEIGHT_OWNERSHIP_SIMPLICITY: f64 = 0.10;
const WEIGHT_DATA_COMPLETENESS: f64 = 0.10;

/// Baseline time-to-sell in days, scaled by the label multiplier.
const BASELINE_DAYS_TO_SELL: f64 = 180.0;

pub fn score(profile: &AircraftProfile) -> HotNotScore {
    score_as_of(profile, Utc::now().year())
}

pub fn score_as_of(profile: &AircraftProfile, as_of_year: i32) -> HotNotScore {
    let factors = vec![
        model_liquidity(profile),
        days_on_market(profile),
        age_fit(profile, as_of_year),
        transaction_pattern(profile),
        utilization(profile),
        ownership_simplicity(profile),
        data_completeness(profile),
    ];

    let weighted_sum: f64 = factors.iter().map(|f| f.value * f.weight).sum();
    let score = (weighted_sum * 100.0).round() as u32;
    let label = MarketabilityLabel::from_score(score);
    let estimated_days_to_sell =
        (BASELINE_DAYS_TO_SELL * label.time_to_sell_multiplier()).round() as u32;

    HotNotScore {
        score,
        label,
        estimated_days_to_sell,
        factors,
    }
}

fn factor(name: &str, weight: f64, value: f64, explanation: String) -> ScoringFactor {
    ScoringFactor {
        name: name.to_string(),
        weight,
        value,
        explanation,
    }
}

/// How quickly this model turns over, from months of supply with a fallback on
/// the model's average days on market.
fn model_liquidity(profile: &AircraftProfile) -> ScoringFactor {
    let name = "Model liquidity";
    let weight = WEIGHT_MODEL_LIQUIDITY;

    let Some(trends) = &profile.model_trends else {
        return factor(
            name,
            weight,
            0.5,
            "Model trend data was not available; baseline assumed.".to_string(),
        );
    };

    if let Some(months_of_supply) = trends.months_of_supply() {
        let (value, verdict) = if months_of_supply < 6.0 {
            (1.0, "a fast-turning market")
        } else if months_of_supply <= 12.0 {
            (0.7, "a balanced market")
        } else if months_of_supply <= 24.0 {
            (0.45, "a slow market")
        } else {
            (0.2, "a saturated market")
        };
        return factor(
            name,
            weight,
            value,
            format!("{months_of_supply:.1} months of supply indicates {verdict}."),
        );
    }

    if let Some(avg_dom) = trends.avg_days_on_market {
        let value = if avg_dom <= 90 {
            0.8
        } else if avg_dom <= 180 {
            0.55
        } else {
            0.3
        };
        return factor(
            name,
            weight,
            value,
            format!("Model average of {avg_dom} days on market used as liquidity proxy."),
        );
    }

    factor(
        name,
        weight,
        0.5,
        "Model trend data carried no liquidity fields; baseline assumed.".to_string(),
    )
}

fn days_on_market(profile: &AircraftProfile) -> ScoringFactor {
    let name = "Days on market";
    let weight = WEIGHT_DAYS_ON_MARKET;

    if !profile.market.for_sale {
        return factor(
            name,
            weight,
            0.5,
            "Aircraft is not actively listed; baseline assumed.".to_string(),
        );
    }

    let Some(dom) = profile.market.days_on_market else {
        return factor(
            name,
            weight,
            0.5,
            "Days-on-market data was not available; baseline assumed.".to_string(),
        );
    };

    let (value, verdict) = if dom < 30 {
        (1.0, "a fresh listing")
    } else if dom < 90 {
        (0.8, "a recent listing")
    } else if dom < 180 {
        (0.6, "a maturing listing")
    } else if dom < 365 {
        (0.35, "a stale listing")
    } else {
        (0.15, "a listing over a year old")
    };

    factor(
        name,
        weight,
        value,
        format!("{dom} days on market indicates {verdict}."),
    )
}

/// Buyer demand peaks for airframes between 3 and 12 years old.
fn age_fit(profile: &AircraftProfile, as_of_year: i32) -> ScoringFactor {
    let name = "Age fit";
    let weight = WEIGHT_AGE_FIT;

    let Some(year) = profile.year_manufactured else {
        return factor(
            name,
            weight,
            0.5,
            "Manufacture year was not available; baseline assumed.".to_string(),
        );
    };

    let age = (as_of_year - year).max(0);
    let (value, verdict) = if age <= 2 {
        (0.7, "nearly new, competing with factory delivery slots")
    } else if age <= 12 {
        (1.0, "inside the prime resale window")
    } else if age <= 20 {
        (0.7, "mid-life")
    } else if age <= 30 {
        (0.45, "aging")
    } else {
        (0.25, "past typical retail demand")
    };

    factor(
        name,
        weight,
        value,
        format!("Airframe age of {age} years is {verdict}."),
    )
}

fn transaction_pattern(profile: &AircraftProfile) -> ScoringFactor {
    let name = "Transaction pattern";
    let weight = WEIGHT_TRANSACTION_PATTERN;

    if profile.history.is_empty() {
        return factor(
            name,
            weight,
            0.5,
            "Transaction history was not available; baseline assumed.".to_string(),
        );
    }

    let mut sale_dates: Vec<_> = profile
        .history
        .iter()
        .filter(|e| e.kind == HistoryKind::Sale)
        .filter_map(|e| e.date)
        .collect();
    sale_dates.sort();

    let sales = profile
        .history
        .iter()
        .filter(|e| e.kind == HistoryKind::Sale)
        .count();

    if sales >= 2 {
        let avg_hold_years = average_gap_years(&sale_dates);
        if avg_hold_years.is_some_and(|y| y < 4.0) {
            return factor(
                name,
                weight,
                0.85,
                format!("{sales} sales with short average holds; the model trades actively."),
            );
        }
        return factor(
            name,
            weight,
            0.7,
            format!("{sales} recorded sales show an established resale market."),
        );
    }

    if sales == 1 {
        return factor(
            name,
            weight,
            0.55,
            "One recorded sale in the history window.".to_string(),
        );
    }

    factor(
        name,
        weight,
        0.4,
        "History exists but records no completed sales.".to_string(),
    )
}

fn utilization(profile: &AircraftProfile) -> ScoringFactor {
    let name = "Utilization";
    let weight = WEIGHT_UTILIZATION;

    let Some(utilization) = &profile.utilization else {
        return factor(
            name,
            weight,
            0.5,
            "Utilization data was not available; baseline assumed.".to_string(),
        );
    };

    let avg = utilization.avg_monthly_flights;
    let (value, verdict) = if (4.0..=25.0).contains(&avg) {
        (1.0, "healthy, demonstrable usage")
    } else if avg > 25.0 {
        (0.55, "heavy usage that may concern buyers")
    } else if avg > 0.0 {
        (0.6, "light usage")
    } else {
        (0.3, "no recorded flying")
    };

    factor(
        name,
        weight,
        value,
        format!("{avg:.1} flights per month indicates {verdict}."),
    )
}

fn ownership_simplicity(profile: &AircraftProfile) -> ScoringFactor {
    let name = "Ownership simplicity";
    let weight = WEIGHT_OWNERSHIP_SIMPLICITY;

    let current: Vec<_> = profile
        .relationships
        .iter()
        .filter(|e| e.is_current())
        .collect();

    let fractional = current.iter().any(|e| {
        let kind = e.relationship_type.to_lowercase();
        let company = e.company.name.as_deref().unwrap_or_default().to_lowercase();
        kind.contains("fractional")
            || kind.contains("share")
            || company.contains("fractional")
            || company.contains("share")
    });

    let owner_companies = distinct_companies(&current, "owner");
    let operator_companies = distinct_companies(&current, "operator");

    if owner_companies.is_empty() {
        return factor(
            name,
            weight,
            0.5,
            "Ownership data was not available; baseline assumed.".to_string(),
        );
    }

    if fractional || owner_companies.len() >= 3 {
        return factor(
            name,
            weight,
            0.3,
            "Fractional or multi-party ownership complicates a transaction.".to_string(),
        );
    }

    if owner_companies.len() == 2 {
        return factor(
            name,
            weight,
            0.55,
            "Two owner entities add coordination overhead.".to_string(),
        );
    }

    let distinct_operator = operator_companies
        .iter()
        .any(|c| !owner_companies.contains(c));
    if distinct_operator {
        return factor(
            name,
            weight,
            0.8,
            "Single owner with a separate operator.".to_string(),
        );
    }

    factor(
        name,
        weight,
        1.0,
        "Single owner operating its own aircraft.".to_string(),
    )
}

/// Share of the five enrichment sources that produced data. This is where a
/// partially-degraded profile pays its penalty.
fn data_completeness(profile: &AircraftProfile) -> ScoringFactor {
    let present = [
        !profile.pictures.is_empty(),
        !profile.relationships.is_empty(),
        profile.utilization.is_some(),
        !profile.history.is_empty(),
        profile.model_trends.is_some(),
    ]
    .into_iter()
    .filter(|p| *p)
    .count();

    factor(
        "Data completeness",
        WEIGHT_DATA_COMPLETENESS,
        present as f64 / 5.0,
        format!("{present} of 5 enrichment sources returned data."),
    )
}

/// Distinct company keys among current edges whose type mentions `kind`.
fn distinct_companies(
    edges: &[&crate::model::relationship::RelationshipEdge],
    kind: &str,
) -> Vec<String> {
    let mut companies: Vec<String> = edges
        .iter()
        .filter(|e| e.relationship_type.to_lowercase().contains(kind))
        .map(|e| {
            e.company
                .company_id
                .map(|id| id.to_string())
                .or_else(|| e.company.name.clone())
                .unwrap_or_default()
        })
        .filter(|key| !key.is_empty())
        .collect();
    companies.sort();
    companies.dedup();
    companies
}

fn average_gap_years(sorted_dates: &[chrono::NaiveDate]) -> Option<f64> {
    if sorted_dates.len() < 2 {
        return None;
    }
    let total_days: i64 = sorted_dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .sum();
    Some(total_days as f64 / (sorted_dates.len() - 1) as f64 / 365.25)
}
