//! Owner disposition engine.
//!
//! Estimates how likely the current owner is to sell, from ownership age measured
//! against the expected hold period for the aircraft's class, plus behavioral
//! signals derived from the relationship graph and transaction history. Missing
//! inputs degrade to the documented "unknown" rows; the engine only abstains
//! entirely (returns `None`) when ownership age cannot be established at all.

use chrono::{Datelike, NaiveDate, Utc};

use crate::model::{
    disposition::{
        DispositionFactor, FleetTrend, OwnerArchetype, OwnerIntelligence, OwnershipPhase,
    },
    flight::TrendDirection,
    profile::AircraftProfile,
};

/// Expected hold period in years by first substring match against the combined
/// weight class and category, lowercased. Default 7 years.
const EXPECTED_HOLD_YEARS: &[(&str, f64)] = &[
    ("piston", 10.0),
    ("turboprop", 8.0),
    ("light", 6.0),
    ("mid", 7.0),
    ("heavy", 9.0),
    ("large", 9.0),
    ("long range", 9.0),
    ("helicopter", 8.0),
    ("rotor", 8.0),
];
const DEFAULT_HOLD_YEARS: f64 = 7.0;

/// Recent-transaction window feeding the fleet-trend signal.
const FLEET_TREND_WINDOW_YEARS: i64 = 3;

/// Behavioral inputs describing the current owner, derived from the profile.
#[derive(Clone, Debug, Default)]
pub struct OwnerSnapshot {
    pub owner_company: Option<String>,
    pub fleet_size: u32,
    pub prior_aircraft: u32,
    pub fleet_trend: FleetTrend,
    pub avg_ownership_years: Option<f64>,
    pub same_make_share: Option<f64>,
    pub utilization_trend: Option<TrendDirection>,
}

impl Default for FleetTrend {
    fn default() -> Self {
        Self::Unknown
    }
}

pub fn assess(profile: &AircraftProfile) -> Option<OwnerIntelligence> {
    assess_as_of(profile, Utc::now().date_naive())
}

pub fn assess_as_of(profile: &AircraftProfile, as_of: NaiveDate) -> Option<OwnerIntelligence> {
    let ownership_age = ownership_age_years(profile, as_of)?;
    let snapshot = derive_snapshot(profile, as_of, ownership_age);
    Some(evaluate(profile, ownership_age, &snapshot))
}

/// Assess with a caller-supplied [`OwnerSnapshot`], for callers holding owner
/// data beyond this one profile. Same-make share in particular needs at least
/// two known-make aircraft and so cannot come out of a single aircraft's
/// records; the brand-loyalty rows above the unknown baseline are only
/// reachable through this entry.
pub fn assess_with_snapshot(
    profile: &AircraftProfile,
    as_of: NaiveDate,
    snapshot: &OwnerSnapshot,
) -> Option<OwnerIntelligence> {
    let ownership_age = ownership_age_years(profile, as_of)?;
    Some(evaluate(profile, ownership_age, snapshot))
}

fn evaluate(
    profile: &AircraftProfile,
    ownership_age: f64,
    snapshot: &OwnerSnapshot,
) -> OwnerIntelligence {
    let expected_hold = expected_hold_years(profile);
    let cycle_ratio = ownership_age / expected_hold;
    let ownership_phase = OwnershipPhase::from_cycle_ratio(cycle_ratio);

    let factors = vec![
        age_vs_cycle_factor(cycle_ratio, ownership_age, expected_hold),
        upgrade_behavior_factor(snapshot),
        fleet_trend_factor(snapshot),
        brand_loyalty_factor(snapshot),
        utilization_trend_factor(snapshot),
        market_timing_factor(profile),
    ];

    let sell_probability: u32 = factors.iter().map(|f| f.points).sum();
    let archetype = classify_archetype(snapshot);
    let predicted_sell_window = sell_window(sell_probability).to_string();

    OwnerIntelligence {
        sell_probability,
        ownership_phase,
        cycle_ratio,
        archetype,
        predicted_sell_window,
        factors,
    }
}

/// Years since the most recent sale, transfer, or delivery; falls back to the
/// airframe's age when the history carries no dated ownership change.
fn ownership_age_years(profile: &AircraftProfile, as_of: NaiveDate) -> Option<f64> {
    let last_change = profile
        .history
        .iter()
        .filter(|e| e.kind.is_ownership_change())
        .filter_map(|e| e.date)
        .max();

    if let Some(date) = last_change {
        let years = (as_of - date).num_days() as f64 / 365.25;
        return Some(years.max(0.0));
    }

    profile
        .year_manufactured
        .map(|year| (as_of.year() - year).max(0) as f64)
}

fn expected_hold_years(profile: &AircraftProfile) -> f64 {
    let class = format!(
        "{} {}",
        profile.weight_class.as_deref().unwrap_or_default(),
        profile.category.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    EXPECTED_HOLD_YEARS
        .iter()
        .find(|(needle, _)| class.contains(needle))
        .map(|(_, years)| *years)
        .unwrap_or(DEFAULT_HOLD_YEARS)
}

fn derive_snapshot(profile: &AircraftProfile, as_of: NaiveDate, ownership_age: f64) -> OwnerSnapshot {
    let owner_edge = profile
        .relationships
        .iter()
        .find(|e| e.is_current() && e.relationship_type.to_lowercase().contains("owner"));
    let owner_company = owner_edge.and_then(|e| e.company.name.clone());
    let owner_company_id = owner_edge.and_then(|e| e.company.company_id);

    let same_company = |edge: &&crate::model::relationship::RelationshipEdge| {
        match (owner_company_id, edge.company.company_id) {
            (Some(a), Some(b)) => a == b,
            _ => {
                owner_company.is_some()
                    && edge.company.name.as_deref() == owner_company.as_deref()
            }
        }
    };

    let fleet_size = if owner_edge.is_some() {
        let mut aircraft: Vec<i64> = profile
            .relationships
            .iter()
            .filter(|e| e.is_current())
            .filter(|e| {
                let kind = e.relationship_type.to_lowercase();
                kind.contains("owner") || kind.contains("operator")
            })
            .filter(same_company)
            .map(|e| e.aircraft_id)
            .collect();
        aircraft.sort_unstable();
        aircraft.dedup();
        aircraft.len() as u32
    } else {
        0
    };

    let prior_aircraft = {
        let mut aircraft: Vec<i64> = profile
            .relationships
            .iter()
            .filter(|e| !e.is_current())
            .filter(same_company)
            .map(|e| e.aircraft_id)
            .collect();
        aircraft.sort_unstable();
        aircraft.dedup();
        aircraft.len() as u32
    };

    let fleet_trend = fleet_trend(profile, owner_company.as_deref(), as_of);

    let avg_ownership_years =
        average_hold_years(profile).or(Some(ownership_age)).filter(|y| *y > 0.0);

    OwnerSnapshot {
        owner_company,
        fleet_size,
        prior_aircraft,
        fleet_trend,
        avg_ownership_years,
        // A single profile never carries enough of the owner's other airframes
        // to establish make loyalty; callers with fleet data supply it through
        // [`assess_with_snapshot`].
        same_make_share: None,
        utilization_trend: profile.utilization.as_ref().map(|u| u.trend),
    }
}

/// Net buy/sell activity by the owner within the trailing window.
fn fleet_trend(profile: &AircraftProfile, owner: Option<&str>, as_of: NaiveDate) -> FleetTrend {
    let Some(owner) = owner else {
        return FleetTrend::Unknown;
    };
    let owner = owner.to_lowercase();
    let window_start = as_of - chrono::Duration::days(FLEET_TREND_WINDOW_YEARS * 365);

    let mut net: i32 = 0;
    let mut matched = 0u32;
    for entry in &profile.history {
        let Some(date) = entry.date else { continue };
        if date < window_start || date > as_of {
            continue;
        }
        let buyer = entry.buyer.as_deref().unwrap_or_default().to_lowercase();
        let seller = entry.seller.as_deref().unwrap_or_default().to_lowercase();
        if !owner.is_empty() && buyer.contains(&owner) {
            net += 1;
            matched += 1;
        }
        if !owner.is_empty() && seller.contains(&owner) {
            net -= 1;
            matched += 1;
        }
    }

    match (matched, net) {
        (0, _) => FleetTrend::Unknown,
        (_, n) if n > 0 => FleetTrend::Growing,
        (_, n) if n < 0 => FleetTrend::Shrinking,
        _ => FleetTrend::Stable,
    }
}

/// Mean gap between consecutive ownership changes.
fn average_hold_years(profile: &AircraftProfile) -> Option<f64> {
    let mut dates: Vec<NaiveDate> = profile
        .history
        .iter()
        .filter(|e| e.kind.is_ownership_change())
        .filter_map(|e| e.date)
        .collect();
    dates.sort();

    if dates.len() < 2 {
        return None;
    }

    let total_days: i64 = dates.windows(2).map(|p| (p[1] - p[0]).num_days()).sum();
    Some(total_days as f64 / (dates.len() - 1) as f64 / 365.25)
}

fn factor(name: &str, points: u32, max_points: u32, explanation: String) -> DispositionFactor {
    DispositionFactor {
        name: name.to_string(),
        points,
        max_points,
        explanation,
    }
}

fn age_vs_cycle_factor(ratio: f64, age: f64, expected: f64) -> DispositionFactor {
    let points = if ratio >= 1.5 {
        30
    } else if ratio >= 1.2 {
        27
    } else if ratio > 1.0 {
        24
    } else if ratio >= 0.8 {
        18
    } else if ratio >= 0.6 {
        13
    } else if ratio >= 0.3 {
        7
    } else {
        3
    };

    factor(
        "Ownership age vs cycle",
        points,
        30,
        format!(
            "{age:.1} years owned against an expected {expected:.0}-year hold (cycle ratio {ratio:.2})."
        ),
    )
}

fn upgrade_behavior_factor(snapshot: &OwnerSnapshot) -> DispositionFactor {
    let prior = snapshot.prior_aircraft;
    let points = match prior {
        3.. => 20,
        2 => 15,
        1 => 10,
        0 => 5,
    };

    factor(
        "Upgrade behavior",
        points,
        20,
        format!("{prior} prior aircraft on record for this owner."),
    )
}

fn fleet_trend_factor(snapshot: &OwnerSnapshot) -> DispositionFactor {
    let (points, verdict) = match snapshot.fleet_trend {
        FleetTrend::Shrinking => (15, "shrinking"),
        FleetTrend::Stable => (8, "stable"),
        FleetTrend::Unknown => (6, "unknown"),
        FleetTrend::Growing => (3, "growing"),
    };

    factor(
        "Fleet trend",
        points,
        15,
        format!("Owner fleet trend is {verdict}."),
    )
}

fn brand_loyalty_factor(snapshot: &OwnerSnapshot) -> DispositionFactor {
    let (points, explanation) = match snapshot.same_make_share {
        Some(share) if share >= 0.75 => (
            13,
            format!("{:.0}% of the fleet shares this make; a same-make upgrade is likely.", share * 100.0),
        ),
        Some(share) if share >= 0.5 => (
            9,
            format!("{:.0}% of the fleet shares this make.", share * 100.0),
        ),
        Some(share) => (
            6,
            format!("Only {:.0}% of the fleet shares this make.", share * 100.0),
        ),
        None => (5, "Make loyalty could not be established.".to_string()),
    };

    factor("Brand loyalty", points, 15, explanation)
}

fn utilization_trend_factor(snapshot: &OwnerSnapshot) -> DispositionFactor {
    let (points, verdict) = match snapshot.utilization_trend {
        Some(TrendDirection::Declining) => (10, "declining"),
        Some(TrendDirection::Stable) => (5, "stable"),
        None => (4, "unknown"),
        Some(TrendDirection::Increasing) => (2, "increasing"),
    };

    factor(
        "Utilization trend",
        points,
        10,
        format!("Recent utilization trend is {verdict}."),
    )
}

fn market_timing_factor(profile: &AircraftProfile) -> DispositionFactor {
    let name = "Market timing";
    let max = 10;

    let Some(trends) = &profile.model_trends else {
        return factor(name, 4, max, "Model market conditions are unknown.".to_string());
    };

    let months_of_supply = trends.months_of_supply();
    let price_trend = trends.asking_price_trend_pct;

    if months_of_supply.is_some_and(|m| m < 6.0) || price_trend.is_some_and(|p| p > 3.0) {
        return factor(
            name,
            10,
            max,
            "A seller's market: tight supply or rising prices.".to_string(),
        );
    }
    if months_of_supply.is_some_and(|m| m > 12.0) || price_trend.is_some_and(|p| p < -3.0) {
        return factor(
            name,
            3,
            max,
            "A buyer's market: excess supply or falling prices.".to_string(),
        );
    }
    if months_of_supply.is_some() {
        return factor(name, 6, max, "A balanced model market.".to_string());
    }

    factor(name, 4, max, "Model market conditions are unknown.".to_string())
}

/// First match wins, in fixed precedence order.
fn classify_archetype(snapshot: &OwnerSnapshot) -> OwnerArchetype {
    if snapshot.fleet_size >= 4 {
        return OwnerArchetype::FleetOperator;
    }
    if snapshot.prior_aircraft >= 2
        && snapshot.avg_ownership_years.is_some_and(|y| y < 5.0)
    {
        return OwnerArchetype::SerialUpgrader;
    }
    if snapshot.avg_ownership_years.is_some_and(|y| y >= 8.0) {
        return OwnerArchetype::LongTermHolder;
    }
    if snapshot.fleet_trend == FleetTrend::Shrinking && snapshot.fleet_size >= 2 {
        return OwnerArchetype::Consolidator;
    }
    if snapshot.fleet_size == 1 && snapshot.prior_aircraft <= 1 {
        return OwnerArchetype::LifestyleOwner;
    }
    OwnerArchetype::OpportunisticSeller
}

fn sell_window(probability: u32) -> &'static str {
    match probability {
        75.. => "3-9 months",
        55..=74 => "9-18 months",
        35..=54 => "18-36 months",
        _ => "36-60 months",
    }
}
