use serde::{Deserialize, Serialize};

/// One point-scored input to the sell-probability model. Unlike marketability
/// factors, disposition weights are expressed as point maxima on a 0–100 scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispositionFactor {
    pub name: String,
    pub points: u32,
    pub max_points: u32,
    pub explanation: String,
}

/// Where the current owner sits in the expected ownership cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnershipPhase {
    EarlyOwnership,
    WatchZone,
    ReplacementWindow,
}

impl OwnershipPhase {
    pub fn from_cycle_ratio(ratio: f64) -> Self {
        if ratio < 0.6 {
            Self::EarlyOwnership
        } else if ratio <= 1.0 {
            Self::WatchZone
        } else {
            Self::ReplacementWindow
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetTrend {
    Growing,
    Stable,
    Shrinking,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerArchetype {
    FleetOperator,
    SerialUpgrader,
    LongTermHolder,
    Consolidator,
    LifestyleOwner,
    OpportunisticSeller,
}

/// The owner-disposition verdict: a 0–100 sell probability, the ownership-cycle
/// classification that drove it, an archetype, and a predicted sell window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnerIntelligence {
    pub sell_probability: u32,
    pub ownership_phase: OwnershipPhase,
    pub cycle_ratio: f64,
    pub archetype: OwnerArchetype,
    pub predicted_sell_window: String,
    pub factors: Vec<DispositionFactor>,
}
