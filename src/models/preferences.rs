use crate::constants::{
    BUDGET_CEILING_HIGH, BUDGET_CEILING_LOW, BUDGET_CEILING_LUXURY, BUDGET_CEILING_MEDIUM,
    WEIGHT_COST, WEIGHT_CULTURAL, WEIGHT_DURATION, WEIGHT_QUIET, WEIGHT_SCENIC, WEIGHT_SPEED,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A scoring criterion in the unified weighting table.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Speed,
    Duration,
    Cost,
    Cultural,
    Scenic,
    Quiet,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Speed,
        Criterion::Duration,
        Criterion::Cost,
        Criterion::Cultural,
        Criterion::Scenic,
        Criterion::Quiet,
    ];

    /// Fixed relative weight used when the caller supplies none.
    pub fn default_weight(&self) -> f64 {
        match self {
            Criterion::Speed => WEIGHT_SPEED,
            Criterion::Duration => WEIGHT_DURATION,
            Criterion::Cost => WEIGHT_COST,
            Criterion::Cultural => WEIGHT_CULTURAL,
            Criterion::Scenic => WEIGHT_SCENIC,
            Criterion::Quiet => WEIGHT_QUIET,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Speed => write!(f, "speed"),
            Criterion::Duration => write!(f, "duration"),
            Criterion::Cost => write!(f, "cost"),
            Criterion::Cultural => write!(f, "cultural"),
            Criterion::Scenic => write!(f, "scenic"),
            Criterion::Quiet => write!(f, "quiet"),
        }
    }
}

impl FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "speed" | "fastest" | "fast" => Ok(Criterion::Speed),
            "duration" | "shortest" => Ok(Criterion::Duration),
            "cost" | "cheapest" | "cheap" => Ok(Criterion::Cost),
            "cultural" | "culture" => Ok(Criterion::Cultural),
            "scenic" | "beautiful" => Ok(Criterion::Scenic),
            "quiet" | "calm" => Ok(Criterion::Quiet),
            _ => Err(format!("Invalid criterion: '{}'", s)),
        }
    }
}

/// Caller-supplied weights over criteria. Any positive total is accepted;
/// the scorer normalizes the merged table internally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct WeightVector(BTreeMap<Criterion, f64>);

impl WeightVector {
    pub fn new() -> Self {
        WeightVector(BTreeMap::new())
    }

    /// Balanced default profile for callers without stated preferences.
    pub fn balanced() -> Self {
        let mut weights = WeightVector::new();
        weights.set(Criterion::Speed, 0.3);
        weights.set(Criterion::Cost, 0.3);
        weights.set(Criterion::Scenic, 0.2);
        weights.set(Criterion::Quiet, 0.2);
        weights
    }

    pub fn set(&mut self, criterion: Criterion, weight: f64) -> &mut Self {
        self.0.insert(criterion, weight.max(0.0));
        self
    }

    pub fn with(mut self, criterion: Criterion, weight: f64) -> Self {
        self.set(criterion, weight);
        self
    }

    pub fn get(&self, criterion: Criterion) -> Option<f64> {
        self.0.get(&criterion).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        self.0.iter().map(|(c, w)| (*c, *w))
    }

    /// Merge these weights over the fixed defaults and normalize the result
    /// to sum 1. Criteria the caller named replace the corresponding default
    /// entry; the rest keep their fixed relative weight.
    pub fn merged_normalized(&self) -> BTreeMap<Criterion, f64> {
        let mut table: BTreeMap<Criterion, f64> = Criterion::ALL
            .iter()
            .map(|c| (*c, c.default_weight()))
            .collect();

        for (criterion, weight) in self.iter() {
            table.insert(criterion, weight);
        }

        let total: f64 = table.values().sum();
        if total <= 0.0 {
            // Degenerate all-zero vector: fall back to the fixed table
            return Criterion::ALL
                .iter()
                .map(|c| (*c, c.default_weight()))
                .collect();
        }

        for weight in table.values_mut() {
            *weight /= total;
        }
        table
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Budget,
    #[default]
    Standard,
    Luxury,
}

impl FromStr for TravelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" | "economy" => Ok(TravelStyle::Budget),
            "standard" => Ok(TravelStyle::Standard),
            "luxury" => Ok(TravelStyle::Luxury),
            _ => Err(format!("Invalid travel style: '{}'", s)),
        }
    }
}

/// Budget tier the cost sub-score is bucketed against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
    Luxury,
}

impl BudgetTier {
    /// Cost ceiling for this tier in route currency units.
    pub fn ceiling(&self) -> f64 {
        match self {
            BudgetTier::Low => BUDGET_CEILING_LOW,
            BudgetTier::Medium => BUDGET_CEILING_MEDIUM,
            BudgetTier::High => BUDGET_CEILING_HIGH,
            BudgetTier::Luxury => BUDGET_CEILING_LUXURY,
        }
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(BudgetTier::Low),
            "medium" => Ok(BudgetTier::Medium),
            "high" => Ok(BudgetTier::High),
            "luxury" => Ok(BudgetTier::Luxury),
            _ => Err(format!("Invalid budget tier: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    #[serde(default)]
    pub weights: WeightVector,
    #[serde(default)]
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub budget_tier: BudgetTier,
    #[serde(default = "default_group_size")]
    pub group_size: u32,
    #[serde(default)]
    pub cultural_interests: Vec<String>,
}

fn default_group_size() -> u32 {
    1
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            weights: WeightVector::new(),
            travel_style: TravelStyle::default(),
            budget_tier: BudgetTier::default(),
            group_size: default_group_size(),
            cultural_interests: Vec::new(),
        }
    }
}

impl UserPreferences {
    /// Apply a partial update, leaving unset fields untouched.
    pub fn apply(&mut self, patch: PreferencePatch) {
        if let Some(weights) = patch.weights {
            self.weights = weights;
        }
        if let Some(style) = patch.travel_style {
            self.travel_style = style;
        }
        if let Some(tier) = patch.budget_tier {
            self.budget_tier = tier;
        }
        if let Some(size) = patch.group_size {
            self.group_size = size.max(1);
        }
        if let Some(interests) = patch.cultural_interests {
            self.cultural_interests = interests;
        }
    }
}

/// Partial update for a stored preference profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_style: Option<TravelStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_tier: Option<BudgetTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_interests: Option<Vec<String>>,
}
