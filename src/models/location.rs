use crate::constants::{
    CULTURAL_WEIGHT_HISTORICAL, CULTURAL_WEIGHT_RELIGIOUS, CULTURAL_WEIGHT_UNESCO, SCORE_MAX,
};
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttractionCategory {
    Museum,
    Palace,
    Mosque,
    Bazaar,
    Garden,
    Monument,
    Natural,
    Archaeological,
}

impl fmt::Display for AttractionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttractionCategory::Museum => "museum",
            AttractionCategory::Palace => "palace",
            AttractionCategory::Mosque => "mosque",
            AttractionCategory::Bazaar => "bazaar",
            AttractionCategory::Garden => "garden",
            AttractionCategory::Monument => "monument",
            AttractionCategory::Natural => "natural",
            AttractionCategory::Archaeological => "archaeological",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AttractionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "museum" => Ok(AttractionCategory::Museum),
            "palace" => Ok(AttractionCategory::Palace),
            "mosque" | "shrine" => Ok(AttractionCategory::Mosque),
            "bazaar" | "market" => Ok(AttractionCategory::Bazaar),
            "garden" | "park" => Ok(AttractionCategory::Garden),
            "monument" => Ok(AttractionCategory::Monument),
            "natural" | "nature" => Ok(AttractionCategory::Natural),
            "archaeological" | "ruins" => Ok(AttractionCategory::Archaeological),
            _ => Err(format!("Invalid attraction category: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub category: AttractionCategory,
    pub coordinates: Coordinates,
    /// Visitor rating from 0-5
    pub rating: f32,
    /// Cultural-significance score from 0-5
    #[serde(default)]
    pub cultural_significance: f32,
    /// Entry fee in route currency units; falls back to the configured
    /// per-attraction fee when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<f64>,
    /// Typical visit duration; falls back to the configured per-attraction
    /// visit time when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_hours: Option<f64>,
}

impl Attraction {
    pub fn new(
        name: String,
        category: AttractionCategory,
        coordinates: Coordinates,
        rating: f32,
    ) -> Self {
        Attraction {
            id: Uuid::new_v4(),
            name,
            category,
            coordinates,
            rating: rating.clamp(0.0, SCORE_MAX as f32),
            cultural_significance: 0.0,
            entry_fee: None,
            visit_hours: None,
        }
    }

    pub fn with_cultural_significance(mut self, significance: f32) -> Self {
        self.cultural_significance = significance.clamp(0.0, SCORE_MAX as f32);
        self
    }

    pub fn with_entry_fee(mut self, fee: f64) -> Self {
        self.entry_fee = Some(fee);
        self
    }

    pub fn with_visit_hours(mut self, hours: f64) -> Self {
        self.visit_hours = Some(hours);
        self
    }
}

/// Cultural-attribute flags carried by a location, feeding the
/// cultural-significance derivation for segments that end there.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CulturalAttributes {
    #[serde(default)]
    pub unesco_heritage: bool,
    #[serde(default)]
    pub historical: bool,
    #[serde(default)]
    pub religious: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub cultural: CulturalAttributes,
}

impl Location {
    pub fn new(name: String, coordinates: Coordinates) -> Self {
        Location {
            id: Uuid::new_v4(),
            name,
            coordinates,
            country: None,
            population: None,
            attractions: Vec::new(),
            cultural: CulturalAttributes::default(),
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_attractions(mut self, attractions: Vec<Attraction>) -> Self {
        self.attractions = attractions;
        self
    }

    pub fn with_cultural(mut self, cultural: CulturalAttributes) -> Self {
        self.cultural = cultural;
        self
    }

    /// Cultural-significance rating in [0, 5]: weighted cultural-attribute
    /// flags plus the mean significance of rated attractions, capped.
    pub fn cultural_significance(&self) -> f64 {
        let mut significance = 0.0;

        if self.cultural.unesco_heritage {
            significance += CULTURAL_WEIGHT_UNESCO;
        }
        if self.cultural.historical {
            significance += CULTURAL_WEIGHT_HISTORICAL;
        }
        if self.cultural.religious {
            significance += CULTURAL_WEIGHT_RELIGIOUS;
        }

        if !self.attractions.is_empty() {
            let total: f64 = self
                .attractions
                .iter()
                .map(|a| a.cultural_significance as f64)
                .sum();
            significance += total / self.attractions.len() as f64;
        }

        significance.min(SCORE_MAX)
    }

    /// Mean visitor rating of the location's attractions, if it has any.
    pub fn mean_attraction_rating(&self) -> Option<f64> {
        if self.attractions.is_empty() {
            return None;
        }
        let total: f64 = self.attractions.iter().map(|a| a.rating as f64).sum();
        Some(total / self.attractions.len() as f64)
    }
}
