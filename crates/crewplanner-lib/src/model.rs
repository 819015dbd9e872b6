//! Planet and starship records consumed by the feasibility engine.
//!
//! Records arrive already resolved from upstream storage. Quantitative
//! starship fields are loosely typed: a JSON number, a numeric string such as
//! `"1,250,000"`, or a sentinel like `"unknown"`. They are kept verbatim as
//! [`NumericField`] and only interpreted by [`crate::numeric`].

use serde::{Deserialize, Serialize};

/// Numeric identifier for a planet.
pub type PlanetId = i64;

/// Numeric identifier for a starship.
pub type StarshipId = i64;

/// A loosely-typed numeric value as delivered by upstream data sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericField {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A mission destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    /// Free-text terrain keywords, e.g. `"grasslands, mountains"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<String>,
    /// Free-text climate keywords, e.g. `"arid"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
}

impl Planet {
    pub fn new(id: PlanetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            terrain: None,
            climate: None,
        }
    }

    pub fn with_terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = Some(terrain.into());
        self
    }

    pub fn with_climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }
}

/// A candidate fleet member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starship {
    pub id: StarshipId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_in_credits: Option<NumericField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passengers: Option<NumericField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_capacity: Option<NumericField>,
    /// Lower is faster; `0` or absent means the ship has no hyperdrive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperdrive_rating: Option<NumericField>,
    /// Sublight speed in megalights per hour.
    #[serde(rename = "MGLT", default, skip_serializing_if = "Option::is_none")]
    pub mglt: Option<NumericField>,
}

impl Starship {
    pub fn new(id: StarshipId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cost_in_credits: None,
            passengers: None,
            cargo_capacity: None,
            hyperdrive_rating: None,
            mglt: None,
        }
    }

    pub fn with_cost(mut self, cost: impl Into<NumericField>) -> Self {
        self.cost_in_credits = Some(cost.into());
        self
    }

    pub fn with_passengers(mut self, passengers: impl Into<NumericField>) -> Self {
        self.passengers = Some(passengers.into());
        self
    }

    pub fn with_cargo(mut self, cargo: impl Into<NumericField>) -> Self {
        self.cargo_capacity = Some(cargo.into());
        self
    }

    pub fn with_hyperdrive(mut self, rating: impl Into<NumericField>) -> Self {
        self.hyperdrive_rating = Some(rating.into());
        self
    }

    pub fn with_mglt(mut self, mglt: impl Into<NumericField>) -> Self {
        self.mglt = Some(mglt.into());
        self
    }
}
