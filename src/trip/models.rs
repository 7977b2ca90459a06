use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::{Cop, Distance, Duration};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[default]
    #[serde(rename = "GASOLINA")]
    Gasolina,
    /// Diesel.
    #[serde(rename = "ACPM")]
    Acpm,
}

impl FuelType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasolina => "GASOLINA",
            FuelType::Acpm => "ACPM",
        }
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GASOLINA" => Ok(FuelType::Gasolina),
            "ACPM" => Ok(FuelType::Acpm),
            other => Err(format!("unknown fuel type: {other}")),
        }
    }
}

impl Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user typed for one trip, already parsed. The calculator trusts
/// that every number here is positive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripInput {
    pub contractor_id: String,
    pub base_id: String,
    pub origin_city: String,
    pub destination: String,
    pub fuel_type: FuelType,
    pub fuel_price_per_gallon: f64,
    pub km_per_gallon: f64,
    pub one_way_distance: Distance,
    /// Normal-traffic time for the outbound leg.
    pub one_way_eta: Duration,
    pub selected_toll_ids: Vec<String>,
}

/// Identity of a record: a unique id and the moment it was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl Stamp {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
        }
    }

    /// A random v4 UUID and the current time.
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string(), Utc::now())
    }
}

/// The stored result of one calculation. Never edited after creation.
///
/// Field names on the wire follow the JSON written by earlier versions of
/// the app, so old saved state keeps loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: String,
    #[serde(rename = "createdAtISO")]
    pub created_at: DateTime<Utc>,

    pub contractor_name: String,
    pub base_label: String,

    pub origin_city: String,
    #[serde(rename = "destinationText")]
    pub destination: String,

    pub fuel_type: FuelType,
    #[serde(rename = "fuelPricePerGallonCOP")]
    pub fuel_price_per_gallon: f64,
    pub km_per_gallon: f64,

    #[serde(rename = "oneWayDistanceKm")]
    pub one_way_distance: Distance,
    #[serde(rename = "roundTripDistanceKm")]
    pub round_trip_distance: Distance,

    #[serde(rename = "oneWayEtaMinutes")]
    pub one_way_eta: Duration,
    #[serde(rename = "peakEtaMinutes")]
    pub peak_eta: Duration,

    pub toll_count_one_way: u32,
    #[serde(rename = "tollCostOneWayCOP")]
    pub toll_cost_one_way: Cop,
    pub toll_count_round_trip: u32,
    #[serde(rename = "tollCostRoundTripCOP")]
    pub toll_cost_round_trip: Cop,

    pub fuel_gallons_one_way: f64,
    pub fuel_gallons_round_trip: f64,
    #[serde(rename = "fuelCostRoundTripCOP")]
    pub fuel_cost_round_trip: Cop,

    #[serde(rename = "totalRoundTripCOP")]
    pub total_round_trip: Cop,
}
