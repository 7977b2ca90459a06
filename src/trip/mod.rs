//! Trip cost calculation.
//!
//! [`compute`] turns a parsed [`TripInput`] into a [`TripRecord`]. Apart from
//! the id and timestamp in the [`Stamp`] the result depends only on its
//! arguments, and nothing in here can fail: ids that are not in the
//! directory degrade to placeholder labels.

mod models;
pub use models::*;

use tracing::debug;

use crate::{
    reference::Directory,
    shared::{Cop, Distance, Duration},
};

/// Worst-case inflation of a normal-traffic ETA at rush hour.
pub const PEAK_MULTIPLIER: f64 = 3.5;
/// Shown when the contractor id is not in the directory.
pub const CONTRACTOR_PLACEHOLDER: &str = "Contratista";
/// Shown when the base id is not among the contractor's bases.
pub const BASE_PLACEHOLDER: &str = "Base";

/// Toll figures for the outbound leg. The return leg is assumed to cross the
/// same stations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TollSummary {
    pub count_one_way: u32,
    pub cost_one_way: Cop,
}

impl TollSummary {
    pub fn from_selection<S: AsRef<str>>(directory: &Directory, ids: &[S]) -> Self {
        let tolls = directory.selected_tolls(ids);
        let fare_sum: f64 = tolls.iter().map(|toll| toll.fare_cop).sum();
        Self {
            count_one_way: tolls.len() as u32,
            cost_one_way: Cop::round(fare_sum),
        }
    }

    pub fn count_round_trip(&self) -> u32 {
        self.count_one_way * 2
    }

    pub fn cost_round_trip(&self) -> Cop {
        self.cost_one_way * 2
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FuelSummary {
    pub gallons_one_way: f64,
    pub gallons_round_trip: f64,
    pub cost_round_trip: Cop,
}

impl FuelSummary {
    pub fn compute(one_way: Distance, km_per_gallon: f64, price_per_gallon: f64) -> Self {
        let gallons_one_way = one_way / km_per_gallon;
        let gallons_round_trip = gallons_one_way * 2.0;
        Self {
            gallons_one_way,
            gallons_round_trip,
            cost_round_trip: Cop::round(gallons_round_trip * price_per_gallon),
        }
    }
}

pub fn peak_eta(one_way: Duration) -> Duration {
    (one_way * PEAK_MULTIPLIER).rounded()
}

/// Computes a record with a fresh id and the current time.
pub fn compute(input: &TripInput, directory: &Directory) -> TripRecord {
    compute_with_stamp(input, directory, Stamp::generate())
}

pub fn compute_with_stamp(input: &TripInput, directory: &Directory, stamp: Stamp) -> TripRecord {
    let contractor = directory.contractor(&input.contractor_id);
    let base = contractor.and_then(|c| c.base(&input.base_id));

    let tolls = TollSummary::from_selection(directory, &input.selected_toll_ids);
    let fuel = FuelSummary::compute(
        input.one_way_distance,
        input.km_per_gallon,
        input.fuel_price_per_gallon,
    );
    let toll_cost_round_trip = tolls.cost_round_trip();

    debug!(
        "Computed trip {} to '{}': fuel {} + tolls {}",
        stamp.id, input.destination, fuel.cost_round_trip, toll_cost_round_trip
    );

    TripRecord {
        id: stamp.id,
        created_at: stamp.created_at,
        contractor_name: contractor
            .map_or(CONTRACTOR_PLACEHOLDER, |c| c.name.as_ref())
            .to_string(),
        base_label: base
            .map_or(BASE_PLACEHOLDER, |b| b.label.as_ref())
            .to_string(),
        origin_city: input.origin_city.clone(),
        destination: input.destination.clone(),
        fuel_type: input.fuel_type,
        fuel_price_per_gallon: input.fuel_price_per_gallon,
        km_per_gallon: input.km_per_gallon,
        one_way_distance: input.one_way_distance,
        round_trip_distance: input.one_way_distance * 2.0,
        one_way_eta: input.one_way_eta,
        peak_eta: peak_eta(input.one_way_eta),
        toll_count_one_way: tolls.count_one_way,
        toll_cost_one_way: tolls.cost_one_way,
        toll_count_round_trip: tolls.count_round_trip(),
        toll_cost_round_trip,
        fuel_gallons_one_way: fuel.gallons_one_way,
        fuel_gallons_round_trip: fuel.gallons_round_trip,
        fuel_cost_round_trip: fuel.cost_round_trip,
        total_round_trip: fuel.cost_round_trip + toll_cost_round_trip,
    }
}

#[test]
fn peak_eta_example() {
    assert_eq!(peak_eta(Duration::from_minutes(180.0)).as_minutes(), 630.0);
    assert_eq!(peak_eta(Duration::from_minutes(45.0)).as_minutes(), 158.0);
}

#[test]
fn fuel_example() {
    let fuel = FuelSummary::compute(Distance::from_kilometers(245.5), 35.0, 13_000.0);
    assert!((fuel.gallons_one_way - 7.014_285).abs() < 1e-5);
    assert!((fuel.gallons_round_trip - 14.028_571).abs() < 1e-5);
    assert_eq!(fuel.cost_round_trip, Cop::new(182_371));
}
