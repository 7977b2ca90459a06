use crate::{
    shared::format::{format_cop, format_number},
    trip::TripRecord,
};

/// The labelled rows of the trip detail view, top to bottom.
pub fn detail_lines(trip: &TripRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Contratista", trip.contractor_name.clone()),
        ("Base / Unidad", trip.base_label.clone()),
        ("Origen (ciudad)", trip.origin_city.clone()),
        ("Destino", trip.destination.clone()),
        ("Combustible", trip.fuel_type.to_string()),
        (
            "Distancia ida",
            format!("{} km", format_number(trip.one_way_distance.as_kilometers(), 2)),
        ),
        (
            "Distancia total",
            format!("{} km", format_number(trip.round_trip_distance.as_kilometers(), 2)),
        ),
        (
            "ETA ida",
            format!("{} min", format_number(trip.one_way_eta.as_minutes(), 1)),
        ),
        (
            "ETA hora pico",
            format!("{} min", format_number(trip.peak_eta.as_minutes(), 0)),
        ),
        ("Precio galón", format_cop(trip.fuel_price_per_gallon)),
        (
            "Rendimiento",
            format!("{} km/gal", format_number(trip.km_per_gallon, 2)),
        ),
        ("Galones ida", format_number(trip.fuel_gallons_one_way, 3)),
        ("Galones totales", format_number(trip.fuel_gallons_round_trip, 3)),
        ("Costo total combustible", format_cop(trip.fuel_cost_round_trip)),
        ("Peajes ida", trip.toll_count_one_way.to_string()),
        ("Costo peajes ida", format_cop(trip.toll_cost_one_way)),
        ("Peajes totales", trip.toll_count_round_trip.to_string()),
        ("Costo peajes totales", format_cop(trip.toll_cost_round_trip)),
        ("Total ida y regreso", format_cop(trip.total_round_trip)),
    ]
}
