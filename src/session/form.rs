use thiserror::Error;

use crate::{
    reference::Directory,
    shared::{Distance, Duration},
    trip::{FuelType, TripInput},
};

/// Every problem found in a form, in the order the fields appear.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", .0.join(" "))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

/// Efficiency prefilled on a new form, typical for a light vehicle.
pub const DEFAULT_KM_PER_GALLON: f64 = 30.0;

/// The trip form as typed: free text everywhere, parsed only on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub contractor_id: String,
    pub base_id: String,
    pub destination: String,
    pub fuel_type: FuelType,
    pub fuel_price_per_gallon: String,
    pub km_per_gallon: String,
    pub one_way_distance_km: String,
    /// Minutes, or `h:mm` as maps services print it.
    pub one_way_eta: String,
    pub selected_toll_ids: Vec<String>,
}

impl TripForm {
    pub fn new() -> Self {
        Default::default()
    }

    /// A fresh form with the directory's first contractor and its first base
    /// already selected, and the default efficiency filled in.
    pub fn for_directory(directory: &Directory) -> Self {
        let mut form = Self {
            km_per_gallon: DEFAULT_KM_PER_GALLON.to_string(),
            ..Self::new()
        };
        if let Some(contractor) = directory.contractors.first() {
            form.select_contractor(&contractor.id, directory);
        }
        form
    }

    /// Picks a contractor and keeps the base consistent with it: a base that
    /// belongs to someone else is replaced by the contractor's first base.
    pub fn select_contractor(&mut self, contractor_id: &str, directory: &Directory) {
        self.contractor_id = contractor_id.to_string();
        let Some(contractor) = directory.contractor(contractor_id) else {
            return;
        };
        if contractor.base(&self.base_id).is_none() {
            self.base_id = contractor
                .first_base()
                .map(|base| base.id.to_string())
                .unwrap_or_default();
        }
    }

    pub fn toggle_toll(&mut self, toll_id: &str) {
        if let Some(pos) = self.selected_toll_ids.iter().position(|id| id == toll_id) {
            self.selected_toll_ids.remove(pos);
        } else {
            self.selected_toll_ids.push(toll_id.to_string());
        }
    }

    /// Clears the per-trip fields after a save. Contractor, base, fuel type
    /// and efficiency stay for the next entry.
    pub fn reset_trip_fields(&mut self) {
        self.destination.clear();
        self.fuel_price_per_gallon.clear();
        self.one_way_distance_km.clear();
        self.one_way_eta.clear();
        self.selected_toll_ids.clear();
    }

    pub fn parse(&self, directory: &Directory) -> Result<TripInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let origin_city = directory.origin_city(&self.contractor_id, &self.base_id);
        let destination = self.destination.trim();
        let fuel_price = positive_number(&self.fuel_price_per_gallon);
        let km_per_gallon = positive_number(&self.km_per_gallon);
        let distance = positive_number(&self.one_way_distance_km);
        let eta = positive_minutes(&self.one_way_eta);

        if self.contractor_id.trim().is_empty() {
            errors.push("Selecciona el contratista.");
        }
        if self.base_id.trim().is_empty() {
            errors.push("Selecciona la base/unidad.");
        }
        if origin_city.is_none() {
            errors.push("El origen no está disponible para la base seleccionada.");
        }
        if destination.is_empty() {
            errors.push("Ingresa el destino.");
        }
        if fuel_price.is_none() {
            errors.push("Precio por galón inválido.");
        }
        if km_per_gallon.is_none() {
            errors.push("Rendimiento km/galón inválido.");
        }
        if distance.is_none() {
            errors.push("Distancia ida inválida. Ingresa el valor desde Google Maps/Waze.");
        }
        if eta.is_none() {
            errors.push("Tiempo ida inválido. Ingresa el valor desde Google Maps/Waze.");
        }

        match (origin_city, fuel_price, km_per_gallon, distance, eta) {
            (Some(origin_city), Some(fuel_price), Some(km_per_gallon), Some(distance), Some(eta))
                if errors.is_empty() =>
            {
                Ok(TripInput {
                    contractor_id: self.contractor_id.clone(),
                    base_id: self.base_id.clone(),
                    origin_city: origin_city.to_string(),
                    destination: destination.to_string(),
                    fuel_type: self.fuel_type,
                    fuel_price_per_gallon: fuel_price,
                    km_per_gallon,
                    one_way_distance: Distance::from_kilometers(distance),
                    one_way_eta: eta,
                    selected_toll_ids: self.selected_toll_ids.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

/// A finite number above zero, or `None`.
fn positive_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn positive_minutes(value: &str) -> Option<Duration> {
    let value = value.trim();
    let eta = if value.contains(':') {
        Duration::from_hm(value)?
    } else {
        Duration::from_minutes(positive_number(value)?)
    };
    (eta.as_minutes() > 0.0).then_some(eta)
}

#[test]
fn positive_number_rejects() {
    assert_eq!(positive_number(""), None);
    assert_eq!(positive_number("0"), None);
    assert_eq!(positive_number("-3"), None);
    assert_eq!(positive_number("abc"), None);
    assert_eq!(positive_number("inf"), None);
    assert_eq!(positive_number(" 35 "), Some(35.0));
}

#[test]
fn minutes_accept_hours() {
    assert_eq!(positive_minutes("3:00"), Some(Duration::from_minutes(180.0)));
    assert_eq!(positive_minutes("95"), Some(Duration::from_minutes(95.0)));
    assert_eq!(positive_minutes("0:00"), None);
    assert_eq!(positive_minutes("99999999:00"), None);
}
