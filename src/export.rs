//! CSV export of saved trips.
//!
//! The column set and order are fixed. Fields that contain a comma, a
//! double quote or a line break are quoted with inner quotes doubled; rows
//! are separated by a single `\n` with no newline after the last one.

use std::{fs, io, path::Path, string::FromUtf8Error};

use chrono::SecondsFormat;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;
use tracing::debug;

use crate::trip::TripRecord;

pub const EXPORT_FILE_NAME: &str = "biatrack_trips.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8";

pub const HEADERS: [&str; 19] = [
    "createdAtISO",
    "contractorName",
    "baseLabel",
    "originCity",
    "destinationText",
    "fuelType",
    "fuelPricePerGallonCOP",
    "kmPerGallon",
    "oneWayDistanceKm",
    "roundTripDistanceKm",
    "oneWayEtaMinutes",
    "peakEtaMinutes",
    "tollCountOneWay",
    "tollCostOneWayCOP",
    "tollCountRoundTrip",
    "tollCostRoundTripCOP",
    "fuelGallonsRoundTrip",
    "fuelCostRoundTripCOP",
    "totalRoundTripCOP",
];

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Numbers are written in plain decimal at any magnitude, never in exponent
/// notation.
fn row(trip: &TripRecord) -> [String; 19] {
    [
        trip.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        trip.contractor_name.clone(),
        trip.base_label.clone(),
        trip.origin_city.clone(),
        trip.destination.clone(),
        trip.fuel_type.to_string(),
        trip.fuel_price_per_gallon.to_string(),
        trip.km_per_gallon.to_string(),
        trip.one_way_distance.to_string(),
        trip.round_trip_distance.to_string(),
        trip.one_way_eta.to_string(),
        trip.peak_eta.to_string(),
        trip.toll_count_one_way.to_string(),
        trip.toll_cost_one_way.to_string(),
        trip.toll_count_round_trip.to_string(),
        trip.toll_cost_round_trip.to_string(),
        trip.fuel_gallons_round_trip.to_string(),
        trip.fuel_cost_round_trip.to_string(),
        trip.total_round_trip.to_string(),
    ]
}

/// Serializes the trips, header first, in the order given. Writing to an
/// in-memory buffer does not fail in practice; the `Result` only carries
/// what the `csv` writer reports.
pub fn to_csv(trips: &[TripRecord]) -> Result<String, self::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for trip in trips {
        writer.write_record(row(trip))?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    debug!("Exported {} trips ({} bytes)", trips.len(), text.len());
    Ok(text)
}

/// Writes the export to `path`, replacing any existing file.
pub fn write_to_path<P: AsRef<Path>>(trips: &[TripRecord], path: P) -> Result<(), self::Error> {
    let text = to_csv(trips)?;
    if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
