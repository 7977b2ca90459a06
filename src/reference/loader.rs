use std::io::Read;

use csv::Reader;
use tracing::{debug, warn};

use crate::{
    reference::{self, Toll, TollRow, TollStatus, models::TollFile},
    shared::text,
};

/// Reads tolls from a CSV file with a header row.
pub fn tolls_from_csv<R: Read>(reader: R) -> Result<Vec<Toll>, reference::Error> {
    let mut rdr = Reader::from_reader(reader);
    let mut rows: Vec<TollRow> = Vec::new();
    for result in rdr.deserialize() {
        let row: TollRow = result?;
        rows.push(row);
    }
    debug!("Parsed {} toll rows from csv", rows.len());
    Ok(normalize_rows(rows))
}

/// Reads tolls from JSON: either an array or an object with a `tolls` array.
pub fn tolls_from_json<R: Read>(reader: R) -> Result<Vec<Toll>, reference::Error> {
    let file: TollFile = serde_json::from_reader(reader)?;
    let rows: Vec<TollRow> = file.into();
    debug!("Parsed {} toll rows from json", rows.len());
    Ok(normalize_rows(rows))
}

/// Parses the free-form list format used when transcribing toll tables by
/// hand:
///
/// ```text
/// Peaje Chinauta
/// Departamento: Cundinamarca
/// Operador: Vía 40 Express
/// Tarifa: $ 15.000
/// Estado: Activo
/// ```
///
/// A line without `:` starts a new toll. `#` starts a comment. A removed or
/// suspended status forces the fare to zero.
pub fn tolls_from_text(input: &str) -> Vec<Toll> {
    let mut rows: Vec<TollRow> = Vec::new();
    let mut current: Option<TollRow> = None;

    for line in input.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            if is_numeric(line) {
                continue;
            }
            if let Some(row) = current.take() {
                rows.push(row);
            }
            current = Some(TollRow {
                name: line.to_string(),
                ..Default::default()
            });
            continue;
        };

        let Some(row) = current.as_mut() else {
            warn!("Ignoring '{line}' before any toll name");
            continue;
        };
        let key = text::normalize(key.trim());
        let value = value.trim();
        if key.contains("departamento") || key.contains("depto") {
            row.department = value.to_string();
        } else if key.contains("operador") {
            row.operator = Some(value.to_string());
        } else if key.contains("tarifa") || key.contains("precio") || key.contains("costo") {
            row.fare_cop = parse_fare(value);
        } else if key.contains("estado") || key.contains("status") {
            let status = parse_text_status(value);
            if !status.is_active() {
                row.fare_cop = Some(0.0);
            }
            row.status = Some(status.as_str().to_string());
        }
    }
    if let Some(row) = current {
        rows.push(row);
    }

    debug!("Parsed {} toll rows from text", rows.len());
    normalize_rows(rows)
}

fn normalize_rows(rows: Vec<TollRow>) -> Vec<Toll> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| normalize_row(row, i))
        .collect()
}

fn normalize_row(row: TollRow, index: usize) -> Toll {
    let id = row
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("toll-{index}"));
    let name = row.name.trim();
    let mut toll = Toll::new(&id, name, row.department.trim(), row.fare_cop.unwrap_or(0.0));
    toll.index = index as u32;
    toll.operator = row
        .operator
        .as_deref()
        .map(str::trim)
        .filter(|operator| !operator.is_empty())
        .map(Into::into);
    toll.status = row
        .status
        .as_deref()
        .map(TollStatus::parse_lenient)
        .unwrap_or_default();
    toll
}

fn is_numeric(line: &str) -> bool {
    let digits: String = line.chars().filter(|c| *c != '.' && *c != ',').collect();
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Pesos have no cents in practice, so `.` and `,` are read as thousands
/// separators: "$ 15.000" is fifteen thousand.
fn parse_fare(value: &str) -> Option<f64> {
    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

fn parse_text_status(value: &str) -> TollStatus {
    let value = text::normalize(value);
    if value.contains("desmontado") || value.contains("removed") {
        TollStatus::Removed
    } else if value.contains("suspendido")
        || value.contains("suspended")
        || value.contains("sin cobro")
    {
        TollStatus::Suspended
    } else {
        TollStatus::Active
    }
}

#[test]
fn fare_with_separators() {
    assert_eq!(parse_fare("$ 15.000"), Some(15_000.0));
    assert_eq!(parse_fare("12,600 COP"), Some(12_600.0));
    assert_eq!(parse_fare("sin dato"), None);
}

#[test]
fn numeric_lines() {
    assert!(is_numeric("15.000"));
    assert!(!is_numeric("Peaje 1"));
    assert!(!is_numeric("."));
}

#[test]
fn text_status_words() {
    assert_eq!(parse_text_status("Desmontado"), TollStatus::Removed);
    assert_eq!(parse_text_status("Sin cobro"), TollStatus::Suspended);
    assert_eq!(parse_text_status("Activo"), TollStatus::Active);
}
