use serde::{Deserialize, Serialize};

/// A toll as it appears in a data file, before normalization. Accepts both
/// the English keys and the Spanish ones used by the published lists.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TollRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "departamento", alias = "depto")]
    pub department: String,
    #[serde(default, alias = "operador")]
    pub operator: Option<String>,
    #[serde(default, alias = "fareCOP", alias = "tarifa", alias = "fare")]
    pub fare_cop: Option<f64>,
    #[serde(default, alias = "estado")]
    pub status: Option<String>,
}

/// JSON toll files are either a bare array or `{ "tolls": [...] }`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum TollFile {
    List(Vec<TollRow>),
    Wrapped { tolls: Vec<TollRow> },
}

impl From<TollFile> for Vec<TollRow> {
    fn from(value: TollFile) -> Self {
        match value {
            TollFile::List(rows) => rows,
            TollFile::Wrapped { tolls } => tolls,
        }
    }
}
