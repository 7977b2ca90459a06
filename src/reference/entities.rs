use std::{fmt::Display, str::FromStr, sync::Arc};

use crate::shared::{Identifiable, text};

/// A company that bills trips, with the bases its crews leave from.
#[derive(Debug, Default, Clone)]
pub struct Contractor {
    /// The global internal index used for O(1) array lookups in the directory.
    pub index: u32,
    /// The unique external identifier.
    pub id: Arc<str>,
    /// The display name printed on every trip record.
    pub name: Arc<str>,
    /// Free-text note on the regions the contractor covers.
    pub coverage: Option<Arc<str>>,
    pub bases: Box<[Base]>,
}

impl Contractor {
    pub fn new(id: &str, name: &str, bases: Vec<Base>) -> Self {
        Self {
            index: 0,
            id: id.into(),
            name: name.into(),
            coverage: None,
            bases: bases.into(),
        }
    }

    pub fn base(&self, id: &str) -> Option<&Base> {
        self.bases.iter().find(|base| base.id.as_ref() == id)
    }

    pub fn first_base(&self) -> Option<&Base> {
        self.bases.first()
    }
}

/// A departure point. The trip origin is always the base's city.
#[derive(Debug, Default, Clone)]
pub struct Base {
    pub id: Arc<str>,
    /// Human label, e.g. "Base Medellín" or "Unidad Bogotá".
    pub label: Arc<str>,
    pub city: Arc<str>,
    pub department: Option<Arc<str>>,
}

impl Base {
    pub fn new(id: &str, label: &str, city: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            city: city.into(),
            department: None,
        }
    }
}

/// Operating state of a toll station. Removed and suspended stations usually
/// carry a zero fare, but nothing enforces it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TollStatus {
    #[default]
    Active,
    Removed,
    Suspended,
}

impl TollStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TollStatus::Active => "ACTIVE",
            TollStatus::Removed => "REMOVED",
            TollStatus::Suspended => "SUSPENDED",
        }
    }

    pub const fn is_active(&self) -> bool {
        matches!(self, TollStatus::Active)
    }

    /// Lenient parse used by the loaders: anything unrecognised is active.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for TollStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(TollStatus::Active),
            "REMOVED" => Ok(TollStatus::Removed),
            "SUSPENDED" => Ok(TollStatus::Suspended),
            other => Err(format!("unknown toll status: {other}")),
        }
    }
}

impl Display for TollStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed road fare point the user can add to a trip.
#[derive(Debug, Default, Clone)]
pub struct Toll {
    pub index: u32,
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub department: Arc<str>,
    pub operator: Option<Arc<str>>,
    /// Fare in pesos as published. Kept unrounded; sums are rounded.
    pub fare_cop: f64,
    pub status: TollStatus,
}

impl Toll {
    pub fn new(id: &str, name: &str, department: &str, fare_cop: f64) -> Self {
        Self {
            index: 0,
            id: id.into(),
            name: name.into(),
            normalized_name: text::normalize(name).into(),
            department: department.into(),
            operator: None,
            fare_cop,
            status: TollStatus::Active,
        }
    }

    pub fn with_operator(mut self, operator: &str) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn with_status(mut self, status: TollStatus) -> Self {
        self.status = status;
        self
    }
}

impl Identifiable for Toll {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}
