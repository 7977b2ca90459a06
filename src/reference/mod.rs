use std::{collections::HashMap, io, sync::Arc};

use thiserror::Error;
use tracing::{debug, warn};

mod builtin;
mod entities;
mod loader;
mod models;
pub use entities::*;
pub use loader::*;
pub use models::TollRow;

use crate::shared;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

type IdToIndex = HashMap<Arc<str>, usize>;

/// Read-only reference data: who can travel, where from, and which tolls
/// can be picked.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub contractors: Box<[Contractor]>,
    pub tolls: Box<[Toll]>,

    contractor_lookup: Arc<IdToIndex>,
    toll_lookup: Arc<IdToIndex>,
}

/// Filter used by the toll picker. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TollQuery {
    pub name: String,
    pub department: Option<String>,
}

impl TollQuery {
    pub fn by_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            department: None,
        }
    }

    pub fn in_department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }
}

impl Directory {
    pub fn new() -> Self {
        Default::default()
    }

    /// Built-in contractors, no tolls.
    pub fn builtin() -> Self {
        Self::new().with_contractors(builtin::contractors())
    }

    pub fn with_contractors(mut self, contractors: Vec<Contractor>) -> Self {
        let (contractors, lookup) = index(contractors, |c, i| c.index = i, |c| c.id.clone());
        self.contractors = contractors;
        self.contractor_lookup = lookup.into();
        self
    }

    pub fn with_tolls(mut self, tolls: Vec<Toll>) -> Self {
        let (tolls, lookup) = index(tolls, |t, i| t.index = i, |t| t.id.clone());
        debug!("Directory holds {} tolls", tolls.len());
        self.tolls = tolls;
        self.toll_lookup = lookup.into();
        self
    }

    pub fn contractor(&self, id: &str) -> Option<&Contractor> {
        self.contractor_lookup
            .get(id)
            .map(|&index| &self.contractors[index])
    }

    pub fn base(&self, contractor_id: &str, base_id: &str) -> Option<&Base> {
        self.contractor(contractor_id)?.base(base_id)
    }

    /// The trip origin for a contractor/base pair.
    pub fn origin_city(&self, contractor_id: &str, base_id: &str) -> Option<&str> {
        self.base(contractor_id, base_id).map(|base| base.city.as_ref())
    }

    pub fn toll(&self, id: &str) -> Option<&Toll> {
        self.toll_lookup.get(id).map(|&index| &self.tolls[index])
    }

    /// Every toll whose id is in `ids`, in directory order. Unknown ids are
    /// skipped and repeated ids count once.
    pub fn selected_tolls<'a, S: AsRef<str>>(&'a self, ids: &[S]) -> Vec<&'a Toll> {
        self.tolls
            .iter()
            .filter(|toll| ids.iter().any(|id| id.as_ref() == toll.id.as_ref()))
            .collect()
    }

    /// Sorted, deduplicated list of toll departments.
    pub fn departments(&self) -> Vec<&str> {
        let mut departments: Vec<&str> = self.tolls.iter().map(|t| t.department.as_ref()).collect();
        departments.sort_unstable();
        departments.dedup();
        departments
    }

    pub fn filter_tolls(&self, query: &TollQuery) -> Vec<&Toll> {
        let department = query.department.as_deref().filter(|d| !d.is_empty());
        shared::filter_by_name(&query.name, &self.tolls[..])
            .into_iter()
            .filter(|toll| department.is_none_or(|d| toll.department.as_ref() == d))
            .collect()
    }
}

fn index<T, F, K>(values: Vec<T>, mut set_index: F, key: K) -> (Box<[T]>, IdToIndex)
where
    F: FnMut(&mut T, u32),
    K: Fn(&T) -> Arc<str>,
{
    let mut lookup: IdToIndex = HashMap::new();
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for (i, mut value) in values.into_iter().enumerate() {
        set_index(&mut value, i as u32);
        let id = key(&value);
        if lookup.contains_key(&id) {
            warn!("Duplicate id '{id}', keeping the first entry for lookups");
        } else {
            lookup.insert(id, i);
        }
        out.push(value);
    }
    (out.into(), lookup)
}
