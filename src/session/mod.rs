//! A single user's working session: the form, the in-memory trip list and
//! the store it is mirrored to. Rendering is left to the caller.

use std::path::Path;

use thiserror::Error;
use tracing::{error, info};

mod details;
mod form;
pub use details::*;
pub use form::*;

use crate::{
    export,
    reference::Directory,
    store::{self, Storage, TripStore},
    trip::{self, Stamp, TripRecord},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid trip: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Could not save trips: {0}")]
    Store(#[from] store::Error),
    #[error("Could not export trips: {0}")]
    Export(#[from] export::Error),
}

pub struct Session<S: Storage> {
    store: TripStore<S>,
    directory: Directory,
    trips: Vec<TripRecord>,
}

impl<S: Storage> Session<S> {
    /// Loads the saved trips once. Corrupt state opens as an empty list.
    pub fn open(store: TripStore<S>, directory: Directory) -> Self {
        let trips = store.load();
        info!("Session opened with {} saved trips", trips.len());
        Self {
            store,
            directory,
            trips,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Saved trips, newest first.
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    pub fn find(&self, id: &str) -> Option<&TripRecord> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    /// What the form would produce right now, without saving. `None` while
    /// any field is still invalid.
    pub fn preview(&self, form: &TripForm) -> Option<TripRecord> {
        let input = form.parse(&self.directory).ok()?;
        Some(trip::compute(&input, &self.directory))
    }

    pub fn submit(&mut self, form: &mut TripForm) -> Result<&TripRecord, self::Error> {
        self.submit_with_stamp(form, Stamp::generate())
    }

    /// Validates, computes and saves a trip, then clears the per-trip form
    /// fields. On a storage failure the trip is kept in memory and the error
    /// is returned.
    pub fn submit_with_stamp(
        &mut self,
        form: &mut TripForm,
        stamp: Stamp,
    ) -> Result<&TripRecord, self::Error> {
        let input = form.parse(&self.directory)?;
        let record = trip::compute_with_stamp(&input, &self.directory, stamp);
        info!(
            "Saving trip {} ({} -> {})",
            record.id, record.origin_city, record.destination
        );
        self.trips.insert(0, record);
        form.reset_trip_fields();
        self.persist()?;
        Ok(&self.trips[0])
    }

    /// Removes the trip with this id. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, self::Error> {
        let Some(pos) = self.trips.iter().position(|trip| trip.id == id) else {
            return Ok(false);
        };
        self.trips.remove(pos);
        info!("Deleted trip {id}");
        self.persist()?;
        Ok(true)
    }

    pub fn export_csv(&self) -> Result<String, self::Error> {
        Ok(export::to_csv(&self.trips)?)
    }

    pub fn export_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), self::Error> {
        export::write_to_path(&self.trips, path)?;
        Ok(())
    }

    pub fn into_store(self) -> TripStore<S> {
        self.store
    }

    fn persist(&mut self) -> Result<(), store::Error> {
        self.store.save(&self.trips).inspect_err(|err| {
            error!("Failed to save {} trips: {err}", self.trips.len());
        })
    }
}
