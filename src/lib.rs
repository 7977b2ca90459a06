//! Trip cost engine for ground-transport reimbursement.
//!
//! A trip goes from a contractor's base to a destination and back. Distance
//! and travel time are read off an external maps service and typed in by
//! hand, as is the list of toll stations crossed on the way out. From that
//! the [`trip`] module computes round-trip fuel, tolls, peak-hour ETA and
//! the total, [`store`] keeps the records on disk, and [`export`] writes them
//! out as CSV.

pub mod config;
pub mod export;
pub mod reference;
pub mod session;
pub mod shared;
pub mod store;
pub mod trip;

pub use config::Config;
pub use reference::{Base, Contractor, Directory, Toll, TollQuery, TollStatus};
pub use session::{Session, TripForm, ValidationErrors};
pub use store::{FileStorage, MemoryStorage, Settings, SettingsStore, Storage, TripStore};
pub use trip::{FuelType, Stamp, TripInput, TripRecord};
