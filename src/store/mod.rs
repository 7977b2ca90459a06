//! Local persistence. State lives in independent string slots, the way a
//! browser keeps `localStorage` keys; each slot holds one JSON document.

use std::io;

use thiserror::Error;

mod file;
mod memory;
mod slots;
pub use file::*;
pub use memory::*;
pub use slots::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A key-value blob store. Writes replace the whole value of a key.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, self::Error>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), self::Error>;
    fn remove(&mut self, key: &str) -> Result<(), self::Error>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, self::Error> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), self::Error> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), self::Error> {
        (**self).remove(key)
    }
}
