use std::path::{Path, PathBuf};

use crate::{
    export,
    store::{SETTINGS_KEY, TRIPS_KEY},
};

/// Where state is kept and what the persisted artefacts are called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub trips_key: String,
    pub settings_key: String,
    pub export_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: ".biatrack".into(),
            trips_key: TRIPS_KEY.into(),
            settings_key: SETTINGS_KEY.into(),
            export_file_name: export::EXPORT_FILE_NAME.into(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_data_dir<P: AsRef<Path>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    /// Default location of the CSV export, inside the data directory.
    pub fn export_path(&self) -> PathBuf {
        self.data_dir.join(&self.export_file_name)
    }
}
