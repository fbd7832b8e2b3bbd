//! # Paths
//!
//! Locations of the files the tool reads and writes.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::errors::ConfigError;

/// Name of the index document under the snarf root URL.
pub const INDEX_FILE: &str = "snarf.xml";

/// Config file, relative to the home directory.
pub const CONFIG_FILE: &str = ".config/clisnarf.json";

/// Temporary archive download, relative to the home directory.
pub const DOWNLOAD_FILE: &str = ".clisnarf.zip";

/// The filesystem locations used by one invocation.
#[derive(Debug, Clone)]
pub struct Paths {
    /// The JSON config file.
    pub config: PathBuf,
    /// Where a fetched archive is written before extraction.
    pub download: PathBuf,
    /// Directory that snarfed packages are extracted into.
    pub destination: PathBuf,
}

impl Paths {
    /// Resolves the per-user paths, extracting packages into the current
    /// directory.
    ///
    /// # Returns
    ///
    /// The [`Paths`] on success, or [`ConfigError::NoHome`] if the home
    /// directory cannot be determined.
    pub fn from_home() -> Result<Paths, ConfigError> {
        let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHome)?;
        let home = base_dirs.home_dir();
        Ok(Paths {
            config: home.join(CONFIG_FILE),
            download: home.join(DOWNLOAD_FILE),
            destination: PathBuf::from("."),
        })
    }
}
