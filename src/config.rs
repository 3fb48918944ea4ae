use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::Result;

/// Environment variable consulted when `--data` is not given.
pub const DATA_ENV_VAR: &str = "TRAINS_DATA";

/// Where the store lives for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    data_file: PathBuf,
}

impl Config {
    /// Resolves the data file from the flag, falling back to `$TRAINS_DATA`.
    pub fn resolve(flag: Option<PathBuf>) -> Result<Self> {
        Config::resolve_with(flag, std::env::var(DATA_ENV_VAR).ok())
    }

    pub fn resolve_with(flag: Option<PathBuf>, env: Option<String>) -> Result<Self> {
        let data_file = flag
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| env.filter(|s| !s.is_empty()).map(PathBuf::from))
            .ok_or(anyhow!("The data file name is absent"))?;

        log::debug!("Using data file {data_file:?}");
        Ok(Config { data_file })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}
