use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lemma printed by `rutez show` when none is given
pub const DEFAULT_LEMMA: &str = "постоянная сущность";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RutezConfig {
    /// Path to the thesaurus database
    pub database: Option<String>,
    pub default_lemma: Option<String>,
}

impl RutezConfig {
    /// Resolve the database path: explicit flag, then config, then default
    pub fn database_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(default_database_path)
    }

    pub fn lemma<'a>(&'a self, arg: Option<&'a str>) -> &'a str {
        arg.or(self.default_lemma.as_deref()).unwrap_or(DEFAULT_LEMMA)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("rutez.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("rutez.db")
}

/// Load the config file, if present.
///
/// A missing file is not an error; a malformed one is.
pub fn load_config(path: Option<&Path>) -> crate::Result<Option<RutezConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: RutezConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}
