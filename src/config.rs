//! User configuration, read from a TOML file.
//!
//! Every section is optional; a missing file means defaults throughout.
//!
//! ```toml
//! [display]
//! group_thousands = true
//! precision = 10
//!
//! [keypad.aliases]
//! "^" = "x"
//!
//! [session]
//! prompt = "> "
//! ```

use crate::error::{CalcError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub keypad: KeypadConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// Separate thousands with `,` in the rendered result.
    pub group_thousands: bool,
    /// Maximum number of fractional digits shown.
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_thousands: true,
            precision: 10,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct KeypadConfig {
    /// Extra input spellings for button symbols, e.g. `"^" = "x"`.
    /// Entries here override the built-in aliases.
    pub aliases: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
        }
    }
}

/// Default config location: `<config_dir>/zcalc/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
}

impl Config {
    /// Load the config from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(default_path) {
            Some(path) => path,
            None => {
                debug!("no config directory, using defaults");
                return Ok(Self::default());
            }
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(CalcError::ConfigRead { path, source }),
        };

        let config = Self::parse(&contents).map_err(|source| CalcError::ConfigParse {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
