// SPDX-License-Identifier: GPL-3.0-only

use std::env::{self, VarError};
use std::num::ParseIntError;

const TOTAL_COUNT_VAR: &str = "PAGINATE_TOTAL_COUNT";
const PER_PAGE_VAR: &str = "PAGINATE_PER_PAGE";

const DEFAULT_TOTAL_COUNT: i64 = 95;
const DEFAULT_PER_PAGE: i64 = 10;

/// Startup settings of the demo host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub total_count: i64,
    pub per_page: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            total_count: DEFAULT_TOTAL_COUNT,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{var} must be an integer: {source}")]
    Invalid {
        var: &'static str,
        source: ParseIntError,
    },
    #[error("{var} must be at least {min}, got {value}")]
    OutOfRange {
        var: &'static str,
        min: i64,
        value: i64,
    },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

/// Loads a `.env` file into the process environment, if there is one
pub fn load_env_file() -> Result<(), dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), ".env loaded");
            Ok(())
        }
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err),
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| env::var(var))
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, VarError>,
    ) -> Result<Self, SettingsError> {
        let total_count = read_var(&lookup, TOTAL_COUNT_VAR, DEFAULT_TOTAL_COUNT, 0)?;
        let per_page = read_var(&lookup, PER_PAGE_VAR, DEFAULT_PER_PAGE, 1)?;

        Ok(Settings {
            total_count,
            per_page,
        })
    }
}

fn read_var(
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    var: &'static str,
    default: i64,
    min: i64,
) -> Result<i64, SettingsError> {
    let value = match lookup(var) {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|source| SettingsError::Invalid { var, source })?,
        Err(VarError::NotPresent) => return Ok(default),
        Err(VarError::NotUnicode(_)) => return Err(SettingsError::NotUnicode { var }),
    };

    if value < min {
        return Err(SettingsError::OutOfRange { var, min, value });
    }
    Ok(value)
}
