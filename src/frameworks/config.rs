use crate::domain::WormTuning;
use crate::use_cases::Scenario;
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};

// Runtime configuration (file locations), not gameplay tuning.

pub fn scenario_path() -> PathBuf {
    env::var("WORMS_SCENARIO")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("scenario.toml"))
}

pub fn tuning_path() -> Option<PathBuf> {
    env::var("WORMS_TUNING")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidTuning {
        field: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            ConfigError::InvalidTuning { field } => {
                write!(f, "tuning field `{field}` must be a positive finite number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::InvalidTuning { .. } => None,
        }
    }
}

/// Parses tuning from TOML. Missing fields keep their defaults.
pub fn parse_tuning(raw: &str, path: &Path) -> Result<WormTuning, ConfigError> {
    let tuning: WormTuning = toml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match tuning.invalid_field() {
        Some(field) => Err(ConfigError::InvalidTuning { field }),
        None => Ok(tuning),
    }
}

pub fn parse_scenario(raw: &str, path: &Path) -> Result<Scenario, ConfigError> {
    toml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads tuning from `path`, or the built-in defaults when no file is configured.
pub fn load_tuning(path: Option<&Path>) -> Result<WormTuning, ConfigError> {
    match path {
        Some(path) => parse_tuning(&read(path)?, path),
        None => Ok(WormTuning::default()),
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigError> {
    parse_scenario(&read(path)?, path)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
