//! Loading and printing `KEY=VALUE` environment files.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

pub const DEFAULT_ENV_FILE: &str = "env.DEV";

#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("env file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read env file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl EnvFileError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 2,
            Self::Unreadable { .. } => 1,
        }
    }
}

/// Reads an env file without touching the process environment.
///
/// Lines that cannot be parsed are skipped with a warning. A repeated key
/// keeps its last value.
pub fn load_env_file(path: &Path) -> Result<BTreeMap<String, String>, EnvFileError> {
    if !path.exists() {
        return Err(EnvFileError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let iter = dotenvy::from_path_iter(path).map_err(|source| EnvFileError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut vars = BTreeMap::new();
    for item in iter {
        match item {
            Ok((key, value)) if !key.is_empty() => {
                vars.insert(key, value);
            }
            Ok(_) => {}
            Err(error) => {
                warn!(path = %path.display(), error = %error, "skipping unparsable env line");
            }
        }
    }
    Ok(vars)
}

pub fn render_env(path: &Path, vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Loaded {} keys from {}:", vars.len(), path.display());
    for (key, value) in vars {
        let _ = writeln!(out, "{key}={value}");
    }
    out
}
