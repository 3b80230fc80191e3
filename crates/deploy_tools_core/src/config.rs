use std::path::PathBuf;

use serde::Serialize;

use crate::mapping::DEFAULT_MAPPING_FILE;
use crate::registry::{EncryptionMode, RepositorySettings};

pub const DEFAULT_REGION: &str = "us-east-1";

/// Whether per-repository failures change the process exit status.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PartialFailurePolicy {
    /// Exit `0` even when some repositories failed.
    #[default]
    Ignore,
    /// Exit non-zero when any repository failed.
    Fail,
}

impl PartialFailurePolicy {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            Self::Fail
        } else {
            Self::Ignore
        }
    }
}

/// Settings for one provisioning run, built once at startup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProvisionConfig {
    pub mapping_file: PathBuf,
    pub region: String,
    pub scan_on_push: bool,
    pub partial_failure: PartialFailurePolicy,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            mapping_file: PathBuf::from(DEFAULT_MAPPING_FILE),
            region: DEFAULT_REGION.to_string(),
            scan_on_push: true,
            partial_failure: PartialFailurePolicy::Ignore,
        }
    }
}

impl ProvisionConfig {
    pub fn repository_settings(&self) -> RepositorySettings {
        RepositorySettings {
            scan_on_push: self.scan_on_push,
            encryption: EncryptionMode::Aes256,
        }
    }
}

/// Only a case-insensitive `"true"` enables a flag.
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
