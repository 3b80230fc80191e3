use serde::Serialize;
use tracing::{info, warn};

use crate::mapping::MappingEntry;
use crate::registry::{Ensured, RegistryError, RepositoryRegistry, RepositorySettings};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    PermissionDenied,
    AlreadyExists,
    InvalidRequest,
    Throttled,
    Other,
}

impl From<&RegistryError> for FailureKind {
    fn from(error: &RegistryError) -> Self {
        match error {
            RegistryError::AccessDenied(_) => Self::PermissionDenied,
            RegistryError::AlreadyExists(_) => Self::AlreadyExists,
            RegistryError::InvalidRequest(_) => Self::InvalidRequest,
            RegistryError::Throttled(_) => Self::Throttled,
            // NotFound only reaches here when a create reports it.
            RegistryError::NotFound | RegistryError::Other(_) => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Existing { uri: String },
    Created { uri: String },
    Failed { kind: FailureKind, message: String },
}

/// Result of reconciling one mapping entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RepositoryOutcome {
    pub folder: String,
    pub repository_name: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl RepositoryOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self.status, OutcomeStatus::Failed { .. })
    }

    pub fn uri(&self) -> Option<&str> {
        match &self.status {
            OutcomeStatus::Existing { uri } | OutcomeStatus::Created { uri } => Some(uri),
            OutcomeStatus::Failed { .. } => None,
        }
    }
}

/// Ensures one repository exists. Registry errors are absorbed into a
/// failed outcome and never propagate.
pub fn ensure_repository(
    registry: &dyn RepositoryRegistry,
    entry: &MappingEntry,
    settings: &RepositorySettings,
) -> RepositoryOutcome {
    let name = entry.repository_name.as_str();
    info!(folder = %entry.folder, repository = %name, "processing mapping");

    let status = match registry.ensure_repository(name, settings) {
        Ok(Ensured::Existing { uri }) => {
            info!(repository = %name, uri = %uri, "repository already exists");
            OutcomeStatus::Existing { uri }
        }
        Ok(Ensured::Created { uri }) => {
            info!(repository = %name, uri = %uri, "created repository");
            OutcomeStatus::Created { uri }
        }
        Err(error) => {
            let kind = FailureKind::from(&error);
            warn!(repository = %name, ?kind, error = %error, "failed to create repository");
            OutcomeStatus::Failed {
                kind,
                message: error.to_string(),
            }
        }
    };

    RepositoryOutcome {
        folder: entry.folder.clone(),
        repository_name: entry.repository_name.clone(),
        status,
    }
}

/// Reconciles every entry sequentially, in order, one outcome per entry.
pub fn reconcile(
    registry: &dyn RepositoryRegistry,
    entries: &[MappingEntry],
    settings: &RepositorySettings,
) -> Vec<RepositoryOutcome> {
    entries
        .iter()
        .map(|entry| ensure_repository(registry, entry, settings))
        .collect()
}
