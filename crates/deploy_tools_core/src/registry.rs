use serde::Serialize;
use thiserror::Error;

/// At-rest encryption applied to newly created repositories.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EncryptionMode {
    #[serde(rename = "AES256")]
    Aes256,
}

impl EncryptionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aes256 => "AES256",
        }
    }
}

/// Fixed configuration for repositories this tool creates.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RepositorySettings {
    pub scan_on_push: bool,
    pub encryption: EncryptionMode,
}

/// Provider failures, classified so callers never match on message text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("repository not found")]
    NotFound,
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("repository already exists: {0}")]
    AlreadyExists(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("request throttled: {0}")]
    Throttled(String),
    #[error("{0}")]
    Other(String),
}

impl RegistryError {
    /// Maps a provider error code (e.g. `RepositoryNotFoundException`) to a
    /// classification. Unknown or absent codes fall back to [`Self::Other`].
    pub fn from_error_code(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some("RepositoryNotFoundException") => Self::NotFound,
            Some(
                "AccessDeniedException"
                | "AccessDenied"
                | "UnauthorizedOperation"
                | "UnrecognizedClientException",
            ) => Self::AccessDenied(message),
            Some("RepositoryAlreadyExistsException") => Self::AlreadyExists(message),
            Some(
                "InvalidParameterException"
                | "InvalidTagParameterException"
                | "ValidationException"
                | "TooManyTagsException",
            ) => Self::InvalidRequest(message),
            Some(
                "ThrottlingException"
                | "TooManyRequestsException"
                | "RequestLimitExceeded",
            ) => Self::Throttled(message),
            _ => Self::Other(message),
        }
    }
}

/// How a repository came to be present after [`RepositoryRegistry::ensure_repository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ensured {
    Existing { uri: String },
    Created { uri: String },
}

impl Ensured {
    pub fn uri(&self) -> &str {
        match self {
            Self::Existing { uri } | Self::Created { uri } => uri,
        }
    }
}

/// A container image registry addressed by repository name.
pub trait RepositoryRegistry {
    /// Returns the URI of an existing repository, or [`RegistryError::NotFound`].
    fn describe_repository(&self, name: &str) -> Result<String, RegistryError>;

    fn create_repository(
        &self,
        name: &str,
        settings: &RepositorySettings,
    ) -> Result<String, RegistryError>;

    /// Lookup-then-create. Existing repositories are returned untouched;
    /// their configuration is never updated. The two calls are not atomic,
    /// so a concurrent creator makes the create fail with
    /// [`RegistryError::AlreadyExists`]. Registries with a native
    /// create-if-absent call can override this.
    fn ensure_repository(
        &self,
        name: &str,
        settings: &RepositorySettings,
    ) -> Result<Ensured, RegistryError> {
        match self.describe_repository(name) {
            Ok(uri) => Ok(Ensured::Existing { uri }),
            Err(RegistryError::NotFound) => self
                .create_repository(name, settings)
                .map(|uri| Ensured::Created { uri }),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::*;

    const SETTINGS: RepositorySettings = RepositorySettings {
        scan_on_push: true,
        encryption: EncryptionMode::Aes256,
    };

    #[derive(Default)]
    struct MemoryRegistry {
        repositories: RefCell<BTreeMap<String, String>>,
        describe_error: Option<RegistryError>,
        creates: RefCell<Vec<(String, RepositorySettings)>>,
    }

    impl RepositoryRegistry for MemoryRegistry {
        fn describe_repository(&self, name: &str) -> Result<String, RegistryError> {
            if let Some(error) = &self.describe_error {
                return Err(error.clone());
            }
            self.repositories
                .borrow()
                .get(name)
                .cloned()
                .ok_or(RegistryError::NotFound)
        }

        fn create_repository(
            &self,
            name: &str,
            settings: &RepositorySettings,
        ) -> Result<String, RegistryError> {
            self.creates
                .borrow_mut()
                .push((name.to_string(), *settings));
            let uri = format!("123456789012.dkr.ecr.us-east-1.amazonaws.com/{name}");
            self.repositories
                .borrow_mut()
                .insert(name.to_string(), uri.clone());
            Ok(uri)
        }
    }

    #[test]
    fn classifies_known_error_codes() {
        assert_eq!(
            RegistryError::from_error_code(Some("RepositoryNotFoundException"), "gone"),
            RegistryError::NotFound
        );
        assert_eq!(
            RegistryError::from_error_code(Some("AccessDeniedException"), "nope"),
            RegistryError::AccessDenied("nope".to_string())
        );
        assert_eq!(
            RegistryError::from_error_code(Some("RepositoryAlreadyExistsException"), "dup"),
            RegistryError::AlreadyExists("dup".to_string())
        );
        assert_eq!(
            RegistryError::from_error_code(Some("InvalidParameterException"), "bad name"),
            RegistryError::InvalidRequest("bad name".to_string())
        );
        assert_eq!(
            RegistryError::from_error_code(Some("ThrottlingException"), "slow down"),
            RegistryError::Throttled("slow down".to_string())
        );
    }

    #[test]
    fn unknown_or_missing_codes_are_other() {
        assert_eq!(
            RegistryError::from_error_code(Some("ServerException"), "boom"),
            RegistryError::Other("boom".to_string())
        );
        assert_eq!(
            RegistryError::from_error_code(Some("LimitExceededException"), "quota"),
            RegistryError::Other("quota".to_string())
        );
        assert_eq!(
            RegistryError::from_error_code(None, "dispatch failure"),
            RegistryError::Other("dispatch failure".to_string())
        );
    }

    #[test]
    fn ensure_creates_missing_repository_once() {
        let registry = MemoryRegistry::default();

        let first = registry
            .ensure_repository("orders", &SETTINGS)
            .expect("first ensure should succeed");
        let second = registry
            .ensure_repository("orders", &SETTINGS)
            .expect("second ensure should succeed");

        assert!(matches!(first, Ensured::Created { .. }));
        assert!(matches!(second, Ensured::Existing { .. }));
        assert_eq!(first.uri(), second.uri());
        assert_eq!(
            registry.creates.borrow().as_slice(),
            &[("orders".to_string(), SETTINGS)]
        );
    }

    #[test]
    fn ensure_does_not_create_after_generic_lookup_error() {
        let registry = MemoryRegistry {
            describe_error: Some(RegistryError::AccessDenied("no ecr:Describe".to_string())),
            ..MemoryRegistry::default()
        };

        let error = registry
            .ensure_repository("orders", &SETTINGS)
            .expect_err("lookup failure should propagate");

        assert_eq!(error, RegistryError::AccessDenied("no ecr:Describe".to_string()));
        assert!(registry.creates.borrow().is_empty());
    }

    #[test]
    fn encryption_mode_uses_provider_spelling() {
        assert_eq!(EncryptionMode::Aes256.as_str(), "AES256");
    }
}
