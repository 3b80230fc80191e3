use std::path::PathBuf;

use thiserror::Error;

/// Pre-flight failures caused by the local mapping configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("mapping file not found: {}", path.display())]
    MappingFileNotFound { path: PathBuf },
    #[error("failed to read mapping file {}: {source}", path.display())]
    MappingFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal errors that abort a provisioning run before any repository is touched.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("AWS credentials not configured: {message}")]
    Credentials { message: String },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("no repository mappings found in {}", path.display())]
    NoMappings { path: PathBuf },
}

impl ProvisionError {
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Operator-facing guidance printed after the error line.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Credentials { .. } => Some(
                "Please configure AWS credentials using:\n  aws configure\n  OR\n  export AWS_ACCESS_KEY_ID=...\n  export AWS_SECRET_ACCESS_KEY=...",
            ),
            Self::Configuration(_) | Self::NoMappings { .. } => None,
        }
    }
}
