use thiserror::Error;
use tracing::info;

use crate::error::ProvisionError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct IdentityError {
    message: String,
}

impl IdentityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Resolves the account that the configured credentials belong to.
pub trait IdentityProvider {
    fn caller_account_id(&self) -> Result<String, IdentityError>;
}

/// Pre-flight gate: a run never proceeds without a resolvable identity.
pub fn verify_credentials(provider: &dyn IdentityProvider) -> Result<String, ProvisionError> {
    let account_id = provider
        .caller_account_id()
        .map_err(|error| ProvisionError::Credentials {
            message: error.message,
        })?;
    info!(account_id = %account_id, "verified AWS credentials");
    Ok(account_id)
}
