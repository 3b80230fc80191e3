use std::fmt::Write;

use serde::Serialize;
use tracing::info;

use crate::config::ProvisionConfig;
use crate::error::ProvisionError;
use crate::identity::{verify_credentials, IdentityProvider};
use crate::mapping::parse_mapping;
use crate::reconcile::{reconcile, RepositoryOutcome};
use crate::registry::RepositoryRegistry;
use crate::summary::{section, RunSummary};

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub account_id: String,
    pub outcomes: Vec<RepositoryOutcome>,
    pub summary: RunSummary,
}

pub fn render_banner(config: &ProvisionConfig) -> String {
    let mut out = String::new();
    section(&mut out, "ECR Repository Creation Script");
    let _ = writeln!(out, "Region: {}", config.region);
    let _ = writeln!(out, "Mapping File: {}", config.mapping_file.display());
    out
}

/// Runs the provisioning pipeline.
///
/// The identity check runs before the mapping file is read, and every
/// pre-flight failure returns before the registry is called.
pub fn run_provisioning(
    config: &ProvisionConfig,
    identity: &dyn IdentityProvider,
    registry: &dyn RepositoryRegistry,
) -> Result<RunReport, ProvisionError> {
    let account_id = verify_credentials(identity)?;

    let entries = parse_mapping(&config.mapping_file)?;
    if entries.is_empty() {
        return Err(ProvisionError::NoMappings {
            path: config.mapping_file.clone(),
        });
    }
    info!(count = entries.len(), "found repository mappings");

    let outcomes = reconcile(registry, &entries, &config.repository_settings());
    let summary = RunSummary::from_outcomes(&outcomes);
    info!(
        succeeded = summary.success_count,
        failed = summary.failed_count,
        "reconciliation finished"
    );

    Ok(RunReport {
        account_id,
        outcomes,
        summary,
    })
}
