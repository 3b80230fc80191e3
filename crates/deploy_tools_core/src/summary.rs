use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::config::PartialFailurePolicy;
use crate::reconcile::RepositoryOutcome;

pub const PARTIAL_FAILURE_EXIT_CODE: u8 = 3;

const RULE: &str = "==================================================";

/// Aggregate of one run's outcomes, kept only for the final report.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    pub success_count: usize,
    pub failed_count: usize,
    pub failed_repositories: Vec<String>,
    /// Successful repositories keyed by name, so iteration is sorted.
    pub repository_uris: BTreeMap<String, String>,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[RepositoryOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome.uri() {
                Some(uri) => {
                    summary.success_count += 1;
                    summary
                        .repository_uris
                        .insert(outcome.repository_name.clone(), uri.to_string());
                }
                None => {
                    summary.failed_count += 1;
                    summary
                        .failed_repositories
                        .push(outcome.repository_name.clone());
                }
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failed_count
    }

    pub fn exit_code(&self, policy: PartialFailurePolicy) -> u8 {
        match policy {
            PartialFailurePolicy::Fail if self.failed_count > 0 => PARTIAL_FAILURE_EXIT_CODE,
            _ => 0,
        }
    }
}

pub fn console_url(region: &str) -> String {
    format!("https://console.aws.amazon.com/ecr/repositories?region={region}")
}

/// Renders the closing report: counts, failures, URIs by name, next steps.
pub fn render_summary(summary: &RunSummary, region: &str) -> String {
    let mut out = String::new();
    section(&mut out, "Summary");
    let _ = writeln!(out, "✓ Successfully created/exists: {}", summary.success_count);
    if summary.failed_count > 0 {
        let _ = writeln!(out, "✗ Failed: {}", summary.failed_count);
        out.push_str("Failed repositories:\n");
        for name in &summary.failed_repositories {
            let _ = writeln!(out, "  - {name}");
        }
    } else {
        out.push_str("✓ All repositories ready!\n");
    }
    out.push('\n');

    section(&mut out, "ECR Repository URIs");
    for (name, uri) in &summary.repository_uris {
        let _ = writeln!(out, "{name}: {uri}");
    }
    out.push('\n');

    let _ = writeln!(out, "{RULE}");
    out.push_str("Next Steps:\n");
    out.push_str("1. Verify repositories in AWS Console:\n");
    let _ = writeln!(out, "   {}", console_url(region));
    out.push_str("2. Configure GitHub Secrets with AWS credentials\n");
    out.push_str("3. Test the workflow by pushing code changes\n");
    let _ = writeln!(out, "{RULE}");
    out
}

pub(crate) fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{RULE}\n{title}\n{RULE}");
}
