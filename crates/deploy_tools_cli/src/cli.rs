use std::path::PathBuf;

use clap::Parser;
use deploy_tools_core::config::{
    parse_flag, PartialFailurePolicy, ProvisionConfig, DEFAULT_REGION,
};
use deploy_tools_core::envfile::DEFAULT_ENV_FILE;
use deploy_tools_core::mapping::DEFAULT_MAPPING_FILE;

#[derive(Debug, Parser)]
#[command(
    name = "create_ecr_repositories",
    about = "Create the ECR repositories listed in the lambda mapping file"
)]
pub struct ProvisionArgs {
    /// File of `folder:repository-name` lines
    #[arg(long, env = "MAPPING_FILE", default_value = DEFAULT_MAPPING_FILE)]
    pub mapping_file: PathBuf,
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,
    /// Enable image scanning on push for created repositories ("true" enables)
    #[arg(long, env = "ENABLE_SCAN_ON_PUSH", default_value = "true")]
    pub scan_on_push: String,
    /// Exit non-zero when any repository fails ("true" enables)
    #[arg(long, env = "FAIL_ON_PARTIAL_FAILURE", default_value = "false")]
    pub fail_on_partial_failure: String,
    /// Emit the run report as JSON on stdout instead of the text summary
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl ProvisionArgs {
    pub fn to_config(&self) -> ProvisionConfig {
        ProvisionConfig {
            mapping_file: self.mapping_file.clone(),
            region: self.region.clone(),
            scan_on_push: parse_flag(&self.scan_on_push),
            partial_failure: PartialFailurePolicy::from_flag(parse_flag(
                &self.fail_on_partial_failure,
            )),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "print_env", about = "Print the variables defined in an env file")]
pub struct PrintEnvArgs {
    #[arg(default_value = DEFAULT_ENV_FILE)]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_arguments_build_config() {
        let args = ProvisionArgs::try_parse_from([
            "create_ecr_repositories",
            "--mapping-file",
            "ops/mapping.txt",
            "--region",
            "eu-central-1",
            "--scan-on-push",
            "FALSE",
            "--fail-on-partial-failure",
            "True",
        ])
        .expect("arguments should parse");

        let config = args.to_config();

        assert_eq!(config.mapping_file, PathBuf::from("ops/mapping.txt"));
        assert_eq!(config.region, "eu-central-1");
        assert!(!config.scan_on_push);
        assert_eq!(config.partial_failure, PartialFailurePolicy::Fail);
    }

    #[test]
    fn print_env_accepts_positional_path() {
        let args = PrintEnvArgs::try_parse_from(["print_env", "config/env.PROD"])
            .expect("arguments should parse");

        assert_eq!(args.path, PathBuf::from("config/env.PROD"));
    }
}
