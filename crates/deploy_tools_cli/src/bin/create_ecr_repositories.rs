use std::process::ExitCode;

use clap::Parser;
use deploy_tools_cli::adapters::ecr::EcrRegistry;
use deploy_tools_cli::adapters::load_sdk_config;
use deploy_tools_cli::adapters::sts::StsIdentity;
use deploy_tools_cli::cli::ProvisionArgs;
use deploy_tools_cli::telemetry::init_tracing;
use deploy_tools_core::error::ProvisionError;
use deploy_tools_core::run::{render_banner, run_provisioning, RunReport};
use deploy_tools_core::summary::render_summary;
use tracing::error;

fn print_report(report: &RunReport, region: &str, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_summary(&report.summary, region));
    }
    Ok(())
}

fn report_fatal(failure: &ProvisionError) {
    error!(error = %failure, "provisioning aborted");
    eprintln!("ERROR: {failure}");
    if let Some(hint) = failure.hint() {
        eprintln!("{hint}");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();
    let args = ProvisionArgs::parse();
    let config = args.to_config();

    if !args.json {
        println!("{}", render_banner(&config));
    }

    let sdk_config = load_sdk_config(&config.region).await;
    let identity = StsIdentity::new(aws_sdk_sts::Client::new(&sdk_config));
    let registry = EcrRegistry::new(aws_sdk_ecr::Client::new(&sdk_config));

    match run_provisioning(&config, &identity, &registry) {
        Ok(report) => {
            if let Err(failure) = print_report(&report, &config.region, args.json) {
                error!(error = %failure, "failed to serialize run report");
                return ExitCode::FAILURE;
            }
            ExitCode::from(report.summary.exit_code(config.partial_failure))
        }
        Err(failure) => {
            report_fatal(&failure);
            ExitCode::from(failure.exit_code())
        }
    }
}
