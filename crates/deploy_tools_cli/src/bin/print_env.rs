use std::process::ExitCode;

use clap::Parser;
use deploy_tools_cli::cli::PrintEnvArgs;
use deploy_tools_cli::telemetry::init_tracing;
use deploy_tools_core::envfile::{load_env_file, render_env};

fn main() -> ExitCode {
    init_tracing();
    let args = PrintEnvArgs::parse();

    match load_env_file(&args.path) {
        Ok(vars) => {
            print!("{}", render_env(&args.path, &vars));
            ExitCode::SUCCESS
        }
        Err(failure) => {
            eprintln!("ERROR: {failure}");
            ExitCode::from(failure.exit_code())
        }
    }
}
