use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the deploy tools workspace",
    long_about = "A unified CLI for provisioning ECR repositories, inspecting\n\
                  env files, and running CI checks in the deploy tools workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ECR repositories listed in the mapping file
    Provision {
        /// Mapping file of `folder:repository-name` lines
        #[arg(long, env = "MAPPING_FILE")]
        mapping_file: Option<String>,
        /// AWS region to provision in
        #[arg(long, env = "AWS_REGION")]
        region: Option<String>,
        /// Emit the run report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the variables defined in an env file
    PrintEnv {
        /// Env file path
        #[arg(default_value = "env.DEV")]
        path: String,
    },
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting and clippy
    Lint,
    /// Workspace tests
    Test,
    /// Lint + test
    Check,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .unwrap_or_else(|error| {
            eprintln!("failed to execute cargo: {error}");
            exit(1)
        })
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_bin(bin: &str, bin_args: &[&str]) {
    let mut args = vec!["run", "-q", "-p", "deploy_tools_cli", "--bin", bin, "--"];
    args.extend_from_slice(bin_args);
    run_cargo(&args);
}

fn provision_args<'a>(
    mapping_file: Option<&'a str>,
    region: Option<&'a str>,
    json: bool,
) -> Vec<&'a str> {
    let mut args = Vec::new();
    if let Some(path) = mapping_file {
        args.extend(["--mapping-file", path]);
    }
    if let Some(region) = region {
        args.extend(["--region", region]);
    }
    if json {
        args.push("--json");
    }
    args
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_lint() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);
}

fn ci_test() {
    step("Test deploy_tools_core");
    run_cargo(&["test", "-p", "deploy_tools_core"]);

    step("Test deploy_tools_cli");
    run_cargo(&["test", "-p", "deploy_tools_cli"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Provision {
            mapping_file,
            region,
            json,
        } => {
            let args = provision_args(mapping_file.as_deref(), region.as_deref(), json);
            run_bin("create_ecr_repositories", &args);
        }
        Commands::PrintEnv { path } => {
            run_bin("print_env", &[&path]);
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Lint => ci_lint(),
                CiJob::Test => ci_test(),
                CiJob::Check => {
                    ci_lint();
                    ci_test();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provision_args_forward_only_given_options() {
        assert!(provision_args(None, None, false).is_empty());
        assert_eq!(
            provision_args(Some("map.txt"), Some("eu-west-1"), true),
            vec!["--mapping-file", "map.txt", "--region", "eu-west-1", "--json"]
        );
    }
}
