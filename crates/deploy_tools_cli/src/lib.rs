//! AWS-oriented adapters and binaries for the deployment tools.
//!
//! This crate owns runtime integration details (SDK clients, argument
//! parsing, and log setup). Provisioning behavior lives in
//! `deploy_tools_core`.

pub mod adapters;
pub mod cli;
pub mod telemetry;
