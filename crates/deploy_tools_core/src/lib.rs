//! Deployment tooling domain primitives.
//!
//! This crate owns the mapping file format, run configuration, repository
//! reconciliation, and summary reporting. It intentionally excludes AWS SDK
//! and runtime concerns; those live in `deploy_tools_cli` behind the
//! [`registry::RepositoryRegistry`] and [`identity::IdentityProvider`] seams.

pub mod config;
pub mod envfile;
pub mod error;
pub mod identity;
pub mod mapping;
pub mod reconcile;
pub mod registry;
pub mod run;
pub mod summary;
