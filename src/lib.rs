//! File Vault
//!
//! Assembles the storage engine, identity table and session controller from
//! the workspace crates. Start with [`bootstrap::load_config`], then
//! [`bootstrap::init_tracing_subscriber`], then [`bootstrap::build_runtime`].

pub mod bootstrap;

pub use bootstrap::VaultRuntime;
