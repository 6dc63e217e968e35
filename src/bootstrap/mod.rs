pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config_path};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{build_runtime, VaultRuntime, WiringError};
