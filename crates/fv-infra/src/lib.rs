pub mod config;
pub mod db;
pub mod fs;
pub mod identity;
pub mod time;

pub use db::repositories::DieselFileStore;
pub use identity::StaticIdentityResolver;
pub use time::SystemClock;
