mod static_resolver;

pub use static_resolver::{IdentityTableError, StaticIdentityResolver};
