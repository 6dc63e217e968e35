use crate::identity::{Identity, LoginCode};

/// Maps a login code to an identity. A pure, synchronous lookup; where the
/// table comes from is up to the implementation.
pub trait IdentityResolverPort: Send + Sync {
    fn resolve(&self, code: &LoginCode) -> Option<Identity>;
}
