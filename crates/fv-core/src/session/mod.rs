use crate::identity::Identity;
use crate::ids::PartitionKey;

/// Session state machine.
///
/// `LoggedOut -> LoggedIn` only through a successful login,
/// `LoggedIn -> LoggedOut` through logout, unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::LoggedIn(identity) => Some(identity),
            SessionState::LoggedOut => None,
        }
    }

    pub fn partition_key(&self) -> Option<&PartitionKey> {
        self.identity().map(|identity| &identity.partition_key)
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }
}
