use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("partition key must not be empty")]
pub struct InvalidPartitionKey;

/// Namespace that isolates one user's files from everyone else's.
///
/// Only constructible through [`PartitionKey::new`], so an empty key can never
/// reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartitionKey(String);

impl PartitionKey {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidPartitionKey> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(InvalidPartitionKey);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PartitionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PartitionKey {
    type Error = InvalidPartitionKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartitionKey> for String {
    fn from(key: PartitionKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_blank_keys() {
        assert_eq!(PartitionKey::new(""), Err(InvalidPartitionKey));
        assert_eq!(PartitionKey::new("   "), Err(InvalidPartitionKey));
    }

    #[test]
    fn test_accepts_non_empty_key() {
        let key = PartitionKey::new("1234").unwrap();
        assert_eq!(key.as_str(), "1234");
    }

    #[test]
    fn test_deserialize_validates() {
        #[derive(Deserialize)]
        struct Holder {
            key: PartitionKey,
        }

        let ok: Holder = toml::from_str(r#"key = "alice""#).unwrap();
        assert_eq!(ok.key.as_str(), "alice");

        let err = toml::from_str::<Holder>(r#"key = """#);
        assert!(err.is_err());
    }
}
