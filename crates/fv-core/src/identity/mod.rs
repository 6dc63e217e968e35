//! Login codes and the identities they resolve to.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use thiserror::Error;

use crate::ids::PartitionKey;

pub const LOGIN_CODE_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginCodeError {
    #[error("login code must be {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("login code must contain only ASCII digits")]
    NotNumeric,
}

/// A syntactically valid login code: exactly four ASCII digits.
///
/// `Debug` is redacted so codes never end up in logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LoginCode(String);

impl LoginCode {
    pub fn parse(raw: &str) -> Result<Self, LoginCodeError> {
        let actual = raw.chars().count();
        if actual != LOGIN_CODE_LEN {
            return Err(LoginCodeError::WrongLength {
                expected: LOGIN_CODE_LEN,
                actual,
            });
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(LoginCodeError::NotNumeric);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for LoginCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("LoginCode(****)")
    }
}

/// Who is logged in, and which partition their files live in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: String,
    pub partition_key: PartitionKey,
}

impl Identity {
    pub fn new(display_name: impl Into<String>, partition_key: PartitionKey) -> Self {
        Self {
            display_name: display_name.into(),
            partition_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_four_digits() {
        let code = LoginCode::parse("1234").unwrap();
        assert_eq!(code.as_str(), "1234");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            LoginCode::parse("123"),
            Err(LoginCodeError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            LoginCode::parse("12345"),
            Err(LoginCodeError::WrongLength { actual: 5, .. })
        ));
        assert!(LoginCode::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(LoginCode::parse("12a4"), Err(LoginCodeError::NotNumeric));
        assert_eq!(LoginCode::parse("１２３４"), Err(LoginCodeError::NotNumeric));
    }

    #[test]
    fn test_debug_is_redacted() {
        let code = LoginCode::parse("9876").unwrap();
        assert!(!format!("{:?}", code).contains("9876"));
    }
}
