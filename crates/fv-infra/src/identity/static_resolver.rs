use std::collections::HashMap;

use fv_core::config::IdentityEntry;
use fv_core::identity::LoginCodeError;
use fv_core::ids::InvalidPartitionKey;
use fv_core::ports::IdentityResolverPort;
use fv_core::{Identity, LoginCode, PartitionKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityTableError {
    #[error("identity #{index}: invalid login code: {source}")]
    InvalidCode {
        index: usize,
        #[source]
        source: LoginCodeError,
    },

    #[error("identity #{index}: {source}")]
    InvalidPartitionKey {
        index: usize,
        #[source]
        source: InvalidPartitionKey,
    },

    #[error("identity #{index}: login code is already assigned")]
    DuplicateCode { index: usize },
}

/// Fixed code -> identity table, built once and never mutated.
#[derive(Debug, Default)]
pub struct StaticIdentityResolver {
    table: HashMap<LoginCode, Identity>,
}

impl StaticIdentityResolver {
    /// Build the table from configuration rows. Every row is validated up
    /// front so a bad table fails at startup rather than at login.
    pub fn from_entries(entries: &[IdentityEntry]) -> Result<Self, IdentityTableError> {
        let mut table = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let code = LoginCode::parse(&entry.code)
                .map_err(|source| IdentityTableError::InvalidCode { index, source })?;
            let partition_key = PartitionKey::new(entry.partition_key.clone())
                .map_err(|source| IdentityTableError::InvalidPartitionKey { index, source })?;

            if table.contains_key(&code) {
                return Err(IdentityTableError::DuplicateCode { index });
            }
            table.insert(code, Identity::new(entry.display_name.clone(), partition_key));
        }

        Ok(Self { table })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl IdentityResolverPort for StaticIdentityResolver {
    fn resolve(&self, code: &LoginCode) -> Option<Identity> {
        self.table.get(code).cloned()
    }
}
