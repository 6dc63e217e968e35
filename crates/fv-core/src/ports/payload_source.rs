use anyhow::Result;
use async_trait::async_trait;

/// Where an upload's bytes come from. Reading is a suspension point and may
/// fail (missing file, permission denied, ...).
#[async_trait]
pub trait PayloadSourcePort: Send + Sync {
    async fn read_all(&self) -> Result<Vec<u8>>;
}

/// Bytes already in memory.
#[derive(Debug, Clone)]
pub struct InMemoryPayload(Vec<u8>);

impl InMemoryPayload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

#[async_trait]
impl PayloadSourcePort for InMemoryPayload {
    async fn read_all(&self) -> Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_payload_returns_bytes() {
        let source = InMemoryPayload::new(vec![0x61, 0x62, 0x63]);
        assert_eq!(source.read_all().await.unwrap(), b"abc".to_vec());
        // Reading twice yields the same bytes
        assert_eq!(source.read_all().await.unwrap(), b"abc".to_vec());
    }
}
