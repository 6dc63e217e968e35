//! Fakes shared by the use case and session tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use fv_core::ports::{
    ClockPort, FileStoreError, FileStorePort, IdentityResolverPort, PayloadSourcePort,
    UploadProgressPort,
};
use fv_core::{FileId, FileRecord, Identity, LoginCode, PartitionKey, UploadProgress};

mockall::mock! {
    pub IdentityResolver {}

    impl IdentityResolverPort for IdentityResolver {
        fn resolve(&self, code: &LoginCode) -> Option<Identity>;
    }
}

#[derive(Default)]
struct StoreState {
    records: Vec<FileRecord>,
    fail_create: HashSet<String>,
    create_calls: usize,
    unavailable: bool,
    lose_on_delete: bool,
}

/// Vec-backed store. `list_by_partition` returns newest first so callers
/// cannot rely on insertion order.
#[derive(Default)]
pub struct InMemoryFileStore {
    state: Mutex<StoreState>,
}

impl InMemoryFileStore {
    pub fn records(&self) -> Vec<FileRecord> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    pub fn insert(&self, record: FileRecord) {
        self.state.lock().unwrap().records.push(record);
    }

    /// `create` fails with `StorageWriteFailed` for records named `name`.
    pub fn fail_create_for(&self, name: &str) {
        self.state.lock().unwrap().fail_create.insert(name.to_string());
    }

    /// Every call fails with `StorageUnavailable`.
    pub fn set_unavailable(&self) {
        self.state.lock().unwrap().unavailable = true;
    }

    /// `delete_by_id` drops the record and reports `NotFound`, as if another
    /// writer removed it between lookup and delete.
    pub fn lose_records_on_delete(&self) {
        self.state.lock().unwrap().lose_on_delete = true;
    }

    fn check_available(state: &StoreState) -> Result<(), FileStoreError> {
        if state.unavailable {
            return Err(FileStoreError::StorageUnavailable("store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl FileStorePort for InMemoryFileStore {
    async fn create(&self, record: &FileRecord) -> Result<(), FileStoreError> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;
        Self::check_available(&state)?;

        if state.fail_create.contains(&record.name) {
            return Err(FileStoreError::StorageWriteFailed("disk full".into()));
        }
        if state.records.iter().any(|r| r.id == record.id) {
            return Err(FileStoreError::DuplicateId(record.id.clone()));
        }
        state.records.push(record.clone());
        Ok(())
    }

    async fn list_by_partition(
        &self,
        partition_key: &PartitionKey,
    ) -> Result<Vec<FileRecord>, FileStoreError> {
        let state = self.state.lock().unwrap();
        Self::check_available(&state)?;

        Ok(state
            .records
            .iter()
            .rev()
            .filter(|r| &r.partition_key == partition_key)
            .cloned()
            .collect())
    }

    async fn find_by_partition_and_name(
        &self,
        partition_key: &PartitionKey,
        name: &str,
    ) -> Result<FileRecord, FileStoreError> {
        let state = self.state.lock().unwrap();
        Self::check_available(&state)?;

        // Later inserts win ties on created_at.
        state
            .records
            .iter()
            .filter(|r| &r.partition_key == partition_key && r.name == name)
            .fold(None::<&FileRecord>, |best, r| match best {
                Some(b) if b.created_at > r.created_at => Some(b),
                _ => Some(r),
            })
            .cloned()
            .ok_or_else(|| FileStoreError::NotFound(name.to_string()))
    }

    async fn find_by_partition_and_id(
        &self,
        partition_key: &PartitionKey,
        id: &FileId,
    ) -> Result<FileRecord, FileStoreError> {
        let state = self.state.lock().unwrap();
        Self::check_available(&state)?;

        state
            .records
            .iter()
            .find(|r| &r.partition_key == partition_key && &r.id == id)
            .cloned()
            .ok_or_else(|| FileStoreError::NotFound(id.to_string()))
    }

    async fn delete_by_id(&self, id: &FileId) -> Result<(), FileStoreError> {
        let mut state = self.state.lock().unwrap();
        Self::check_available(&state)?;

        let before = state.records.len();
        state.records.retain(|r| &r.id != id);
        if state.lose_on_delete || state.records.len() == before {
            return Err(FileStoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Starts at a fixed instant and advances one second per reading.
pub struct FixedClock {
    next_ms: AtomicI64,
}

impl FixedClock {
    pub fn starting_at(ms: i64) -> Self {
        Self {
            next_ms: AtomicI64::new(ms),
        }
    }
}

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.next_ms.fetch_add(1_000, Ordering::SeqCst)
    }
}

pub struct FailingPayload;

#[async_trait]
impl PayloadSourcePort for FailingPayload {
    async fn read_all(&self) -> anyhow::Result<Vec<u8>> {
        anyhow::bail!("permission denied")
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<UploadProgress>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<UploadProgress> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl UploadProgressPort for RecordingProgress {
    async fn emit_progress(&self, progress: UploadProgress) {
        self.events.lock().unwrap().push(progress);
    }
}
