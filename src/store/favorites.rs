//! Backing-store capability for persisted video lists.
//!
//! The authoritative favorites (or watch history) live outside this crate,
//! usually in a database. The list only talks to them through
//! [`FavoritesStore`], passed in per call.

use std::collections::BTreeMap;

use crate::model::{StoreError, VideoId, VideoRecord};

/// Persisted membership of videos in a named list.
pub trait FavoritesStore {
    /// Whether `id` is currently stored.
    fn exists(&self, id: &VideoId) -> bool;

    /// Store `record`. Storing an id twice is not an error.
    fn create(&mut self, record: &VideoRecord) -> Result<(), StoreError>;

    /// Remove `id`. Removing a missing id is not an error.
    fn delete(&mut self, id: &VideoId) -> Result<(), StoreError>;
}

/// A write issued against an [`InMemoryFavorites`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWrite {
    Create(VideoId),
    Delete(VideoId),
}

/// In-memory [`FavoritesStore`] used by the binary and in tests.
///
/// Records every attempted write, and can be switched into a failing mode to
/// exercise error propagation.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFavorites {
    records: BTreeMap<VideoId, VideoRecord>,
    writes: Vec<StoreWrite>,
    unavailable: Option<String>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store without logging writes.
    pub fn with_records(records: impl IntoIterator<Item = VideoRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id().clone(), record))
                .collect(),
            ..Self::default()
        }
    }

    /// Make every subsequent write fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&mut self, reason: impl Into<String>) {
        self.unavailable = Some(reason.into());
    }

    pub fn set_available(&mut self) {
        self.unavailable = None;
    }

    /// Writes attempted so far, including failed ones.
    pub fn writes(&self) -> &[StoreWrite] {
        &self.writes
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &VideoId) -> Option<&VideoRecord> {
        self.records.get(id)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        match &self.unavailable {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl FavoritesStore for InMemoryFavorites {
    fn exists(&self, id: &VideoId) -> bool {
        self.records.contains_key(id)
    }

    fn create(&mut self, record: &VideoRecord) -> Result<(), StoreError> {
        self.writes.push(StoreWrite::Create(record.id().clone()));
        self.check_available()?;
        self.records.insert(record.id().clone(), record.clone());
        Ok(())
    }

    fn delete(&mut self, id: &VideoId) -> Result<(), StoreError> {
        self.writes.push(StoreWrite::Delete(id.clone()));
        self.check_available()?;
        self.records.remove(id);
        Ok(())
    }
}
