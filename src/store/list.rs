//! Ordered video list with an optional trailing loading sentinel.
//!
//! Invariants:
//! - at most one sentinel (`None`), and only as the last element
//! - record ids are unique within the list
//! - every mutation emits exactly one [`ListChange`]; `replace_all`, `clear`
//!   and `swap` emit [`ListChange::Reset`], the rest the minimal range
//!
//! Position-based operations ignore out-of-range positions silently.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace, warn};

use super::change::{ChangeListener, ListChange};
use super::favorites::FavoritesStore;
use crate::model::{ListError, StoreError, VideoId, VideoRecord};

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;

/// Row key reported for the loading sentinel.
pub const LOADER_ROW_KEY: u64 = u64::MAX;

/// What a row displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Video,
    Loader,
}

/// A record removed by swipe-to-dismiss, kept for undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dismissed {
    pub record: VideoRecord,
    pub position: usize,
}

/// The list state behind a scrollable video view.
pub struct VideoListStore {
    items: Vec<Option<VideoRecord>>,
    /// Ids of all non-sentinel items, for duplicate tracking.
    ids: HashSet<VideoId>,
    /// Ids seen as favorited during binding. Advisory only.
    pending_favorite_ids: HashSet<VideoId>,
    is_favorite_view: bool,
    last_dismissed: Option<Dismissed>,
    listeners: Vec<Box<dyn ChangeListener>>,
    on_load_more: Option<Box<dyn FnMut()>>,
    on_item_click: Option<Box<dyn FnMut(usize, &VideoId)>>,
}

impl VideoListStore {
    /// Create an empty list.
    ///
    /// With `is_favorite_view`, un-favoriting a row also drops it from the list.
    pub fn new(is_favorite_view: bool) -> Self {
        Self {
            items: Vec::new(),
            ids: HashSet::new(),
            pending_favorite_ids: HashSet::new(),
            is_favorite_view,
            last_dismissed: None,
            listeners: Vec::new(),
            on_load_more: None,
            on_item_click: None,
        }
    }

    /// Create a list holding `records`. No change is emitted.
    pub fn with_records(
        records: impl IntoIterator<Item = VideoRecord>,
        is_favorite_view: bool,
    ) -> Self {
        let mut store = Self::new(is_favorite_view);
        store.push_unique(records);
        store
    }

    /// Register a change observer.
    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn is_favorite_view(&self) -> bool {
        self.is_favorite_view
    }

    // ===== Queries =====

    /// Number of rows, sentinel included.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record at `position`, or `None` when out of range or at the sentinel.
    pub fn item_at(&self, position: usize) -> Option<&VideoRecord> {
        self.items.get(position).and_then(Option::as_ref)
    }

    /// Iterate over all records in order, skipping the sentinel.
    pub fn records(&self) -> impl Iterator<Item = &VideoRecord> {
        self.items.iter().flatten()
    }

    pub fn row_kind(&self, position: usize) -> Option<RowKind> {
        self.items.get(position).map(|item| match item {
            Some(_) => RowKind::Video,
            None => RowKind::Loader,
        })
    }

    /// Key for the row at `position`, derived from the record id.
    ///
    /// Stable within a process only: the hash algorithm may change between
    /// Rust releases, so never persist these keys.
    pub fn item_key(&self, position: usize) -> Option<u64> {
        let item = self.items.get(position)?;
        Some(match item {
            Some(record) => {
                let mut hasher = DefaultHasher::new();
                record.id().hash(&mut hasher);
                hasher.finish()
            }
            None => LOADER_ROW_KEY,
        })
    }

    /// Current position of `id`. Row handlers resolve positions here at click
    /// time instead of capturing them at bind time.
    pub fn position_of(&self, id: &VideoId) -> Option<usize> {
        if !self.ids.contains(id) {
            return None;
        }
        self.items
            .iter()
            .position(|item| item.as_ref().is_some_and(|record| record.id() == id))
    }

    pub fn contains(&self, id: &VideoId) -> bool {
        self.ids.contains(id)
    }

    /// Whether the trailing loading sentinel is present.
    pub fn is_loading(&self) -> bool {
        matches!(self.items.last(), Some(None))
    }

    pub fn is_pending_favorite(&self, id: &VideoId) -> bool {
        self.pending_favorite_ids.contains(id)
    }

    pub fn pending_favorites(&self) -> impl Iterator<Item = &VideoId> {
        self.pending_favorite_ids.iter()
    }

    pub fn last_dismissed(&self) -> Option<&Dismissed> {
        self.last_dismissed.as_ref()
    }

    // ===== Bulk mutation =====

    /// Replace the whole list. Emits [`ListChange::Reset`].
    ///
    /// Pending favorites are left alone; the next bind pass reconciles them.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = VideoRecord>) {
        self.items.clear();
        self.ids.clear();
        self.last_dismissed = None;
        let added = self.push_unique(records);
        debug!(count = added, "Replaced video list");
        self.emit(ListChange::Reset);
    }

    /// Empty the list. Emits [`ListChange::Reset`].
    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
        self.last_dismissed = None;
        debug!("Cleared video list");
        self.emit(ListChange::Reset);
    }

    /// Append a page of records, keeping any sentinel last.
    ///
    /// Emits `InsertRange` over the appended span, nothing when every record
    /// was a duplicate.
    pub fn append_more(&mut self, records: impl IntoIterator<Item = VideoRecord>) {
        let sentinel = self.is_loading();
        if sentinel {
            self.items.pop();
        }
        let start = self.items.len();
        let added = self.push_unique(records);
        if sentinel {
            self.items.push(None);
        }

        debug!(added, total = self.items.len(), "Appended more videos");
        if added > 0 {
            self.emit(ListChange::InsertRange {
                start,
                count: added,
            });
        }
    }

    // ===== Pagination sentinel =====

    /// Append the loading sentinel shown while the next page is fetched.
    pub fn add_loading_sentinel(&mut self) -> Result<(), ListError> {
        if self.is_loading() {
            return Err(ListError::InvalidState {
                reason: "loading sentinel already present",
            });
        }
        self.items.push(None);
        trace!(position = self.items.len() - 1, "Added loading sentinel");
        self.emit(ListChange::InsertRange {
            start: self.items.len() - 1,
            count: 1,
        });
        Ok(())
    }

    /// Remove the trailing loading sentinel.
    pub fn remove_loading_sentinel(&mut self) -> Result<(), ListError> {
        if !self.is_loading() {
            return Err(ListError::InvalidState {
                reason: "no loading sentinel at the end of the list",
            });
        }
        self.items.pop();
        trace!(position = self.items.len(), "Removed loading sentinel");
        self.emit(ListChange::RemoveAt(self.items.len()));
        Ok(())
    }

    /// Register the callback fired by [`request_load_more`](Self::request_load_more).
    pub fn set_on_load_more(&mut self, callback: impl FnMut() + 'static) {
        self.on_load_more = Some(Box::new(callback));
    }

    pub fn remove_on_load_more(&mut self) {
        self.on_load_more = None;
    }

    /// Ask the host for the next page. Returns whether a callback ran.
    pub fn request_load_more(&mut self) -> bool {
        match self.on_load_more.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Register the callback fired by [`click`](Self::click) with the row's
    /// current position and id.
    pub fn set_on_item_click(&mut self, callback: impl FnMut(usize, &VideoId) + 'static) {
        self.on_item_click = Some(Box::new(callback));
    }

    pub fn remove_on_item_click(&mut self) {
        self.on_item_click = None;
    }

    /// Report a click on the row showing `id`.
    ///
    /// The position is looked up now, so rows moved since binding report where
    /// they are. Returns whether a callback ran.
    pub fn click(&mut self, id: &VideoId) -> bool {
        let Some(position) = self.position_of(id) else {
            trace!(%id, "click on unlisted video ignored");
            return false;
        };
        match self.on_item_click.as_mut() {
            Some(callback) => {
                callback(position, id);
                true
            }
            None => false,
        }
    }

    // ===== Positional mutation =====

    /// Remove the row at `position`, returning its record.
    pub fn remove_at(&mut self, position: usize) -> Option<VideoRecord> {
        if position >= self.items.len() {
            trace!(position, len = self.items.len(), "remove_at out of range");
            return None;
        }
        let removed = self.items.remove(position);
        if let Some(record) = &removed {
            self.ids.remove(record.id());
            self.pending_favorite_ids.remove(record.id());
        }
        self.emit(ListChange::RemoveAt(position));
        removed
    }

    /// Relocate the row at `from` to `to` (drag-reorder).
    ///
    /// Other rows keep their relative order. Out-of-range positions, the
    /// sentinel position and `from == to` are ignored.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if !self.is_record_position(from) || !self.is_record_position(to) || from == to {
            trace!(from, to, "move_item ignored");
            return;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.emit(ListChange::Move { from, to });
    }

    /// Exchange two rows. Emits [`ListChange::Reset`] rather than two updates.
    pub fn swap(&mut self, position_a: usize, position_b: usize) {
        if !self.is_record_position(position_a) || !self.is_record_position(position_b) {
            trace!(position_a, position_b, "swap ignored");
            return;
        }
        self.items.swap(position_a, position_b);
        self.emit(ListChange::Reset);
    }

    // ===== Favorites =====

    /// Persist a favorite toggle for `id`.
    ///
    /// Favoriting creates the record in `favorites`. Un-favoriting deletes it,
    /// forgets the pending favorite, and in a favorites view also removes the
    /// row. A failed write leaves the list untouched.
    pub fn toggle_favorite(
        &mut self,
        id: &VideoId,
        is_now_favorite: bool,
        favorites: &mut impl FavoritesStore,
    ) -> Result<(), StoreError> {
        if is_now_favorite {
            let Some(record) = self.position_of(id).and_then(|pos| self.item_at(pos)) else {
                warn!(%id, "Cannot favorite a video that is not in the list");
                return Ok(());
            };
            favorites.create(record)?;
            debug!(%id, "Added favorite");
            return Ok(());
        }

        favorites.delete(id)?;
        self.pending_favorite_ids.remove(id);
        debug!(%id, "Removed favorite");

        if self.is_favorite_view {
            if let Some(position) = self.position_of(id) {
                self.remove_at(position);
            }
        }
        Ok(())
    }

    /// Check `favorites` for `id` and refresh the pending set.
    ///
    /// Always asks the backing store; the pending set is never trusted as an
    /// answer.
    pub fn query_favorite_state(&mut self, id: &VideoId, favorites: &impl FavoritesStore) -> bool {
        let found = favorites.exists(id);
        // Only listed rows are cached
        if found && self.ids.contains(id) {
            self.pending_favorite_ids.insert(id.clone());
        } else {
            self.pending_favorite_ids.remove(id);
        }
        found
    }

    // ===== Swipe to dismiss =====

    /// Swipe a row away: delete it from `history`, then from the list.
    ///
    /// The dismissed record replaces any earlier one as the undo target.
    pub fn dismiss(
        &mut self,
        position: usize,
        history: &mut impl FavoritesStore,
    ) -> Result<Option<VideoRecord>, StoreError> {
        let Some(record) = self.item_at(position) else {
            trace!(position, "dismiss ignored");
            return Ok(None);
        };
        history.delete(record.id())?;

        let removed = self.remove_at(position);
        if let Some(record) = &removed {
            debug!(id = %record.id(), position, "Dismissed video");
            self.last_dismissed = Some(Dismissed {
                record: record.clone(),
                position,
            });
        }
        Ok(removed)
    }

    /// Restore the last dismissed row into `history` and the list.
    ///
    /// Returns `false` when there is nothing to undo or the id is already back.
    pub fn undo_dismiss(&mut self, history: &mut impl FavoritesStore) -> Result<bool, StoreError> {
        let Some(dismissed) = self.last_dismissed.take() else {
            return Ok(false);
        };
        if self.ids.contains(dismissed.record.id()) {
            debug!(id = %dismissed.record.id(), "Undo skipped, video already listed");
            return Ok(false);
        }
        if let Err(err) = history.create(&dismissed.record) {
            self.last_dismissed = Some(dismissed);
            return Err(err);
        }

        let position = dismissed.position.min(self.record_len());
        self.ids.insert(dismissed.record.id().clone());
        self.items.insert(position, Some(dismissed.record));
        debug!(position, "Restored dismissed video");
        self.emit(ListChange::InsertRange { start: position, count: 1 });
        Ok(true)
    }

    // ===== Internals =====

    fn record_len(&self) -> usize {
        if self.is_loading() {
            self.items.len() - 1
        } else {
            self.items.len()
        }
    }

    fn is_record_position(&self, position: usize) -> bool {
        position < self.record_len()
    }

    /// Push records whose id is not yet listed. Returns how many were pushed.
    fn push_unique(&mut self, records: impl IntoIterator<Item = VideoRecord>) -> usize {
        let mut added = 0;
        for record in records {
            if !self.ids.insert(record.id().clone()) {
                warn!(id = %record.id(), "Skipping duplicate video id");
                continue;
            }
            self.items.push(Some(record));
            added += 1;
        }
        added
    }

    fn emit(&mut self, change: ListChange) {
        trace!(?change, "List changed");
        for listener in &mut self.listeners {
            listener.on_change(&change);
        }
    }
}

impl Default for VideoListStore {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for VideoListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoListStore")
            .field("items", &self.items)
            .field("pending_favorite_ids", &self.pending_favorite_ids)
            .field("is_favorite_view", &self.is_favorite_view)
            .field("last_dismissed", &self.last_dismissed)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
