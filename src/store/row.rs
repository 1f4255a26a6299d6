//! Per-row bind pass.
//!
//! Produces what a row renders and reconciles its favorite state against the
//! backing store.

use std::fmt;

use super::favorites::FavoritesStore;
use super::list::VideoListStore;
use crate::format::format_view_count;
use crate::model::VideoId;

/// Display data for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    Video(VideoRow),
    /// Progress indicator for the loading sentinel.
    Loader,
}

/// Bound video row. Actions capture `id`, never the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRow {
    pub id: VideoId,
    pub title: String,
    pub thumbnail_url: String,
    pub duration: String,
    /// Abbreviated, e.g. "1 K views".
    pub view_count: String,
    pub is_favorite: bool,
}

impl fmt::Display for RowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowView::Video(row) => {
                let mark = if row.is_favorite { '★' } else { '☆' };
                write!(
                    f,
                    "{mark} {} [{}] {}",
                    row.title, row.duration, row.view_count
                )
            }
            RowView::Loader => f.write_str("… loading"),
        }
    }
}

/// Bind the row at `position`. `None` when out of range.
pub fn bind_row(
    store: &mut VideoListStore,
    position: usize,
    favorites: &impl FavoritesStore,
) -> Option<RowView> {
    let record = match store.item_at(position) {
        Some(record) => record.clone(),
        None if position < store.count() => return Some(RowView::Loader),
        None => return None,
    };

    let is_favorite = store.query_favorite_state(record.id(), favorites);

    Some(RowView::Video(VideoRow {
        view_count: format_view_count(record.view_count_raw()),
        title: record.title().to_string(),
        thumbnail_url: record.thumbnail_url().to_string(),
        duration: record.duration().to_string(),
        is_favorite,
        id: record.id().clone(),
    }))
}

/// Bind every row in order.
pub fn bind_all(store: &mut VideoListStore, favorites: &impl FavoritesStore) -> Vec<RowView> {
    (0..store.count())
        .filter_map(|position| bind_row(store, position, favorites))
        .collect()
}
