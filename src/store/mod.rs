//! Video list state (pure, no rendering).
//!
//! The host calls [`VideoListStore`] operations from a single thread and
//! re-renders rows from the [`ListChange`] events it receives.

pub mod change;
pub mod favorites;
pub mod list;
pub mod row;

// Re-export for convenience
pub use change::{ChangeListener, ListChange};
pub use favorites::{FavoritesStore, InMemoryFavorites, StoreWrite};
pub use list::{Dismissed, RowKind, VideoListStore, LOADER_ROW_KEY};
pub use row::{bind_all, bind_row, RowView, VideoRow};
