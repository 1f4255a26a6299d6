//! vidlist
//!
//! In-memory state behind a scrollable list of videos: ordering, pagination
//! sentinel, drag-reorder, swipe-dismiss with undo, and favorite membership
//! reconciled against an injected backing store. Rendering lives in the host;
//! the list only emits [`store::ListChange`] events.

pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod source;
pub mod store;
