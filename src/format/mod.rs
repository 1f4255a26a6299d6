//! Pure display formatting.

pub mod links;
pub mod view_count;

pub use links::{download_url, share_request, video_url, ShareRequest, DEFAULT_LINK_PREFIX};
pub use view_count::format_view_count;
