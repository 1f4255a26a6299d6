//! Share and download payloads for a row's action buttons.
//!
//! Launching the share sheet or the download screen belongs to the host; this
//! module only builds what gets handed to it.

use crate::model::{VideoId, VideoRecord};

/// Default prefix turning a video id into a watch URL.
pub const DEFAULT_LINK_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Payload for a plain-text share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Share subject, normally the application name.
    pub subject: String,
    /// `"<title> <prefix><id>"`.
    pub text: String,
}

/// Watch URL for `id`.
pub fn video_url(id: &VideoId, prefix: &str) -> String {
    format!("{prefix}{id}")
}

/// Build the share payload for a record.
pub fn share_request(record: &VideoRecord, prefix: &str, app_name: &str) -> ShareRequest {
    ShareRequest {
        subject: app_name.to_string(),
        text: format!("{} {}", record.title(), video_url(record.id(), prefix)),
    }
}

/// URL handed to the download screen.
pub fn download_url(id: &VideoId, prefix: &str) -> String {
    video_url(id, prefix)
}
