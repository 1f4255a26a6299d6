//! Video record as delivered by search results, favorites and history.

use super::VideoId;
use serde::Deserialize;

/// A single video row's data.
///
/// Immutable once constructed. The JSON shape uses camelCase keys:
///
/// ```json
/// {"id": "abc", "title": "T", "thumbnailUrl": "https://…", "duration": "3:21", "viewCount": "12,345 views"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    id: VideoId,
    title: String,
    thumbnail_url: String,
    duration: String,
    #[serde(rename = "viewCount")]
    view_count_raw: String,
}

impl VideoRecord {
    pub fn new(
        id: VideoId,
        title: impl Into<String>,
        thumbnail_url: impl Into<String>,
        duration: impl Into<String>,
        view_count_raw: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            thumbnail_url: thumbnail_url.into(),
            duration: duration.into(),
            view_count_raw: view_count_raw.into(),
        }
    }

    pub fn id(&self) -> &VideoId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    /// Display string, already formatted upstream (e.g. "3:21").
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Comma-grouped count with unit word, e.g. "12,345 views".
    pub fn view_count_raw(&self) -> &str {
        &self.view_count_raw
    }
}
