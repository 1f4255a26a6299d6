//! Video identifier newtype with a smart constructor.
//!
//! Ids are the stable external key of a video. Row handlers capture a
//! `VideoId`, never a list position, and resolve the position at click time.

use serde::Deserialize;
use std::fmt;

/// Stable external identifier of a video (e.g. "dQw4w9WgXcQ").
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidVideoId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidVideoId::Empty);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = InvalidVideoId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

// ===== Error Types =====

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidVideoId {
    #[error("Video ID cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_accepts_youtube_style_id() {
        let id = VideoId::new("dQw4w9WgXcQ");
        assert!(id.is_ok(), "Valid video ID should be accepted");
    }

    #[test]
    fn video_id_rejects_empty_string() {
        let id = VideoId::new("");
        assert_eq!(id, Err(InvalidVideoId::Empty));
    }

    #[test]
    fn video_id_as_str_returns_original() {
        let id = VideoId::new("abc123").expect("Valid video ID");
        assert_eq!(id.as_str(), "abc123", "as_str() should return original value");
    }

    #[test]
    fn video_id_display_returns_inner_string() {
        let id = VideoId::new("abc123").expect("Valid video ID");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn video_id_deserializes_from_json_string() {
        let id: VideoId = serde_json::from_str("\"xyz\"").expect("should deserialize");
        assert_eq!(id.as_str(), "xyz");
    }

    #[test]
    fn video_id_deserialize_rejects_empty_string() {
        let result: Result<VideoId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err(), "Empty id must not deserialize");
    }
}
