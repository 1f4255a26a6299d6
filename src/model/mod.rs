//! Domain model types.

pub mod error;
pub mod identifiers;
pub mod record;

pub use error::{AppError, ListError, RecordError, StoreError};
pub use identifiers::{InvalidVideoId, VideoId};
pub use record::VideoRecord;
