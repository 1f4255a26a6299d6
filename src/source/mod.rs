//! Record input for the binary.
//!
//! Records arrive as one JSON array, either from a file or piped on stdin.
//! Parsing happens here, at the boundary; the store only sees typed records.

use std::io::Read;
use std::path::PathBuf;

use crate::model::{RecordError, VideoRecord};

/// Parse a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<VideoRecord>, RecordError> {
    Ok(serde_json::from_str(json)?)
}

/// Read records from `file`, or from stdin when `None`.
pub fn load_records(file: Option<PathBuf>) -> Result<Vec<VideoRecord>, RecordError> {
    let contents = match file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|source| RecordError::Read { path, source })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(RecordError::Stdin)?;
            buf
        }
    };
    parse_records(&contents)
}
