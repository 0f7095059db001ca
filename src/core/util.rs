//! Common utilities

use std::path::Path;
use std::time::SystemTime;

use crate::core::model::Meta;

/// Get file modification time in milliseconds since epoch
pub fn get_mtime_ms(path: &Path) -> std::io::Result<i64> {
    let metadata = std::fs::metadata(path)?;
    let mtime = metadata.modified()?;
    let duration = mtime
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    Ok(duration.as_millis() as i64)
}

/// Get file size in bytes
pub fn get_file_size(path: &Path) -> std::io::Result<u64> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.len())
}

/// Best-effort metadata for output; unreadable fields stay empty
pub fn file_meta(path: &Path) -> Meta {
    Meta {
        size: get_file_size(path).ok(),
        mtime_ms: get_mtime_ms(path).ok(),
    }
}
