//! Per-attempt upload session state.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::path;

/// State record for one resumable upload attempt.
///
/// The offset only ever advances to values the server has confirmed: the
/// probe step reports it, and a 204 transfer acknowledgement implies the
/// rest. It is never assumed client-side.
#[derive(Debug, Clone)]
pub struct UploadSession {
    /// Destination folder (normalized remote path).
    pub folder: String,
    /// Remote file name inside `folder`.
    pub file_name: String,
    /// Total size of the local source in bytes.
    pub total_size: u64,
    /// Bytes the server has confirmed holding.
    pub offset: u64,
}

impl UploadSession {
    /// Create a fresh session record with an unknown (zero) offset.
    pub fn new(folder: &str, file_name: &str, total_size: u64) -> Self {
        Self {
            folder: path::normalize(folder),
            file_name: file_name.to_string(),
            total_size,
            offset: 0,
        }
    }

    /// Full remote path of the upload target.
    pub fn target_path(&self) -> String {
        path::normalize(&format!("{}/{}", self.folder, self.file_name))
    }

    /// Bytes still to transfer.
    pub fn remaining(&self) -> u64 {
        self.total_size.saturating_sub(self.offset)
    }

    /// Whether the server already holds the whole file.
    pub fn is_complete(&self) -> bool {
        self.offset >= self.total_size
    }
}

/// Disambiguate a local file name for upload by suffixing a millisecond
/// timestamp, so the server's no-overwrite policy cannot collide with an
/// earlier upload of the same name.
pub fn disambiguated_name(file_name: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{}_{}", file_name, millis)
}
