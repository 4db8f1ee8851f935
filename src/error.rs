//! Error types for the filebrowse library.

use thiserror::Error;

/// Main error type for filebrowse operations.
///
/// Network-facing variants carry the target path and the HTTP status when a
/// response was received. Credentials and session tokens never appear in
/// error messages.
#[derive(Error, Debug)]
pub enum FbError {
    /// Login was rejected, or the login response carried no usable token.
    #[error("authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// A privileged call was attempted before `authenticate`.
    #[error("not authenticated: call authenticate() first")]
    NotAuthenticated,

    /// Generic CRUD failure reported by the server.
    #[error("{op} failed for {path} ({status}): {message}")]
    Resource {
        op: &'static str,
        path: String,
        status: u16,
        message: String,
    },

    /// The server refused to overwrite an existing resource.
    #[error("resource already exists: {path}")]
    Conflict { path: String },

    /// The server reported the resource as absent.
    #[error("resource not found: {path}")]
    NotFound { path: String },

    /// Upload session creation or offset probing failed.
    #[error("upload session init failed for {path} ({status}): {message}")]
    UploadInit {
        path: String,
        status: u16,
        message: String,
    },

    /// The transfer step finished with anything other than 204 No Content.
    #[error("upload incomplete for {path}: expected 204, got {status}")]
    UploadIncomplete { path: String, status: u16 },

    /// Share creation or lookup failed.
    #[error("share request failed for {path} ({status}): {message}")]
    Share {
        path: String,
        status: u16,
        message: String,
    },

    /// No response was received (connectivity failure, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body did not parse as the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file I/O failed while preparing an upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for filebrowse operations.
pub type Result<T> = std::result::Result<T, FbError>;
