//! # filebrowse
//!
//! Rust client library for the File Browser HTTP API.
//!
//! ## Features
//!
//! - **Authentication**: login with username/password; the ambiguous login
//!   response (raw token or wrapped object) is normalized into a typed
//!   [`Session`] at one boundary.
//! - **Resource operations**: create folders (no-overwrite), delete, rename,
//!   fetch details, and list folder contents.
//! - **Resumable uploads**: tus-style protocol with a mandatory offset probe,
//!   so interrupted transfers resume from the server-confirmed byte, never
//!   from an assumed zero.
//! - **Share links**: issue public share and direct-download URLs for
//!   uploaded files.
//!
//! All privileged operations require authentication first and fail fast with
//! [`FbError::NotAuthenticated`] (no network call) otherwise. No operation
//! retries internally; retry and resume policy belongs to the caller, built
//! on the idempotent primitives (offset re-probe, idempotent delete and
//! ensure-share, fresh descriptor fetches).
//!
//! ## Example
//!
//! ```no_run
//! use filebrowse::Client;
//!
//! # async fn example() -> filebrowse::Result<()> {
//! let mut client = Client::new("https://files.example.com");
//! client.authenticate("admin", "password").await?;
//!
//! let folder = client.resources().create_folder("/reports").await?;
//! println!("created {}", folder.path);
//!
//! let uploaded = client.uploads().upload_file("report.pdf", "/reports").await?;
//! if let Some(share) = client.shares().get_sharable_link(&uploaded.path).await? {
//!     println!("download: {}", share.download_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod fs;
pub mod http;
pub mod path;
pub mod session;
pub mod share;

// Re-export commonly used types
pub use client::{Client, UploadReport};
pub use error::{FbError, Result};
pub use fs::{ResourceClient, ResourceDescriptor, ResourceKind, UploadEngine, UploadSession};
pub use session::Session;
pub use share::{ShareDescriptor, ShareLinkIssuer};
