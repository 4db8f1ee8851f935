//! Remote filesystem types and operations.

pub mod operations;
pub mod resource;
pub mod upload_session;

pub use operations::{ResourceClient, UploadEngine};
pub use resource::{ResourceDescriptor, ResourceKind};
pub use upload_session::UploadSession;
