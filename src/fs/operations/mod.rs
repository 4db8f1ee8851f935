//! Authenticated operations against the resource hierarchy.

mod browse;
mod dir_ops;
mod upload;

pub use upload::UploadEngine;

use crate::client::Client;

/// Authenticated CRUD operations on the remote folder/file tree.
///
/// Borrowed from a [`Client`]; holds no state of its own beyond the shared
/// session and transport. Every operation checks the session before
/// constructing a request.
#[derive(Debug)]
pub struct ResourceClient<'a> {
    pub(crate) client: &'a Client,
}

impl<'a> ResourceClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
}
