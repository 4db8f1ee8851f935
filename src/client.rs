//! Top-level client: the shared transport plus the session gate.

use std::path::Path;
use std::time::Duration;

use reqwest::{Method, RequestBuilder};

use crate::error::{FbError, Result};
use crate::fs::operations::{ResourceClient, UploadEngine};
use crate::fs::resource::ResourceDescriptor;
use crate::http::HttpClient;
use crate::session::Session;
use crate::share::{ShareDescriptor, ShareLinkIssuer};

/// Client for one File Browser server.
///
/// Holds the HTTP transport and, after [`authenticate`](Self::authenticate),
/// the session shared by every component. Nothing else is cached
/// client-side; all metadata is fetched fresh from the server.
///
/// Independent clients (and thus sessions) can coexist; operations on
/// distinct remote paths may run concurrently, but uploads targeting the
/// same remote name must be serialized by the caller.
#[derive(Debug)]
pub struct Client {
    http: HttpClient,
    base_url: String,
    session: Option<Session>,
}

impl Client {
    /// Create an unauthenticated client for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: trim_base(base_url.into()),
            session: None,
        }
    }

    /// Create a client with a custom per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: HttpClient::with_timeout(timeout),
            base_url: trim_base(base_url.into()),
            session: None,
        }
    }

    /// Log in and store the resulting session.
    ///
    /// On failure the previous session (if any) is left untouched.
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<&Session> {
        let session = Session::authenticate(&self.http, &self.base_url, username, password).await?;
        Ok(self.session.insert(session))
    }

    /// The current session, if authenticated.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Server base URL this client talks to (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Precondition gate for privileged operations.
    ///
    /// Runs before any authenticated request is constructed, so a network
    /// call is never attempted without a token.
    pub(crate) fn require_session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(FbError::NotAuthenticated)
    }

    /// Build an authenticated request carrying the session token.
    pub(crate) fn authed_request(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        let session = self.require_session()?;
        Ok(self
            .http
            .request(method, url)
            .header("accept", "*/*")
            .header("x-auth", session.token()))
    }

    /// Folder and file CRUD operations.
    pub fn resources(&self) -> ResourceClient<'_> {
        ResourceClient::new(self)
    }

    /// The resumable upload engine.
    pub fn uploads(&self) -> UploadEngine<'_> {
        UploadEngine::new(self)
    }

    /// Public share-link issuance.
    pub fn shares(&self) -> ShareLinkIssuer<'_> {
        ShareLinkIssuer::new(self)
    }

    /// Upload a local file into `folder`, then request a share link for it.
    ///
    /// Convenience wrapper over [`UploadEngine::upload_file`] and
    /// [`ShareLinkIssuer::get_sharable_link`], returning both results in one
    /// report.
    pub async fn upload_and_share(
        &self,
        local_path: impl AsRef<Path>,
        folder: &str,
    ) -> Result<UploadReport> {
        let descriptor = self.uploads().upload_file(local_path, folder).await?;
        let share = self.shares().get_sharable_link(&descriptor.path).await?;
        Ok(UploadReport {
            full_path: format!("{}/files{}", self.base_url, descriptor.path),
            descriptor,
            share,
        })
    }
}

/// Everything reported for a finished upload-and-share round trip.
#[derive(Debug, Clone)]
pub struct UploadReport {
    /// Canonical server-side metadata for the uploaded file.
    pub descriptor: ResourceDescriptor,
    /// Browsable URL of the file in the web UI.
    pub full_path: String,
    /// Public share links, when the server issued a share record.
    pub share: Option<ShareDescriptor>,
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
