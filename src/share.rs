//! Public share-link issuance.

use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::client::Client;
use crate::error::{FbError, Result};
use crate::http::status_and_message;
use crate::path;

/// Public links for one shared resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDescriptor {
    /// Browsable share page.
    pub share_url: String,
    /// Direct, unauthenticated download URL.
    pub download_url: String,
}

/// Share record as returned by `/api/share`.
#[derive(Debug, Deserialize)]
struct ShareRecord {
    hash: String,
    #[serde(default)]
    path: String,
}

/// Requests public share descriptors for completed uploads.
#[derive(Debug)]
pub struct ShareLinkIssuer<'a> {
    client: &'a Client,
}

impl<'a> ShareLinkIssuer<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
}

impl ShareLinkIssuer<'_> {
    /// Ensure a share exists for `remote_path` and return its public links.
    ///
    /// Two calls: an idempotent ensure-share GET, then a POST to materialize
    /// the record. A successful but empty reply means no share is
    /// configured; that is `Ok(None)`, not an error. Calling this twice for
    /// the same path is safe.
    pub async fn get_sharable_link(&self, remote_path: &str) -> Result<Option<ShareDescriptor>> {
        let normalized = path::normalize(remote_path);
        let url = format!(
            "{}/api/share{}",
            self.client.base_url(),
            path::encode_path(&normalized)
        );

        debug!(path = %normalized, "ensuring share exists");
        let ensure = self.client.authed_request(Method::GET, &url)?.send().await?;
        if !ensure.status().is_success() {
            let (status, message) = status_and_message(ensure).await;
            return Err(FbError::Share {
                path: normalized,
                status,
                message,
            });
        }

        let response = self
            .client
            .authed_request(Method::POST, &url)?
            .header("content-type", "application/json")
            .body("{}")
            .send()
            .await?;
        if !response.status().is_success() {
            let (status, message) = status_and_message(response).await;
            return Err(FbError::Share {
                path: normalized,
                status,
                message,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            debug!(path = %normalized, "no share configured");
            return Ok(None);
        }

        let record: ShareRecord = serde_json::from_str(&body)?;
        Ok(Some(self.compose(&record, &normalized)))
    }

    /// Compose the public URLs from the server-issued opaque hash.
    fn compose(&self, record: &ShareRecord, fallback_path: &str) -> ShareDescriptor {
        let path = if record.path.is_empty() {
            fallback_path
        } else {
            &record.path
        };
        let base = self.client.base_url();
        ShareDescriptor {
            share_url: format!("{}/share/{}", base, record.hash),
            download_url: format!("{}/api/public/dl/{}{}", base, record.hash, path),
        }
    }
}
