//! Read-only resource fetches.

use reqwest::{Method, StatusCode};
use tracing::debug;

use super::ResourceClient;
use crate::error::{FbError, Result};
use crate::fs::resource::ResourceDescriptor;
use crate::http::status_and_message;
use crate::path;

impl ResourceClient<'_> {
    /// Fetch the descriptor for a file or folder.
    pub async fn get_details(&self, remote_path: &str) -> Result<ResourceDescriptor> {
        let normalized = path::normalize(remote_path);
        let url = format!(
            "{}/api/resources{}",
            self.client.base_url(),
            path::encode_path(&normalized)
        );

        debug!(path = %normalized, "fetching resource details");
        let response = self.client.authed_request(Method::GET, &url)?.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FbError::NotFound { path: normalized });
        }
        if !response.status().is_success() {
            let (status, message) = status_and_message(response).await;
            return Err(FbError::Resource {
                op: "get_details",
                path: normalized,
                status,
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// List the children of a folder.
    pub async fn list_folder(&self, remote_path: &str) -> Result<Vec<ResourceDescriptor>> {
        let details = self.get_details(remote_path).await?;
        Ok(details.items)
    }
}
