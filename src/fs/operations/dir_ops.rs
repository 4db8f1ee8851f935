//! Folder and file mutation operations.

use reqwest::{Method, StatusCode};
use tracing::{debug, warn};

use super::ResourceClient;
use crate::error::{FbError, Result};
use crate::fs::resource::ResourceDescriptor;
use crate::http::status_and_message;
use crate::path;

impl ResourceClient<'_> {
    /// Create a folder, refusing to overwrite existing content, then confirm
    /// creation by re-fetching the canonical descriptor.
    pub async fn create_folder(&self, remote_path: &str) -> Result<ResourceDescriptor> {
        let normalized = path::normalize(remote_path);
        let url = format!(
            "{}/api/resources{}?override=false",
            self.client.base_url(),
            path::encode_dir(&normalized)
        );

        debug!(path = %normalized, "creating folder");
        let response = self
            .client
            .authed_request(Method::POST, &url)?
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            return Err(FbError::Conflict { path: normalized });
        }
        if !response.status().is_success() {
            let (status, message) = status_and_message(response).await;
            warn!(path = %normalized, status, "folder creation rejected");
            return Err(FbError::Resource {
                op: "create_folder",
                path: normalized,
                status,
                message,
            });
        }

        // The server is authoritative for the canonical metadata.
        self.get_details(&normalized).await
    }

    /// Delete a folder.
    ///
    /// The server's status is surfaced verbatim, including "not found"; a
    /// caller may treat that case as already satisfied, but this client
    /// never swallows it.
    pub async fn delete_folder(&self, remote_path: &str) -> Result<bool> {
        let normalized = path::normalize(remote_path);
        let url = format!(
            "{}/api/resources{}",
            self.client.base_url(),
            path::encode_dir(&normalized)
        );

        debug!(path = %normalized, "deleting folder");
        let response = self
            .client
            .authed_request(Method::DELETE, &url)?
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, message) = status_and_message(response).await;
            return Err(FbError::Resource {
                op: "delete_folder",
                path: normalized,
                status,
                message,
            });
        }
        Ok(true)
    }

    /// Rename a file within `folder`, returning the destination's
    /// re-fetched descriptor.
    ///
    /// The rename endpoint's response body is empty on some server versions,
    /// so the canonical metadata comes from a follow-up fetch.
    pub async fn rename_file(
        &self,
        folder: &str,
        name: &str,
        new_name: &str,
    ) -> Result<ResourceDescriptor> {
        let source = path::normalize(&format!("{}/{}", folder, name));
        let url = format!(
            "{}/api/resources{}?action=rename&destination={}",
            self.client.base_url(),
            path::encode_path(&source),
            path::encode_segment(new_name)
        );

        debug!(from = %source, to = %new_name, "renaming");
        let response = self
            .client
            .authed_request(Method::PATCH, &url)?
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, message) = status_and_message(response).await;
            warn!(from = %source, status, "rename rejected");
            return Err(FbError::Resource {
                op: "rename_file",
                path: source,
                status,
                message,
            });
        }

        let destination = path::normalize(&format!("{}/{}", folder, new_name));
        self.get_details(&destination).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::Client;
    use crate::error::FbError;
    use crate::fs::resource::ResourceKind;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn logged_in_client(server: &MockServer) -> Client {
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("tok123"))
            .mount(server)
            .await;
        let mut client = Client::new(server.uri());
        client.authenticate("admin", "pw").await.expect("login");
        client
    }

    #[tokio::test]
    async fn test_create_folder_confirms_by_refetch() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/resources/reports/"))
            .and(query_param("override", "false"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/resources/reports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "reports",
                "path": "/reports",
                "isDir": true,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let descriptor = client
            .resources()
            .create_folder("/reports")
            .await
            .expect("create");
        assert_eq!(descriptor.kind(), ResourceKind::Folder);
        assert_eq!(descriptor.path, "/reports");
    }

    #[tokio::test]
    async fn test_root_path_does_not_double_the_slash() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        // "//" would be a different path; the root must stay a single slash.
        Mock::given(method("POST"))
            .and(path("/api/resources/"))
            .and(query_param("override", "false"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/resources/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "",
                "path": "/",
                "isDir": true,
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/resources/"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let descriptor = client.resources().create_folder("/").await.expect("create");
        assert_eq!(descriptor.path, "/");
        assert!(client.resources().delete_folder("/").await.expect("ok"));
    }

    #[tokio::test]
    async fn test_create_folder_conflict() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/resources/reports/"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let err = client
            .resources()
            .create_folder("/reports")
            .await
            .expect_err("existing path must conflict");
        assert!(matches!(err, FbError::Conflict { path } if path == "/reports"));
    }

    #[tokio::test]
    async fn test_delete_folder_surfaces_server_status() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/api/resources/old/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/resources/gone/"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        assert!(client.resources().delete_folder("/old").await.expect("ok"));

        let err = client
            .resources()
            .delete_folder("/gone")
            .await
            .expect_err("status surfaced verbatim");
        match err {
            FbError::Resource { op, status, .. } => {
                assert_eq!(op, "delete_folder");
                assert_eq!(status, 404);
            }
            other => panic!("expected Resource error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rename_file_refetches_destination() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("PATCH"))
            .and(path("/api/resources/docs/old.txt"))
            .and(query_param("action", "rename"))
            .and(query_param("destination", "new.txt"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/resources/docs/new.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "new.txt",
                "path": "/docs/new.txt",
                "size": 12,
                "isDir": false,
            })))
            .mount(&server)
            .await;

        let descriptor = client
            .resources()
            .rename_file("/docs", "old.txt", "new.txt")
            .await
            .expect("rename");
        assert_eq!(descriptor.name, "new.txt");
        assert_eq!(descriptor.path, "/docs/new.txt");
    }

    #[tokio::test]
    async fn test_rename_missing_source_is_resource_error() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("PATCH"))
            .and(path("/api/resources/docs/ghost.txt"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "resource does not exist",
            })))
            .mount(&server)
            .await;

        let err = client
            .resources()
            .rename_file("/docs", "ghost.txt", "new.txt")
            .await
            .expect_err("missing source");
        match err {
            FbError::Resource {
                op,
                path,
                status,
                message,
            } => {
                assert_eq!(op, "rename_file");
                assert_eq!(path, "/docs/ghost.txt");
                assert_eq!(status, 404);
                assert_eq!(message, "resource does not exist");
            }
            other => panic!("expected Resource error, got {:?}", other),
        }
    }
}
