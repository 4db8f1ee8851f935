//! The resumable upload engine.
//!
//! Drives the tus-style protocol against `/api/tus`: create an upload
//! session, probe the server-confirmed offset, transfer the remaining bytes
//! in one contiguous request, and accept only an explicit 204 as completion.
//!
//! No step retries internally. A caller wanting resumable behavior re-invokes
//! the engine with the same remote name; the probe step then reports how many
//! bytes the server already holds and the transfer continues from there.

use std::path::Path;

use reqwest::{Method, StatusCode};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tracing::{debug, warn};

use crate::client::Client;
use crate::error::{FbError, Result};
use crate::fs::resource::ResourceDescriptor;
use crate::fs::upload_session::{disambiguated_name, UploadSession};
use crate::http::status_and_message;
use crate::path;

/// tus protocol version header sent on every upload call.
const TUS_VERSION: &str = "1.0.0";

/// Drives the resumable upload protocol.
///
/// Stateless between invocations: all transfer state lives server-side and
/// is rediscovered through the offset probe. Concurrent uploads to the same
/// remote name are not safe (probe and transfer are not atomic as a pair);
/// uploads to distinct names may run in parallel.
#[derive(Debug)]
pub struct UploadEngine<'a> {
    client: &'a Client,
}

impl<'a> UploadEngine<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
}

impl UploadEngine<'_> {
    /// Upload a local file into `folder` under a collision-free name.
    ///
    /// The remote name is the local name suffixed with a timestamp so the
    /// server's no-overwrite policy cannot reject it. To resume an
    /// interrupted transfer instead, reuse the name it was started under via
    /// [`upload_file_as`](Self::upload_file_as).
    pub async fn upload_file(
        &self,
        local_path: impl AsRef<Path>,
        folder: &str,
    ) -> Result<ResourceDescriptor> {
        let local = local_path.as_ref();
        let file_name = local
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                FbError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "local path has no file name",
                ))
            })?;
        self.upload_file_as(local, folder, &disambiguated_name(&file_name))
            .await
    }

    /// Upload a local file into `folder` under an explicit remote name.
    ///
    /// Re-invoking with the name of an interrupted upload resumes it from
    /// the server-confirmed offset. On success, returns the uploaded path's
    /// descriptor re-fetched from the server, which is authoritative for the
    /// final size and timestamp.
    pub async fn upload_file_as(
        &self,
        local_path: impl AsRef<Path>,
        folder: &str,
        remote_name: &str,
    ) -> Result<ResourceDescriptor> {
        // Session gate first, before any local or network I/O.
        self.client.require_session()?;

        let local = local_path.as_ref();
        let total_size = tokio::fs::metadata(local).await?.len();
        let mut session = UploadSession::new(folder, remote_name, total_size);

        // INIT -> SESSION_CREATED
        self.init_session(&session).await?;
        // SESSION_CREATED -> OFFSET_KNOWN
        session.offset = self.probe_offset(&session).await?;
        // OFFSET_KNOWN -> TRANSFERRING -> COMPLETE
        self.transfer_remaining(local, &session).await?;

        self.client
            .resources()
            .get_details(&session.target_path())
            .await
    }

    fn session_url(&self, session: &UploadSession) -> String {
        format!(
            "{}/api/tus{}/{}?override=false",
            self.client.base_url(),
            path::encode_path(&session.folder),
            path::encode_segment(&session.file_name)
        )
    }

    /// Step 1: create the upload session server-side (empty-body POST).
    /// Not retried; a failure here requires a fresh session.
    async fn init_session(&self, session: &UploadSession) -> Result<()> {
        let url = self.session_url(session);
        debug!(
            path = %session.target_path(),
            size = session.total_size,
            "initiating upload session"
        );

        let response = self
            .client
            .authed_request(Method::POST, &url)?
            .header("tus-resumable", TUS_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, message) = status_and_message(response).await;
            warn!(path = %session.target_path(), status, "upload session init rejected");
            return Err(FbError::UploadInit {
                path: session.target_path(),
                status,
                message,
            });
        }
        Ok(())
    }

    /// Step 2: ask the server how many bytes it already holds.
    ///
    /// The reported `upload-offset` header is ground truth; resuming never
    /// assumes zero, and a missing header is an error rather than a silent
    /// fresh start. An offset beyond the local size means the session was
    /// started from a different source and is rejected.
    async fn probe_offset(&self, session: &UploadSession) -> Result<u64> {
        let url = self.session_url(session);
        let response = self
            .client
            .authed_request(Method::HEAD, &url)?
            .header("tus-resumable", TUS_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, message) = status_and_message(response).await;
            return Err(FbError::UploadInit {
                path: session.target_path(),
                status,
                message,
            });
        }

        let offset = response
            .headers()
            .get("upload-offset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .ok_or_else(|| FbError::UploadInit {
                path: session.target_path(),
                status: response.status().as_u16(),
                message: "probe response carried no upload-offset header".to_string(),
            })?;

        if offset > session.total_size {
            warn!(
                path = %session.target_path(),
                offset,
                size = session.total_size,
                "server holds more bytes than the local file"
            );
            return Err(FbError::UploadInit {
                path: session.target_path(),
                status: response.status().as_u16(),
                message: format!(
                    "server-confirmed offset {} exceeds local file size {}",
                    offset, session.total_size
                ),
            });
        }

        debug!(path = %session.target_path(), offset, "server-confirmed offset");
        Ok(offset)
    }

    /// Steps 3 and 4: send the remaining bytes in one contiguous PATCH and
    /// require the server's explicit 204 acknowledgement.
    async fn transfer_remaining(&self, local: &Path, session: &UploadSession) -> Result<()> {
        if session.is_complete() {
            // The probe confirmed the server already holds every byte.
            debug!(path = %session.target_path(), "nothing left to transfer");
            return Ok(());
        }

        let mut file = tokio::fs::File::open(local).await?;
        if session.offset > 0 {
            file.seek(std::io::SeekFrom::Start(session.offset)).await?;
        }
        let mut buffer = Vec::with_capacity(session.remaining() as usize);
        file.read_to_end(&mut buffer).await?;

        let url = self.session_url(session);
        debug!(
            path = %session.target_path(),
            offset = session.offset,
            bytes = buffer.len(),
            "transferring remaining bytes"
        );

        let byte_count = buffer.len();
        let response = self
            .client
            .authed_request(Method::PATCH, &url)?
            .header("tus-resumable", TUS_VERSION)
            .header("upload-offset", session.offset.to_string())
            .header("content-type", "application/offset+octet-stream")
            .header("content-length", byte_count.to_string())
            .body(buffer)
            .send()
            .await?;

        // Only an explicit 204 means the server accepted the full file; a
        // successful-looking 200 is still an incomplete transfer.
        if response.status() != StatusCode::NO_CONTENT {
            let status = response.status().as_u16();
            warn!(path = %session.target_path(), status, "transfer did not complete");
            return Err(FbError::UploadIncomplete {
                path: session.target_path(),
                status,
            });
        }
        Ok(())
    }
}
