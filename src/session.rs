//! Session management and authentication.
//!
//! A [`Session`] is an explicit value created by one successful login and
//! passed to every component that needs it; there is no process-wide token.

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{FbError, Result};
use crate::http::{self, HttpClient};

/// An authenticated session against one File Browser server.
///
/// Holds the opaque auth token returned by `/api/login`. The token is
/// guaranteed non-empty: a `Session` only exists after a successful login,
/// and it is never refreshed automatically.
#[derive(Clone)]
pub struct Session {
    token: String,
    base_url: String,
}

impl Session {
    /// Authenticate against `{base_url}/api/login`.
    ///
    /// The server's reply shape is ambiguous (a raw token, a JSON string, or
    /// an object wrapping one); it is normalized into the typed `Session`
    /// here and nowhere else. No retries: callers decide whether to
    /// re-authenticate.
    pub(crate) async fn authenticate(
        http: &HttpClient,
        base_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        let url = format!("{}/api/login", base_url);
        let body = json!({
            "username": username,
            "password": password,
            "recaptcha": "",
        });

        debug!(url = %url, "logging in");
        let response = http
            .request(reqwest::Method::POST, &url)
            .header("accept", "*/*")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let (status, message) = http::status_and_message(response).await;
            return Err(FbError::Auth { status, message });
        }

        let text = response.text().await?;
        let token = extract_token(&text).ok_or(FbError::Auth {
            status,
            message: "login response carried no token".to_string(),
        })?;

        debug!("login succeeded");
        Ok(Self {
            token,
            base_url: base_url.to_string(),
        })
    }

    /// The opaque auth token. Non-empty by construction.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Base URL of the server this session belongs to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Manual Debug so the token can never leak through `{:?}` logging.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Pull the token out of a login response body.
///
/// File Browser historically returns the raw JWT as text; some deployments
/// wrap it as a JSON string or a `{"token": ...}` object.
fn extract_token(body: &str) -> Option<String> {
    let token = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => s,
        Ok(Value::Object(map)) => map.get("token")?.as_str()?.to_string(),
        _ => body.trim().to_string(),
    };
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_extract_token_shapes() {
        // Raw JWT text is not valid JSON and passes through untouched.
        assert_eq!(
            extract_token("eyJhbGci.eyJpYXQi.sig").as_deref(),
            Some("eyJhbGci.eyJpYXQi.sig")
        );
        // JSON string.
        assert_eq!(extract_token("\"tok123\"").as_deref(), Some("tok123"));
        // Wrapped object.
        assert_eq!(
            extract_token("{\"token\":\"tok456\"}").as_deref(),
            Some("tok456")
        );
        // Missing or empty tokens are rejected.
        assert_eq!(extract_token(""), None);
        assert_eq!(extract_token("{\"user\":\"bob\"}"), None);
        assert_eq!(extract_token("\"\""), None);
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session {
            token: "super-secret".to_string(),
            base_url: "http://files".to_string(),
        };
        let printed = format!("{:?}", session);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_authenticate_wrapped_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({
                "username": "admin",
                "password": "hunter2",
                "recaptcha": "",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok789" })))
            .mount(&server)
            .await;

        let http = HttpClient::new();
        let session = Session::authenticate(&http, &server.uri(), "admin", "hunter2")
            .await
            .expect("login should succeed");
        assert_eq!(session.token(), "tok789");
        assert_eq!(session.base_url(), server.uri());
    }

    #[tokio::test]
    async fn test_authenticate_raw_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("raw.jwt.token"))
            .mount(&server)
            .await;

        let http = HttpClient::new();
        let session = Session::authenticate(&http, &server.uri(), "admin", "pw")
            .await
            .expect("login should succeed");
        assert_eq!(session.token(), "raw.jwt.token");
    }

    #[tokio::test]
    async fn test_authenticate_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        let http = HttpClient::new();
        let err = Session::authenticate(&http, &server.uri(), "admin", "wrong")
            .await
            .expect_err("login should fail");
        match err {
            FbError::Auth { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "forbidden");
                // Redaction: the error must not echo credentials.
                assert!(!message.contains("wrong"));
            }
            other => panic!("expected Auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_authenticate_empty_body_is_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let http = HttpClient::new();
        let err = Session::authenticate(&http, &server.uri(), "admin", "pw")
            .await
            .expect_err("empty body carries no token");
        assert!(matches!(err, FbError::Auth { status: 200, .. }));
    }
}
