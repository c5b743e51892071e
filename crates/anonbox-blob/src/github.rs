//! GitHub-backed blob store
//!
//! Uploads create one commit per file via the contents API; the public URL
//! is derived from the repository path, no read-back needed.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use reqwest::{header, Client};
use serde_json::json;
use tracing::{debug, instrument};

use anonbox_core::{BlobStore, DomainError, StoreResult};

use crate::object_name::object_path;

const API_BASE: &str = "https://api.github.com";
const RAW_BASE: &str = "https://raw.githubusercontent.com";
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);
// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("anonbox/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
struct Credentials {
    token: String,
    repo: String,
}

/// Blob store writing to a GitHub repository over the contents API
#[derive(Clone)]
pub struct GithubBlobStore {
    http: Client,
    credentials: Option<Credentials>,
    branch: String,
}

impl GithubBlobStore {
    /// Create a new GithubBlobStore.
    ///
    /// Missing token or repo does not prevent construction; uploads then
    /// fail per-file with a credentials error, and the submission pipeline
    /// recovers by skipping the file.
    pub fn new(
        token: Option<String>,
        repo: Option<String>,
        branch: String,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        let credentials = match (token, repo) {
            (Some(token), Some(repo)) => Some(Credentials { token, repo }),
            _ => None,
        };

        Ok(Self {
            http,
            credentials,
            branch,
        })
    }

    /// Whether credentials are configured
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }
}

#[async_trait]
impl BlobStore for GithubBlobStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(
        &self,
        bytes: &[u8],
        original_name: &str,
        mime_type: &str,
    ) -> StoreResult<String> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            DomainError::UploadFailed("content store credentials are not configured".to_string())
        })?;

        let path = object_path(original_name, mime_type, Utc::now().timestamp_millis());
        let object = path.rsplit('/').next().unwrap_or(path.as_str());
        let endpoint = format!("{API_BASE}/repos/{}/contents/{path}", credentials.repo);

        let body = json!({
            "message": format!("Upload file: {object}"),
            "content": BASE64.encode(bytes),
            "branch": self.branch,
        });

        let response = self
            .http
            .put(&endpoint)
            .bearer_auth(&credentials.token)
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::UploadFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::UploadFailed(format!(
                "content store rejected the write ({status}): {detail}"
            )));
        }

        let url = format!(
            "{RAW_BASE}/{}/{}/{path}",
            credentials.repo, self.branch
        );
        debug!(%url, "blob stored");
        Ok(url)
    }
}
