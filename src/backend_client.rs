use crate::domain::{FormParams, IssueCode, IssueSet};
use crate::utils::error_chain_fmt;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::collections::BTreeMap;

/// The remote service that counts and records signups.
///
/// The landing page only ever talks to it through this trait, so that a fake can stand in for it
/// wherever a real HTTP round trip is not wanted.
#[async_trait]
pub trait Backend: Send + Sync {
    /// How many people signed up so far. `None` when the service does not know.
    async fn response_count(&self) -> Result<Option<u64>, BackendError>;

    /// Records a signup.
    async fn post_response(&self, params: &FormParams) -> Result<SubmissionOutcome, BackendError>;
}

/// What the remote service made of a signup, when it answered at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    /// The service refused the signup. It may or may not have told us why.
    Rejected(Option<IssueSet>),
}

#[derive(thiserror::Error)]
pub enum BackendError {
    #[error("Failed to reach the remote service")]
    Transport(#[source] anyhow::Error),
    #[error("The remote service sent back a response we could not make sense of")]
    UnexpectedResponse(#[source] anyhow::Error),
}

impl std::fmt::Debug for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// A `Backend` reached over HTTP.
pub struct BackendClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
}

#[derive(serde::Deserialize)]
struct CountResponse {
    count: Option<u64>,
}

#[derive(serde::Serialize)]
struct PostResponseRequest<'a> {
    name: &'a str,
    email: &'a str,
}

// Only `ok` counts as success: any other `status` fails to decode and is reported as
// `UnexpectedResponse`, like any other answer we cannot make sense of.
#[derive(serde::Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum PostResponseResponse {
    Ok,
    Error {
        #[serde(default)]
        issues: Option<BTreeMap<String, IssueCode>>,
    },
}

impl BackendClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            authorization_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl Backend for BackendClient {
    #[tracing::instrument(name = "Fetching the response count", skip(self))]
    async fn response_count(&self) -> Result<Option<u64>, BackendError> {
        let response = self
            .http_client
            .get(self.url("responses/count"))
            .header(
                "X-Vouch-Backend-Token",
                self.authorization_token.expose_secret(),
            )
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| BackendError::Transport(e.into()))?;

        let body: CountResponse = response
            .json()
            .await
            .map_err(|e| BackendError::UnexpectedResponse(e.into()))?;
        Ok(body.count)
    }

    #[tracing::instrument(
        name = "Posting a response",
        skip(self, params),
        fields(response_email = %params.email, response_name = %params.name)
    )]
    async fn post_response(&self, params: &FormParams) -> Result<SubmissionOutcome, BackendError> {
        let request_body = PostResponseRequest {
            name: &params.name,
            email: &params.email,
        };
        let response = self
            .http_client
            .post(self.url("responses"))
            .header(
                "X-Vouch-Backend-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| BackendError::Transport(e.into()))?;

        let body: PostResponseResponse = response
            .json()
            .await
            .map_err(|e| BackendError::UnexpectedResponse(e.into()))?;
        Ok(match body {
            PostResponseResponse::Ok => SubmissionOutcome::Accepted,
            PostResponseResponse::Error { issues } => {
                SubmissionOutcome::Rejected(issues.and_then(IssueSet::from_wire))
            }
        })
    }
}
