//! HTTP client for the project API.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::http::handlers::HealthStatus;
use crate::http::response::ErrorBody;
use crate::projects::{NewProject, Project, ProjectPatch};

/// Errors returned by [`ProjectClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Thin typed wrapper over the service's REST routes.
#[derive(Debug, Clone)]
pub struct ProjectClient {
    client: Client,
    base_url: String,
}

impl ProjectClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let resp = self.client.get(self.url("/health")).send().await?;
        decode(resp).await
    }

    pub async fn list(&self) -> ClientResult<Vec<Project>> {
        let resp = self.client.get(self.url("/projects")).send().await?;
        decode(resp).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Project> {
        let resp = self.client.get(self.project_url(id)).send().await?;
        decode(resp).await
    }

    pub async fn create(&self, project: &NewProject) -> ClientResult<Project> {
        let resp = self
            .client
            .post(self.url("/projects"))
            .json(project)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn update(&self, id: &str, patch: &ProjectPatch) -> ClientResult<Project> {
        let resp = self
            .client
            .put(self.project_url(id))
            .json(patch)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let resp = self.client.delete(self.project_url(id)).send().await?;
        check(resp).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn project_url(&self, id: &str) -> String {
        self.url(&format!("/projects/{}", id))
    }
}

async fn check(resp: Response) -> ClientResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await?;
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    Err(ClientError::Api { status, message })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    Ok(check(resp).await?.json::<T>().await?)
}
