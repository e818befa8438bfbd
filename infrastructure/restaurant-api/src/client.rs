use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;

/// Shared HTTP client for the restaurant backend.
#[derive(Clone)]
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_send_error(&url, e))?;

        decode(check_status(&url, response)?).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path, body).await?;
        decode(response).await
    }

    /// POST where only the status code matters.
    pub async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<(), GatewayError>
    where
        B: Serialize + ?Sized,
    {
        self.post(path, body).await.map(|_| ())
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<Response, GatewayError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| map_send_error(&url, e))?;

        check_status(&url, response)
    }
}

fn map_send_error(url: &str, error: reqwest::Error) -> GatewayError {
    tracing::warn!(%url, %error, "request failed");
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Unreachable
    }
}

fn check_status(url: &str, response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::warn!(%url, status = status.as_u16(), "unexpected status");
    if status == StatusCode::NOT_FOUND {
        Err(GatewayError::NotFound)
    } else {
        Err(GatewayError::UnexpectedStatus(status.as_u16()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    response.json::<T>().await.map_err(|error| {
        tracing::warn!(%error, "malformed response body");
        if error.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::MalformedResponse
        }
    })
}
