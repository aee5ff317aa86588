//! Task Collaborator Bindings
//!
//! HTTP wrappers around the REST task collection, organized by resource.

mod dashboard;
mod tasks;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Client for the task collaborator. Cheap to clone; holds only config.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    // ========================
    // Verbs
    // ========================

    /// GET and decode, retrying transport failures up to the configured bound
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        let mut attempt = 0;
        loop {
            debug!(%url, attempt, "GET");
            match send(Request::get(&url)).await {
                Ok(response) => return read_json(response).await,
                Err(err) if err.is_transient() && attempt < self.config.retry_attempts => {
                    attempt += 1;
                    warn!(%url, %err, attempt, "retrying after transport failure");
                    TimeoutFuture::new(self.config.retry_delay_ms).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// POST a JSON body; success is decided by status alone
    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.config.url(path);
        debug!(%url, "POST");
        send_json(Request::post(&url), body).await
    }

    /// PUT a JSON body; success is decided by status alone
    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.config.url(path);
        debug!(%url, "PUT");
        send_json(Request::put(&url), body).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.config.url(path);
        debug!(%url, "DELETE");
        let response = send(Request::delete(&url)).await?;
        settle_write(response).await
    }
}

// ========================
// Response Handling
// ========================

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder.send().await.map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> Result<(), ApiError> {
    let request = builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    settle_write(response).await
}

/// Writes succeed on any 2xx; the body is not inspected
async fn settle_write(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    write_outcome(status, &body)
}

fn write_outcome(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        let err = ApiError::from_response(status, body);
        warn!(status, %err, "collaborator rejected the write");
        Err(err)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(read_error(response).await);
    }
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    decode_body(&body)
}

async fn read_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    warn!(status, %err, "collaborator returned an error");
    err
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
