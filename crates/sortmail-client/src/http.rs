//! HTTP transport.
//!
//! Every request goes through `send`: JSON content type and the bearer
//! credential are attached in this one place, and unauthorized responses are
//! funneled into the session manager's invalidation transition before the
//! caller sees the error.

use std::sync::{Arc, OnceLock, Weak};

use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use sortmail_core::api::ErrorBody;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::{SessionSink, TokenCell};

#[derive(Clone)]
pub struct Http {
    client: reqwest::Client,
    base_url: Url,
    token: TokenCell,
    session: Arc<OnceLock<Weak<dyn SessionSink>>>,
}

impl Http {
    pub fn new(config: &ClientConfig, token: TokenCell) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("could not build HTTP client: {}", e)))?;
        Ok(Http {
            client,
            base_url: config.base_url.clone(),
            token,
            session: Arc::new(OnceLock::new()),
        })
    }

    /// Register the session manager as the 401 sink. Installed once; later
    /// calls are ignored.
    pub(crate) fn install_sink(&self, sink: Weak<dyn SessionSink>) {
        let _ = self.session.set(sink);
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send(self.client.get(self.url(path)?)).await?;
        Self::decode(response).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let response = self
            .send(self.client.get(self.url(path)?).query(query))
            .await?;
        Self::decode(response).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self
            .send(self.client.post(self.url(path)?).json(body))
            .await?;
        Self::decode(response).await
    }

    /// POST with an empty JSON body, for trigger-style endpoints.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.post(path, &serde_json::json!({})).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self
            .send(self.client.patch(self.url(path)?).json(body))
            .await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.client.delete(self.url(path)?)).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid request path {:?}: {}", path, e)))
    }

    async fn send(
        &self,
        mut request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        request = request.header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.token.get() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Unavailable(e.to_string()))?;
        self.check(response).await
    }

    async fn check(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.notify_unauthorized().await;
            return Err(ClientError::AuthExpired);
        }
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        if status.is_server_error() {
            Err(ClientError::Unavailable(message))
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn notify_unauthorized(&self) {
        if let Some(sink) = self.session.get().and_then(Weak::upgrade) {
            sink.session_invalidated().await;
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        response.json().await.map_err(|e| {
            tracing::warn!("undecodable response body: {}", e);
            ClientError::Contract(e.to_string())
        })
    }
}
