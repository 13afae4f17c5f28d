//! Backend boundary for translation records.
//!
//! [`TranslationGateway`] is the seam the controller talks to;
//! [`HttpTranslationGateway`] binds it to the REST backend:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list      | `GET {base}` |
//! | get       | `GET {base}/{id}` |
//! | translate | `POST {base}/translate` |
//! | update    | `PUT {base}/{id}` |
//! | delete    | `DELETE {base}/{id}` |

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::record::TranslationRecord;

/// Failure of a single gateway call.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned {status} for {operation}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("could not decode {operation} response: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },
}

impl GatewayError {
    /// Name of the gateway operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Transport { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. } => operation,
        }
    }
}

/// CRUD operations the list view needs from the backend.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<TranslationRecord>, GatewayError>;

    async fn get(&self, id: i64) -> Result<TranslationRecord, GatewayError>;

    /// Persist a new record and return the translated text the backend computed.
    async fn translate(&self, record: &TranslationRecord) -> Result<String, GatewayError>;

    async fn update(
        &self,
        id: i64,
        record: &TranslationRecord,
    ) -> Result<TranslationRecord, GatewayError>;

    async fn delete(&self, id: i64) -> Result<(), GatewayError>;
}

/// [`TranslationGateway`] over HTTP+JSON.
#[derive(Debug, Clone)]
pub struct HttpTranslationGateway {
    client: Client,
    base_url: String,
}

impl HttpTranslationGateway {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, &config.api_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Turn a non-2xx response into [`GatewayError::Status`].
async fn check_status(operation: &'static str, response: Response) -> Result<Response, GatewayError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Status {
        operation,
        status,
        body,
    })
}

async fn read_body(operation: &'static str, response: Response) -> Result<String, GatewayError> {
    response
        .text()
        .await
        .map_err(|source| GatewayError::Transport { operation, source })
}

fn decode<T: DeserializeOwned>(operation: &'static str, body: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body).map_err(|e| GatewayError::Decode {
        operation,
        message: e.to_string(),
    })
}

/// The translate endpoint answers with a JSON string; bare text is accepted too.
fn parse_translated_text(body: &str) -> String {
    serde_json::from_str::<String>(body).unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl TranslationGateway for HttpTranslationGateway {
    async fn list(&self) -> Result<Vec<TranslationRecord>, GatewayError> {
        const OP: &str = "list";
        debug!("GET {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { operation: OP, source })?;
        let response = check_status(OP, response).await?;
        let records: Vec<TranslationRecord> = decode(OP, &read_body(OP, response).await?)?;

        info!("Fetched {} translations", records.len());
        Ok(records)
    }

    async fn get(&self, id: i64) -> Result<TranslationRecord, GatewayError> {
        const OP: &str = "get";
        let url = self.record_url(id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { operation: OP, source })?;
        let response = check_status(OP, response).await?;
        decode(OP, &read_body(OP, response).await?)
    }

    async fn translate(&self, record: &TranslationRecord) -> Result<String, GatewayError> {
        const OP: &str = "translate";
        let url = format!("{}/translate", self.base_url);
        debug!(
            "POST {} ({} -> {})",
            url, record.from_language, record.to_language
        );

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { operation: OP, source })?;
        let response = check_status(OP, response).await?;
        let translated = parse_translated_text(&read_body(OP, response).await?);

        info!("Backend translated record ({} chars)", translated.chars().count());
        Ok(translated)
    }

    async fn update(
        &self,
        id: i64,
        record: &TranslationRecord,
    ) -> Result<TranslationRecord, GatewayError> {
        const OP: &str = "update";
        let url = self.record_url(id);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { operation: OP, source })?;
        let response = check_status(OP, response).await?;
        let body = read_body(OP, response).await?;

        // Some backends answer 204 with no body; the request is the result then
        if body.trim().is_empty() {
            return Ok(TranslationRecord {
                id,
                ..record.clone()
            });
        }

        let updated = decode(OP, &body)?;
        info!("Updated translation {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        const OP: &str = "delete";
        let url = self.record_url(id);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { operation: OP, source })?;
        check_status(OP, response).await?;

        info!("Deleted translation {}", id);
        Ok(())
    }
}
