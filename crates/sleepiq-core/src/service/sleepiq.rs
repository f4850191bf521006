//! HTTP client for the SleepIQ REST API.
//!
//! Decodes only the fields the position workflow reads.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{BedService, Session};
use crate::error::ServiceError;
use crate::types::{BedDescriptor, BedStatus, Position, Side};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://prod-api.sleepiq.sleepnumber.com/rest";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    login: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    user_id: String,
    key: String,
}

#[derive(Debug, Deserialize)]
struct BedsResponse {
    beds: Vec<BedEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BedEntry {
    bed_id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct PresetRequest<'a> {
    preset: u8,
    side: &'a str,
    speed: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoundationStatusResponse {
    fs_is_moving: bool,
}

/// SleepIQ cloud client. Keeps session cookies between calls.
#[derive(Debug, Clone)]
pub struct SleepIqClient {
    client: Client,
    base_url: String,
}

impl SleepIqClient {
    /// Create a client against a custom API root (no trailing slash).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-success response into a `ServiceError::Status`.
async fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status {
        status: status.as_u16(),
        message: body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ServiceError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl BedService for SleepIqClient {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Session, ServiceError> {
        let response = self
            .client
            .put(self.url("/login"))
            .json(&LoginRequest {
                login: username,
                password,
            })
            .send()
            .await?;

        let login: LoginResponse = decode(response).await?;
        Ok(Session {
            user_id: login.user_id,
            key: login.key,
        })
    }

    async fn list_beds(&self, session: &Session) -> Result<Vec<BedDescriptor>, ServiceError> {
        let response = self
            .client
            .get(self.url("/bed"))
            .query(&[("_k", session.key.as_str())])
            .send()
            .await?;

        let beds: BedsResponse = decode(response).await?;
        Ok(beds
            .beds
            .into_iter()
            .map(|b| BedDescriptor {
                id: b.bed_id,
                name: b.name,
            })
            .collect())
    }

    async fn set_position(
        &self,
        session: &Session,
        bed_id: &str,
        side: Side,
        position: Position,
    ) -> Result<BedStatus, ServiceError> {
        let response = self
            .client
            .put(self.url(&format!("/bed/{}/foundation/preset", bed_id)))
            .query(&[("_k", session.key.as_str())])
            .json(&PresetRequest {
                preset: position.preset(),
                side: side.code(),
                speed: 0,
            })
            .send()
            .await?;
        check_status(response).await?;

        // The preset call has no useful body. An accepted preset is treated
        // as started movement; the poll loop reads the real state.
        Ok(BedStatus { is_moving: true })
    }

    async fn foundation_status(&self, session: &Session, bed_id: &str) -> Result<BedStatus, ServiceError> {
        let response = self
            .client
            .get(self.url(&format!("/bed/{}/foundation/status", bed_id)))
            .query(&[("_k", session.key.as_str())])
            .send()
            .await?;

        let status: FoundationStatusResponse = decode(response).await?;
        Ok(BedStatus {
            is_moving: status.fs_is_moving,
        })
    }
}
