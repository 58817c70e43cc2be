use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::core::interfaces::adapters::TelemetrySource;
use crate::core::models::{TelemetryError, TelemetrySnapshot};
use crate::global_constants::LOG_TAG_TELEMETRY;

/// Reads the aircraft position from a JSON endpoint, typically a local SimConnect bridge
/// answering with `{"latitude", "longitude", "altitude_meters", "speed_knots"}`.
pub struct HttpTelemetrySource {
    client: reqwest::Client,
    endpoint_url: String,
    request_timeout: Duration,
}

impl HttpTelemetrySource {
    pub fn build(endpoint_url: String, request_timeout: Duration) -> Result<Self> {
        log::info!("{} using telemetry endpoint {}", LOG_TAG_TELEMETRY, endpoint_url);

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Failed to build telemetry HTTP client")?;

        Ok(Self {
            client,
            endpoint_url,
            request_timeout,
        })
    }

    fn parse_snapshot(response_text: &str) -> Result<TelemetrySnapshot, TelemetryError> {
        let snapshot: TelemetrySnapshot = serde_json::from_str(response_text)
            .map_err(|error| TelemetryError::InvalidData(error.to_string()))?;

        if let Some(field) = snapshot.find_invalid_field() {
            return Err(TelemetryError::InvalidData(format!(
                "{} out of range in {}",
                field, response_text
            )));
        }

        Ok(snapshot)
    }

    fn map_request_error(&self, error: reqwest::Error) -> TelemetryError {
        if error.is_timeout() {
            TelemetryError::TimedOut(self.request_timeout)
        } else {
            TelemetryError::NotConnected(error.to_string())
        }
    }
}

#[async_trait]
impl TelemetrySource for HttpTelemetrySource {
    async fn get_current_snapshot(&self) -> Result<TelemetrySnapshot, TelemetryError> {
        log::debug!("{} requesting {}", LOG_TAG_TELEMETRY, self.endpoint_url);

        let response = self
            .client
            .get(&self.endpoint_url)
            .send()
            .await
            .map_err(|error| self.map_request_error(error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TelemetryError::NotConnected(format!(
                "telemetry endpoint answered {}",
                status
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|error| self.map_request_error(error))?;
        log::debug!("{} telemetry response: {}", LOG_TAG_TELEMETRY, response_text);

        Self::parse_snapshot(&response_text)
    }
}

/// Stand-in used when no telemetry endpoint is configured.
pub struct DisconnectedTelemetrySource;

#[async_trait]
impl TelemetrySource for DisconnectedTelemetrySource {
    async fn get_current_snapshot(&self) -> Result<TelemetrySnapshot, TelemetryError> {
        Err(TelemetryError::NotConnected(
            "no telemetry endpoint configured".to_string(),
        ))
    }
}
