use async_trait::async_trait;

use crate::core::models::{TelemetryError, TelemetrySnapshot};

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    async fn get_current_snapshot(&self) -> Result<TelemetrySnapshot, TelemetryError>;
}
