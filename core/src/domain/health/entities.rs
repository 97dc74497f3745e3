use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    /// Round trip time of the health check query, in milliseconds.
    pub response_time_ms: u64,
}

impl DatabaseHealthStatus {
    pub fn up(response_time_ms: u64) -> Self {
        Self {
            status: "up".to_string(),
            response_time_ms,
        }
    }
}
