use serde::{Deserialize, Serialize};

pub const DEFAULT_QUERY_SERVICE_URL: &str = "http://localhost:5001";

/// Runtime configuration the host hands to the frontend at `/api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Base URL of the Query Service, without a trailing slash.
    pub query_service_url: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            query_service_url: DEFAULT_QUERY_SERVICE_URL.to_string(),
        }
    }
}
