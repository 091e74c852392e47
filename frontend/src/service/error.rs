use common::requests::ErrorDetail;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("query service answered {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid query service url `{0}`")]
    InvalidUrl(String),
}

impl ServiceError {
    /// Builds the error for a non-2xx response, preferring the service's
    /// `{"detail": ...}` message over the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = match serde_json::from_str::<ErrorDetail>(body) {
            Ok(parsed) => parsed.message(),
            Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
            Err(_) => body.trim().to_string(),
        };
        ServiceError::Status { status, detail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_is_preferred() {
        let error = ServiceError::from_status(400, r#"{"detail": "Unsupported construct: join"}"#);
        assert_eq!(
            error,
            ServiceError::Status {
                status: 400,
                detail: "Unsupported construct: join".into()
            }
        );
        assert_eq!(
            error.to_string(),
            "query service answered 400: Unsupported construct: join"
        );
    }

    #[test]
    fn raw_body_and_empty_body_fallbacks() {
        assert_eq!(
            ServiceError::from_status(502, "Bad Gateway\n"),
            ServiceError::Status {
                status: 502,
                detail: "Bad Gateway".into()
            }
        );
        assert_eq!(
            ServiceError::from_status(504, ""),
            ServiceError::Status {
                status: 504,
                detail: "HTTP 504".into()
            }
        );
    }
}
