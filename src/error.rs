use crate::models::vacancy::ProviderKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{provider} responded with status {status}")]
    Provider { provider: ProviderKind, status: u16 },

    #[error("{provider} returned an unexpected response: {reason}")]
    UnexpectedResponse {
        provider: ProviderKind,
        reason: String,
    },

    #[error("Cannot normalize {provider} vacancy: {reason}")]
    Normalization {
        provider: ProviderKind,
        reason: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Corrupt data in {path}: {reason}")]
    CorruptData { path: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Provider-side failures end pagination for that provider but not the run.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Error::Provider { .. } | Error::UnexpectedResponse { .. } | Error::Reqwest(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_mentions_status() {
        let err = Error::Provider {
            provider: ProviderKind::SuperJob,
            status: 403,
        };
        assert_eq!(err.to_string(), "SuperJob responded with status 403");
        assert!(err.is_provider_failure());
    }

    #[test]
    fn store_errors_are_not_provider_failures() {
        assert!(!Error::NotFound("Python.json".into()).is_provider_failure());
        let corrupt = Error::CorruptData {
            path: "Python.json".into(),
            reason: "expected value".into(),
        };
        assert!(!corrupt.is_provider_failure());
    }
}
