use thiserror::Error;

/// Failure talking to one of the remote brand services.
///
/// Callers degrade silently on every variant; the kind is kept so logs and
/// the status line can tell an outage from a provider contract change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("service responded with HTTP {0}")]
    Status(u16),

    /// The body did not match the documented JSON shape.
    #[error("unexpected response body: {0}")]
    Malformed(String),
}

impl FetchError {
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, FetchError::Malformed(_))
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status(_) => "status",
            FetchError::Malformed(_) => "malformed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "service responded with HTTP 503"
        );
        assert!(FetchError::Malformed("eof".to_string()).is_malformed());
        assert!(!FetchError::Transport("refused".to_string()).is_malformed());
        assert_eq!(FetchError::Transport(String::new()).kind(), "transport");
    }
}
