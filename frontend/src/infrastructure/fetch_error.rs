use std::fmt;

/// Why a user list fetch produced no data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or non-success status (`status` when one was received)
    Http {
        status: Option<u16>,
        message: String,
    },
    /// Body is not a JSON array of user records
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http {
                status: Some(status),
                message,
            } => write!(f, "HTTP {}: {}", status, message),
            FetchError::Http {
                status: None,
                message,
            } => write!(f, "Request failed: {}", message),
            FetchError::Decode(msg) => write!(f, "Invalid user list payload: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<native_tls::Error> for FetchError {
    fn from(err: native_tls::Error) -> Self {
        FetchError::Http {
            status: None,
            message: format!("TLS connector error: {}", err),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FetchError::Http {
            status: Some(503),
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");

        let err = FetchError::Http {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn test_from_serde_error() {
        let err: FetchError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
