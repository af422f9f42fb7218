//! STM client error types.

use std::fmt;

/// Errors from the STM arrivals client.
#[derive(Debug)]
pub enum ArrivalsError {
    /// HTTP request failed (connection failure, timeout, etc.)
    Network(reqwest::Error),

    /// API returned a failure status code
    Upstream { status: u16, body: String },

    /// Response body was not the expected JSON shape
    Parse {
        message: String,
        body: Option<String>,
    },
}

impl fmt::Display for ArrivalsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrivalsError::Network(e) => write!(f, "network error: {e}"),
            ArrivalsError::Upstream { status, body } => {
                write!(f, "upstream error {status}: {body}")
            }
            ArrivalsError::Parse { message, body } => {
                write!(f, "parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ArrivalsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArrivalsError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ArrivalsError {
    fn from(err: reqwest::Error) -> Self {
        ArrivalsError::Network(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ArrivalsError::Upstream {
            status: 503,
            body: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "upstream error 503: Service Unavailable");

        let err = ArrivalsError::Parse {
            message: "missing field `result`".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("parse error"));
        assert!(err.to_string().contains("missing field `result`"));
        assert!(err.to_string().contains("(body: {})"));

        let err = ArrivalsError::Parse {
            message: "expected value".into(),
            body: None,
        };
        assert!(!err.to_string().contains("(body:"));
    }
}
