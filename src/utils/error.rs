use std::time::Duration;
use thiserror::Error;

/// Failures of the single GET request against the todo API.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("HTTP {status} for url: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("response is not a JSON array of todo records: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Status code of a non-2xx response, if that is what failed.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Fetch failed: {0}")]
    FetchError(#[from] FetchError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Data,
    Storage,
    Configuration,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::FetchError(FetchError::Status { .. }) => ErrorCategory::Http,
            EtlError::FetchError(FetchError::Parse(_)) => ErrorCategory::Data,
            EtlError::FetchError(_) => ErrorCategory::Network,
            EtlError::CsvError(_) | EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit status for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Http | ErrorCategory::Data => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Storage => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::FetchError(FetchError::Connect { url, .. }) => {
                format!("ERROR: Could not connect to {}. Check your internet connection.", url)
            }
            EtlError::FetchError(FetchError::Timeout { timeout, .. }) => format!(
                "ERROR: The request timed out after {}s. The server may be slow.",
                timeout.as_secs_f64()
            ),
            EtlError::FetchError(FetchError::Status { url, status }) => format!(
                "HTTP ERROR: {} for url: {}\n    Status Code: {}",
                status,
                url,
                status.as_u16()
            ),
            EtlError::FetchError(FetchError::Request(e)) => {
                format!("UNEXPECTED ERROR: {}", error_chain(e))
            }
            EtlError::FetchError(FetchError::Parse(e)) => {
                format!("ERROR: Unexpected response body: {}", e)
            }
            EtlError::CsvError(e) => format!("ERROR: Could not write CSV output: {}", e),
            EtlError::IoError(e) => format!("ERROR: Could not write output file: {}", e),
            EtlError::ConfigError { message } => format!("CONFIG ERROR: {}", message),
            EtlError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("CONFIG ERROR: {} = '{}': {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::FetchError(FetchError::Connect { .. }) => {
                "Check your network connection and the endpoint host"
            }
            EtlError::FetchError(FetchError::Timeout { .. }) => {
                "Try again later or raise --timeout-secs"
            }
            EtlError::FetchError(FetchError::Status { .. }) => {
                "Verify the endpoint URL and query parameters"
            }
            EtlError::FetchError(FetchError::Request(_)) => "Inspect the underlying cause above",
            EtlError::FetchError(FetchError::Parse(_)) => {
                "Make sure the endpoint returns a JSON array of todo objects"
            }
            EtlError::CsvError(_) | EtlError::IoError(_) => {
                "Make sure the output directory exists and is writable"
            }
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }
}

/// Joins an error and every `source()` below it, outermost first.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(": ")
}

pub type Result<T> = std::result::Result<T, EtlError>;
