//! Error types for the geocoding client

use std::fmt;

use crate::types::Status;

/// Errors from the geocoding client, one variant per pipeline stage
#[derive(Debug)]
pub enum GeocodingError {
    /// The underlying HTTP client could not be constructed
    HttpClient(reqwest::Error),
    /// The request never completed (DNS, connection refused, TLS, timeout)
    Unreachable(reqwest::Error),
    /// The response arrived but its body could not be read
    BodyRead(reqwest::Error),
    /// The body is not valid JSON or does not match the response schema
    Decode(serde_json::Error),
    /// The service answered with a status other than OK
    Service {
        status: Status,
        message: Option<String>,
    },
    /// The service answered OK without any results
    EmptyResults,
    /// A serialized component filter could not be parsed
    InvalidComponentFilter(String),
}

impl GeocodingError {
    /// Status reported by the service, if this is a service error
    pub fn status(&self) -> Option<&Status> {
        match self {
            Self::Service { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Whether the service reported ZERO_RESULTS
    pub fn is_zero_results(&self) -> bool {
        matches!(self.status(), Some(Status::ZeroResults))
    }
}

impl fmt::Display for GeocodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpClient(e) => write!(f, "Failed to create HTTP client: {e}"),
            Self::Unreachable(e) => write!(f, "Unable to contact the geocoding service: {e}"),
            Self::BodyRead(e) => write!(f, "Unable to read the response body: {e}"),
            Self::Decode(e) => write!(f, "Geocoding response parse error: {e}"),
            Self::Service {
                status,
                message: Some(msg),
            } => write!(f, "Geocoder service error ({status}): {msg}"),
            Self::Service {
                status,
                message: None,
            } => write!(f, "Geocoder service error ({status})"),
            Self::EmptyResults => write!(f, "Geocoder returned OK with no results"),
            Self::InvalidComponentFilter(msg) => {
                write!(f, "Invalid component filter: {msg}")
            }
        }
    }
}

impl std::error::Error for GeocodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(e) | Self::Unreachable(e) | Self::BodyRead(e) => Some(e),
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GeocodingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

pub type Result<T> = std::result::Result<T, GeocodingError>;
