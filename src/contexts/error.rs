use std::fmt;

/// Errors raised while loading places from the venue search API
#[derive(Debug, Clone, PartialEq)]
pub enum PlacesError {
    /// The endpoint answered with something other than 200
    Status { status: u16, message: String },
    /// The body parsed but carried no `response.venues` array
    MissingVenues(String),
    /// Network or transport failure
    Transport(String),
    /// The body was not valid JSON
    Decode(String),
}

impl fmt::Display for PlacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacesError::Status { message, .. } => write!(f, "{}", message),
            PlacesError::MissingVenues(message) => write!(f, "{}", message),
            PlacesError::Transport(msg) => write!(f, "Request failed: {}", msg),
            PlacesError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for PlacesError {}

impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PlacesError::Decode(err.to_string())
        } else {
            PlacesError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PlacesError {
    fn from(err: serde_json::Error) -> Self {
        PlacesError::Decode(err.to_string())
    }
}

/// Errors raised by the reference (Wikipedia) lookup shown in the info panel
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The API returned an `{ error: { code, info } }` body
    Api { code: String, info: String },
    /// The API answered with a non-200 status
    Status(u16),
    Transport(String),
    Decode(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Api { info, .. } => write!(f, "{}", info),
            LookupError::Status(status) => write!(f, "Reference lookup failed with status {}", status),
            LookupError::Transport(msg) => write!(f, "Request failed: {}", msg),
            LookupError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Decode(err.to_string())
    }
}

/// Errors raised by the map provider bridge
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The provider script could not be loaded
    ScriptLoad(String),
    /// A script sent to the provider failed
    Eval(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::ScriptLoad(src) => write!(f, "Failed to load map script: {}", src),
            ProviderError::Eval(msg) => write!(f, "Map script error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<dioxus::document::EvalError> for ProviderError {
    fn from(err: dioxus::document::EvalError) -> Self {
        ProviderError::Eval(err.to_string())
    }
}

/// Result type for places operations
pub type PlacesResult<T> = Result<T, PlacesError>;

/// Result type for reference lookups
pub type LookupResult<T> = Result<T, LookupError>;

/// Result type for map provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_shows_message_only() {
        let err = PlacesError::Status {
            status: 503,
            message: "No data found for co-ordinates: 1,2".to_string(),
        };
        assert_eq!(err.to_string(), "No data found for co-ordinates: 1,2");
    }

    #[test]
    fn test_lookup_api_error_shows_info() {
        let err = LookupError::Api { code: "1".to_string(), info: "x".to_string() };
        assert_eq!(err.to_string(), "x");
    }
}
