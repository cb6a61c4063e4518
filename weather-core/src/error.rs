//! Error taxonomy shared by the fetcher, the icon table and the session.

use thiserror::Error;

/// Why a weather request produced no data. All variants are terminal for
/// the request that raised them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Empty response from weather service")]
    EmptyResponse,

    #[error("Failed to parse weather response: {0}")]
    ParseError(String),
}

impl FetchError {
    /// Message shown in place of the location label.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidQuery(msg) => format!("Invalid search: {msg}"),
            Self::NetworkError(_) | Self::EmptyResponse | Self::ParseError(_) => {
                "Couldn't get the weather!".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::NetworkError(err.to_string())
    }
}

/// Failure to read the icon/color table. Callers degrade to "no icons".
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read icon mapping: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse icon mapping: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate condition code {0} in icon mapping")]
    DuplicateCode(i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    pub fn user_message(&self) -> String {
        "Couldn't get the location!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_decode_failures_share_one_message() {
        let msgs = [
            FetchError::NetworkError("connection refused".into()).user_message(),
            FetchError::EmptyResponse.user_message(),
            FetchError::ParseError("missing field `current`".into()).user_message(),
        ];

        assert!(msgs.iter().all(|m| m == "Couldn't get the weather!"));
    }

    #[test]
    fn invalid_query_message_names_the_problem() {
        let err = FetchError::InvalidQuery("city is empty".into());
        assert!(err.user_message().contains("city is empty"));
    }

    #[test]
    fn location_errors_have_distinct_message() {
        assert_eq!(LocationError::PermissionDenied.user_message(), "Couldn't get the location!");
        assert_ne!(
            LocationError::Unavailable("no fix".into()).user_message(),
            FetchError::EmptyResponse.user_message()
        );
    }
}
