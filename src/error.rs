// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Fetch(FetchError),
}

/// Specific failure modes of the CMS read.
/// The page handler treats them all the same (generic server error), so the
/// split exists for logging and tests, not for user-facing recovery.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    Network(String),

    /// The CMS answered with a non-success status code.
    Status(u16),

    /// The response body was not the expected FAQ envelope.
    Decode(String),
}

impl FetchError {
    /// Categorizes a transport error from the HTTP client.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Status(status.as_u16());
        }
        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }
        FetchError::Network(err.to_string())
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "CMS unreachable: {}", msg),
            FetchError::Status(code) => write!(f, "CMS responded with status {}", code),
            FetchError::Decode(msg) => write!(f, "CMS response not decodable: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("api_url is not set".to_string());
        assert_eq!(format!("{}", err), "Config Error: api_url is not set");
    }

    #[test]
    fn display_formats_fetch_status() {
        let err = FetchError::Status(503);
        assert_eq!(format!("{}", err), "CMS responded with status 503");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_fetch_error_wraps_variant() {
        let err: Error = FetchError::Decode("missing field `data`".to_string()).into();
        match err {
            Error::Fetch(FetchError::Decode(message)) => {
                assert!(message.contains("missing field"))
            }
            _ => panic!("expected Fetch(Decode) variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_error = toml::from_str::<toml::Value>("not = valid = toml").unwrap_err();
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
