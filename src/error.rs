use std::fmt;
use thiserror::Error;

/// Classification of a failure, independent of its message.
///
/// Mirrors the variants of [`Error`] one-to-one so callers (and log fields) can
/// match on the kind without destructuring the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// HTTP 401 from the provider.
    Authentication,
    /// HTTP 403 from the provider.
    Authorization,
    /// HTTP 429 from the provider.
    RateLimit,
    /// HTTP 5xx from the provider.
    UpstreamServer,
    /// Transport failures, other HTTP error statuses, malformed or mis-shaped bodies.
    GenericProvider,
    /// The normalized payload broke its shape contract.
    Validation,
    /// Missing or invalid runtime setup (endpoint, key, timeout, retries, provider name).
    Configuration,
}

impl ErrorKind {
    /// Returns the snake_case name used in structured log fields.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::RateLimit => "rate_limit",
            Self::UpstreamServer => "upstream_server",
            Self::GenericProvider => "generic_provider",
            Self::Validation => "validation",
            Self::Configuration => "configuration",
        }
    }

    /// Returns whether the kind originates from the provider call.
    #[inline]
    pub fn is_provider(&self) -> bool {
        matches!(
            self,
            Self::Authentication
                | Self::Authorization
                | Self::RateLimit
                | Self::UpstreamServer
                | Self::GenericProvider
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unified error type for the prompt runner.
///
/// Every failure the library produces is one of these variants. They are terminal
/// for the current invocation and carry a human-readable message that is rendered
/// verbatim by `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{message}")]
    Authentication { message: String },

    #[error("{message}")]
    Authorization { message: String },

    #[error("{message}")]
    RateLimit { message: String },

    #[error("{message}")]
    UpstreamServer { message: String },

    #[error("{message}")]
    GenericProvider { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Configuration { message: String },
}

impl Error {
    pub fn authentication(msg: impl Into<String>) -> Self {
        Error::Authentication {
            message: msg.into(),
        }
    }

    pub fn authorization(msg: impl Into<String>) -> Self {
        Error::Authorization {
            message: msg.into(),
        }
    }

    pub fn rate_limit(msg: impl Into<String>) -> Self {
        Error::RateLimit {
            message: msg.into(),
        }
    }

    pub fn upstream_server(msg: impl Into<String>) -> Self {
        Error::UpstreamServer {
            message: msg.into(),
        }
    }

    pub fn generic_provider(msg: impl Into<String>) -> Self {
        Error::GenericProvider {
            message: msg.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation {
            message: msg.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Authentication { .. } => ErrorKind::Authentication,
            Error::Authorization { .. } => ErrorKind::Authorization,
            Error::RateLimit { .. } => ErrorKind::RateLimit,
            Error::UpstreamServer { .. } => ErrorKind::UpstreamServer,
            Error::GenericProvider { .. } => ErrorKind::GenericProvider,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Error::Authentication { message }
            | Error::Authorization { message }
            | Error::RateLimit { message }
            | Error::UpstreamServer { message }
            | Error::GenericProvider { message }
            | Error::Validation { message }
            | Error::Configuration { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_verbatim() {
        let err = Error::rate_limit("Provider rate limit exceeded (HTTP 429).");
        assert_eq!(err.to_string(), "Provider rate limit exceeded (HTTP 429).");
        assert_eq!(err.message(), "Provider rate limit exceeded (HTTP 429).");
    }

    #[test]
    fn test_kind_matches_variant() {
        let cases = vec![
            (Error::authentication("a"), ErrorKind::Authentication),
            (Error::authorization("b"), ErrorKind::Authorization),
            (Error::rate_limit("c"), ErrorKind::RateLimit),
            (Error::upstream_server("d"), ErrorKind::UpstreamServer),
            (Error::generic_provider("e"), ErrorKind::GenericProvider),
            (Error::validation("f"), ErrorKind::Validation),
            (Error::configuration("g"), ErrorKind::Configuration),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "wrong kind for {:?}", err);
        }
    }

    #[test]
    fn test_provider_kinds() {
        assert!(ErrorKind::RateLimit.is_provider());
        assert!(ErrorKind::GenericProvider.is_provider());
        assert!(!ErrorKind::Validation.is_provider());
        assert!(!ErrorKind::Configuration.is_provider());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::UpstreamServer.name(), "upstream_server");
        assert_eq!(ErrorKind::RateLimit.to_string(), "rate_limit");
    }
}
