//! UserSearch Client Library
//!
//! HTTP client for the user search service.

mod classify;
mod client;

pub use classify::classify_response;
pub use client::SearchClient;
pub use usersearch_core::{
    ClientConfig, OrderBy, SearchErrorResponse, SearchRequest, SearchResponse, User,
    ValidationError, MAX_PAGE_SIZE,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid search request: {0}")]
    Validation(#[from] ValidationError),

    #[error("bad access token")]
    BadAccessToken,

    #[error("order field {field:?} invalid")]
    OrderField { field: String },

    #[error("unknown bad request error: {message}")]
    BadRequest { message: String },

    #[error("unknown bad request: cannot decode error body: {0}")]
    MalformedErrorBody(#[source] serde_json::Error),

    #[error("invalid service url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unknown error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unknown error: service responded with status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("cannot decode search results: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Coarse classification of a [`ClientError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request rejected locally, nothing was sent
    Validation,
    BadAccessToken,
    OrderField,
    BadRequest,
    /// Transport failures, unexpected statuses and undecodable results
    Unknown,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::BadAccessToken => ErrorKind::BadAccessToken,
            ClientError::OrderField { .. } => ErrorKind::OrderField,
            ClientError::BadRequest { .. } | ClientError::MalformedErrorBody(_) => {
                ErrorKind::BadRequest
            }
            ClientError::InvalidUrl { .. }
            | ClientError::Transport(_)
            | ClientError::UnexpectedStatus { .. }
            | ClientError::Decode(_) => ErrorKind::Unknown,
        }
    }

    /// True when the transport gave up waiting on the service.
    ///
    /// Timeouts are still [`ErrorKind::Unknown`]; this is for logging.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<SearchErrorResponse>(r#"{"}"#).unwrap_err()
    }

    #[test]
    fn test_kinds() {
        let cases = vec![
            (
                ClientError::from(ValidationError::NegativeLimit(-1)),
                ErrorKind::Validation,
            ),
            (ClientError::BadAccessToken, ErrorKind::BadAccessToken),
            (
                ClientError::OrderField {
                    field: "Foo".to_string(),
                },
                ErrorKind::OrderField,
            ),
            (
                ClientError::BadRequest {
                    message: "nope".to_string(),
                },
                ErrorKind::BadRequest,
            ),
            (
                ClientError::MalformedErrorBody(json_error()),
                ErrorKind::BadRequest,
            ),
            (
                ClientError::UnexpectedStatus { status: 500 },
                ErrorKind::Unknown,
            ),
            (ClientError::Decode(json_error()), ErrorKind::Unknown),
            (
                ClientError::InvalidUrl {
                    url: String::new(),
                    source: url::ParseError::EmptyHost,
                },
                ErrorKind::Unknown,
            ),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "{}", err);
            assert!(!err.is_timeout());
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ClientError::from(ValidationError::NegativeOffset(-1)).to_string(),
            "invalid search request: offset must be >= 0, got -1"
        );
        assert_eq!(
            ClientError::OrderField {
                field: "Foo".to_string()
            }
            .to_string(),
            r#"order field "Foo" invalid"#
        );
        assert_eq!(
            ClientError::UnexpectedStatus { status: 504 }.to_string(),
            "unknown error: service responded with status 504"
        );
    }

    #[test]
    fn test_decode_error_keeps_source() {
        use std::error::Error;

        let err = ClientError::MalformedErrorBody(json_error());
        let source = err.source().expect("source should be kept");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }
}
