use thiserror::Error;

use gemini_client::GeminiError;
use openai_client::OpenAIError;
use qloo_client::QlooError;

/// Why an upstream call produced no items.
///
/// Never shown to end users; the normalizer turns every variant into the
/// fallback card.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout
    #[error("upstream unreachable: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body or model reply was not the expected JSON
    #[error("unparsable upstream reply: {0}")]
    Parse(String),

    /// Provider is misconfigured (missing key, bad client settings)
    #[error("upstream misconfigured: {0}")]
    Config(String),
}

impl From<OpenAIError> for UpstreamError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Config(msg) => UpstreamError::Config(msg),
            OpenAIError::Network(msg) => UpstreamError::Network(msg),
            OpenAIError::Api { status, message } => UpstreamError::Status {
                status,
                body: message,
            },
            OpenAIError::Parse(msg) => UpstreamError::Parse(msg),
        }
    }
}

impl From<GeminiError> for UpstreamError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Config(msg) => UpstreamError::Config(msg),
            GeminiError::Network(msg) => UpstreamError::Network(msg),
            GeminiError::Api { status, message } => UpstreamError::Status {
                status,
                body: message,
            },
            GeminiError::Parse(msg) => UpstreamError::Parse(msg),
            empty @ GeminiError::EmptyResponse => UpstreamError::Parse(empty.to_string()),
        }
    }
}

impl From<QlooError> for UpstreamError {
    fn from(err: QlooError) -> Self {
        match err {
            QlooError::Http(e) if e.is_decode() => UpstreamError::Parse(e.to_string()),
            QlooError::Http(e) => UpstreamError::Network(e.to_string()),
            QlooError::Api { status, message } => UpstreamError::Status {
                status,
                body: message,
            },
            QlooError::Parse(msg) => UpstreamError::Parse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_keep_status() {
        let err: UpstreamError = OpenAIError::Api {
            status: 429,
            message: "rate limited".into(),
        }
        .into();
        assert!(matches!(err, UpstreamError::Status { status: 429, .. }));

        let err: UpstreamError = QlooError::Api {
            status: 401,
            message: "bad key".into(),
        }
        .into();
        assert_eq!(err.to_string(), "upstream returned 401: bad key");
    }

    #[test]
    fn empty_gemini_reply_is_parse_error() {
        let err: UpstreamError = GeminiError::EmptyResponse.into();
        assert!(matches!(err, UpstreamError::Parse(_)));
    }
}
