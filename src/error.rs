use thiserror::Error;

use crate::models::ApiMessage;

pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_REJECTED_FALLBACK: &str = "Failed to remove participant";
pub const REMOVAL_FAILED: &str = "Failed to remove participant. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server answered HTTP {status}")]
    Rejected { status: u16, body: ApiMessage },
}

impl ApiError {
    /// Text for the inline message region after a failed signup.
    pub fn signup_text(&self) -> String {
        match self {
            ApiError::Rejected { body, .. } => body
                .detail
                .clone()
                .unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string()),
            ApiError::Transport(_) | ApiError::Decode(_) => SIGNUP_FAILED.to_string(),
        }
    }

    /// Text for the blocking alert after a failed removal.
    pub fn removal_text(&self) -> String {
        match self {
            ApiError::Rejected { body, .. } => body
                .detail
                .clone()
                .or_else(|| body.message.clone())
                .unwrap_or_else(|| REMOVAL_REJECTED_FALLBACK.to_string()),
            ApiError::Transport(_) | ApiError::Decode(_) => REMOVAL_FAILED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(body: &str) -> ApiError {
        ApiError::Rejected {
            status: 400,
            body: ApiMessage::parse_lenient(body),
        }
    }

    fn decode_error() -> ApiError {
        ApiError::from(serde_json::from_str::<ApiMessage>("not json").unwrap_err())
    }

    #[test]
    fn signup_prefers_server_detail() {
        let err = rejected(r#"{"detail": "Student is already signed up"}"#);
        assert_eq!(err.signup_text(), "Student is already signed up");
    }

    #[test]
    fn signup_falls_back_without_detail() {
        assert_eq!(rejected(r#"{"message": "nope"}"#).signup_text(), SIGNUP_REJECTED_FALLBACK);
        assert_eq!(rejected("").signup_text(), SIGNUP_REJECTED_FALLBACK);
        assert_eq!(decode_error().signup_text(), SIGNUP_FAILED);
    }

    #[test]
    fn removal_uses_detail_then_message() {
        assert_eq!(
            rejected(r#"{"detail": "Participant not found", "message": "x"}"#).removal_text(),
            "Participant not found"
        );
        assert_eq!(rejected(r#"{"message": "Locked"}"#).removal_text(), "Locked");
        assert_eq!(rejected("{}").removal_text(), REMOVAL_REJECTED_FALLBACK);
        assert_eq!(decode_error().removal_text(), REMOVAL_FAILED);
    }

    #[test]
    fn rejected_display_names_status() {
        let err = ApiError::Rejected {
            status: 404,
            body: ApiMessage::default(),
        };
        assert_eq!(err.to_string(), "server answered HTTP 404");
    }
}
