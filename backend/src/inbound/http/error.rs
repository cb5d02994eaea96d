//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into consistent JSON envelopes and status
//! codes. The wire envelope is `{ "Message": string }`, preserved from the
//! original wire contract consumed by the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message envelope used for both error bodies and mutation confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    #[serde(rename = "Message")]
    #[schema(example = "User not found")]
    pub message: String,
}

impl MessageBody {
    /// Wrap a message in the envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Generic body for internal failures. No detail leaks to the caller.
const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(error: &Error) -> MessageBody {
    match error.code() {
        ErrorCode::InternalError => MessageBody::new(INTERNAL_ERROR_MESSAGE),
        _ => MessageBody::new(error.message()),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = self.message(), "internal error surfaced to client");
        }
        HttpResponse::build(self.status_code()).json(body_for(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case(Error::invalid_request("Invalid user data."), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("db exploded"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_expected_statuses(#[case] error: Error, #[case] status: StatusCode) {
        assert_eq!(error.status_code(), status);
    }

    #[actix_web::test]
    async fn not_found_body_uses_the_message_envelope() {
        let response = Error::not_found("User not found").error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let value: Value = serde_json::from_slice(&bytes).expect("JSON body");
        assert_eq!(
            value.get("Message").and_then(Value::as_str),
            Some("User not found")
        );
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let response = Error::internal("connection string leaked").error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let value: Value = serde_json::from_slice(&bytes).expect("JSON body");
        let message = value
            .get("Message")
            .and_then(Value::as_str)
            .expect("message field");
        assert!(!message.contains("connection string"));
        assert_eq!(message, "An error occurred while processing your request.");
    }
}
