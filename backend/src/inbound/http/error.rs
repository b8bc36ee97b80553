//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting handlers return it
//! directly. Internal errors are redacted before they reach the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(error = %error, "internal error returned to client");
        let redacted = Error::internal("Internal server error");
        match error.trace_id() {
            Some(id) => redacted.with_trace_id(id),
            None => redacted,
        }
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    //! Status mapping and payload redaction coverage.

    use actix_web::body::to_bytes;
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    #[fixture]
    fn internal_error_case() -> Error {
        Error::internal("pool exhausted on db-1")
            .with_trace_id(TRACE_ID)
            .with_details(json!({"secret": "x"}))
    }

    async fn assert_error_response(
        error: Error,
        expected_status: StatusCode,
        expected_trace_id: Option<&str>,
    ) -> Error {
        let response = error.error_response();
        assert_eq!(response.status(), expected_status);

        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .map(|value| value.to_str().expect("trace-id is ASCII").to_owned());
        assert_eq!(header.as_deref(), expected_trace_id);

        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
    }

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
        assert_eq!(error.status_code(), status);
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_errors_are_redacted(internal_error_case: Error) {
        let payload = assert_error_response(
            internal_error_case,
            StatusCode::INTERNAL_SERVER_ERROR,
            Some(TRACE_ID),
        )
        .await;
        assert_eq!(payload.code(), ErrorCode::InternalError);
        assert_eq!(payload.message(), "Internal server error");
        assert!(payload.details().is_none());
        assert_eq!(payload.trace_id(), Some(TRACE_ID));
    }

    #[rstest]
    #[actix_web::test]
    async fn client_errors_keep_details() {
        let error = Error::invalid_request("title must not be empty")
            .with_details(json!({"field": "title", "code": "empty_field"}));
        let payload = assert_error_response(error, StatusCode::BAD_REQUEST, None).await;
        assert_eq!(payload.message(), "title must not be empty");
        assert_eq!(
            payload.details(),
            Some(&json!({"field": "title", "code": "empty_field"}))
        );
    }

    #[rstest]
    fn actix_errors_become_internal() {
        let actix_error = actix_web::error::ErrorBadGateway("upstream");
        let error = Error::from(actix_error);
        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
