use crate::application::{
    ApplicationResult,
    error::{ApplicationError, FieldErrors, INVALID_FIELDS_MESSAGE},
};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{FormRejection, JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    errors: Option<FieldErrors>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) | ApplicationError::Conflict(msg) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            ApplicationError::InvalidFields(errors) => Self {
                status: StatusCode::BAD_REQUEST,
                message: INVALID_FIELDS_MESSAGE.into(),
                errors: Some(errors),
            },
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::RemoteService(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "internal failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.into())
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Conflict(msg) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Persistence(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            errors: None,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            success: false,
            error: self.message,
            errors: self.errors,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Failure body: `error` always, `errors` only for per-field validation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<FormRejection> for HttpError {
    fn from(rejection: FormRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<MultipartRejection> for HttpError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<MultipartError> for HttpError {
    fn from(err: MultipartError) -> Self {
        Self::new(err.status(), err.body_text())
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_errors_map_to_status_codes() {
        let cases = [
            (ApplicationError::validation("bad"), StatusCode::BAD_REQUEST),
            (ApplicationError::conflict("taken"), StatusCode::BAD_REQUEST),
            (ApplicationError::unauthorized("no"), StatusCode::UNAUTHORIZED),
            (ApplicationError::not_found("gone"), StatusCode::NOT_FOUND),
            (ApplicationError::remote("down"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ApplicationError::Domain(DomainError::Persistence("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApplicationError::Domain(DomainError::validation("nope")),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(HttpError::from_error(err).status(), status);
        }
    }

    #[test]
    fn remote_messages_pass_through_but_internal_ones_do_not() {
        let remote = HttpError::from_error(ApplicationError::remote("Email rate limit exceeded"));
        assert_eq!(remote.message(), "Email rate limit exceeded");

        let internal = HttpError::from_error(ApplicationError::infrastructure("pool exhausted"));
        assert_eq!(internal.message(), "Internal server error");
    }

    #[test]
    fn field_errors_are_kept() {
        let mut errors = FieldErrors::new();
        errors.insert("name".into(), "Please tell us your name".into());

        let err = HttpError::from_error(ApplicationError::InvalidFields(errors));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Please correct the highlighted fields");
        assert_eq!(
            err.errors.as_ref().and_then(|e| e.get("name")).map(String::as_str),
            Some("Please tell us your name")
        );
    }
}
