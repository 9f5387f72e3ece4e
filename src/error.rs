use std::error::Error;

use axum::response::{IntoResponse, Response};
use http::{header, Method, StatusCode};
use thiserror::Error;
use tracing::error;

use crate::article::ArticleError;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Method Not Allowed")]
    MethodNotAllowed(Method),

    #[error("Content-Type header is not set to application/json")]
    UnsupportedMediaType,

    #[error("{0}")]
    MalformedRequestBody(#[from] serde_json::Error),

    #[error("{0}")]
    Article(#[from] ArticleError),

    #[error("Article not found")]
    ArticleNotFound,

    #[error("Error encoding response")]
    Encode(#[source] serde_json::Error),
}

impl RestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            RestError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::MalformedRequestBody(_) => StatusCode::BAD_REQUEST,
            RestError::Article(ArticleError::DuplicateIdentifier(_)) => StatusCode::CONFLICT,
            RestError::Article(_) => StatusCode::BAD_REQUEST,
            RestError::ArticleNotFound => StatusCode::NOT_FOUND,
            RestError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        error!("{}: {:?}", self, self.source());

        let status = self.status();
        let message = self.to_string();

        match self {
            RestError::MethodNotAllowed(allow) => {
                (status, [(header::ALLOW, allow.to_string())], message).into_response()
            }
            _ => (status, message).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            RestError::MethodNotAllowed(Method::POST).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            RestError::UnsupportedMediaType.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            RestError::from(ArticleError::DuplicateIdentifier(1)).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            RestError::from(ArticleError::InvalidDate).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::from(ArticleError::InvalidQueryPath).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RestError::ArticleNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = RestError::MethodNotAllowed(Method::GET).into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET");
    }

    #[test]
    fn test_malformed_body_message() {
        let err = serde_json::from_str::<crate::article::Article>("{").unwrap_err();
        let rest = RestError::from(err);

        assert_eq!(rest.status(), StatusCode::BAD_REQUEST);
        assert!(rest.to_string().contains("EOF"));
    }
}
