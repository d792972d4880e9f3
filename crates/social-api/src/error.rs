use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use social_core::CoreError;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("postedBy is required")]
    MissingAuthor,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Core(CoreError::InvalidInput(_) | CoreError::NotFound(_))
            | Self::MissingAuthor => StatusCode::BAD_REQUEST,
            Self::Core(CoreError::DuplicateUsername(_)) => StatusCode::CONFLICT,
            Self::Core(CoreError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Core(CoreError::Storage(_)) | Self::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to the client.
    fn user_message(&self) -> &'static str {
        match self {
            Self::Core(CoreError::InvalidInput(_) | CoreError::NotFound(_))
            | Self::MissingAuthor => "Client Error",
            Self::Core(CoreError::DuplicateUsername(_)) => "Duplicate username",
            Self::Core(CoreError::InvalidCredentials) => "",
            Self::Core(CoreError::Storage(_)) | Self::Join(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, self.user_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_rejections_map_to_status_codes() {
        let cases = [
            (CoreError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (CoreError::DuplicateUsername("alice".into()), StatusCode::CONFLICT),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::NotFound(1), StatusCode::BAD_REQUEST),
            (CoreError::Storage(anyhow::anyhow!("io")), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn storage_details_stay_out_of_the_body() {
        let err = ApiError::from(CoreError::Storage(anyhow::anyhow!("disk /var/db corrupt")));
        assert_eq!(err.user_message(), "Internal Server Error");
    }
}
