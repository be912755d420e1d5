use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Return `404 Not Found`
    #[error("request path not found")]
    NotFound,

    /// Automatically return `500 Internal Server Error` on a `sqlx::Error`
    ///
    /// Via the generated `From<sqlx::Error> for Error` impl,
    /// this allows using `?` on the database calls in handler functions without a manual mapping
    /// step.
    ///
    /// The actual error message isn't returned to the client for security reasons.
    /// It should be logged instead
    #[error("an error occurred with the database")]
    Sqlx(#[from] sqlx::Error),

    /// Return `500 Internal Server Error`
    #[error("an internal server error has occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Sqlx(_) | Self::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> String {
        match self {
            Self::NotFound => "Not Found",
            _ => "Internal Server Error",
        }
        .to_string()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    title: String,
    status: u16,
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        if let Self::Sqlx(ref cause) = self {
            tracing::error!("database error: {cause:?}");
        }

        let status = self.status_code();
        (status, Json(ErrorBody::from(self))).into_response()
    }
}

impl From<Error> for ErrorBody {
    fn from(error: Error) -> Self {
        Self {
            title: error.title(),
            message: error.to_string(),
            status: error.status_code().as_u16(),
        }
    }
}
