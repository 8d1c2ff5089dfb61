use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use vet_domain::pagination::PagerError;

/// Employees service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum EmployeesServiceError {
    #[error("profile not found")]
    ProfileNotFound,
    #[error("role not found")]
    RoleNotFound,
    #[error("address not found")]
    AddressNotFound,
    #[error("avatar not found")]
    AvatarNotFound,
    #[error("catalog position not found")]
    CatalogPositionNotFound,
    #[error("profile already exists")]
    ProfileAlreadyExists,
    #[error("a position with the same name already exists")]
    CatalogPositionAlreadyExists,
    #[error("invalid id")]
    InvalidId,
    #[error("{0}")]
    InvalidPager(#[from] PagerError),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("invalid body: {0}")]
    InvalidBody(String),
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("image is required")]
    MissingImage,
    #[error("image is greater than {max} bytes")]
    ImageTooLarge { max: usize },
    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl EmployeesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::RoleNotFound => "ROLE_NOT_FOUND",
            Self::AddressNotFound => "ADDRESS_NOT_FOUND",
            Self::AvatarNotFound => "AVATAR_NOT_FOUND",
            Self::CatalogPositionNotFound => "CATALOG_POSITION_NOT_FOUND",
            Self::ProfileAlreadyExists => "PROFILE_ALREADY_EXISTS",
            Self::CatalogPositionAlreadyExists => "CATALOG_POSITION_ALREADY_EXISTS",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidPager(_) => "INVALID_PAGER",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::MissingImage => "MISSING_IMAGE",
            Self::ImageTooLarge { .. } => "IMAGE_TOO_LARGE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::ProfileNotFound
            | Self::RoleNotFound
            | Self::AddressNotFound
            | Self::AvatarNotFound
            | Self::CatalogPositionNotFound => StatusCode::NOT_FOUND,
            Self::ProfileAlreadyExists | Self::CatalogPositionAlreadyExists => {
                StatusCode::CONFLICT
            }
            Self::InvalidId
            | Self::InvalidPager(_)
            | Self::InvalidQuery(_)
            | Self::InvalidBody(_)
            | Self::Validation(_)
            | Self::MissingImage
            | Self::ImageTooLarge { .. } => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for EmployeesServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<MultipartRejection> for EmployeesServiceError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<MultipartError> for EmployeesServiceError {
    fn from(error: MultipartError) -> Self {
        Self::InvalidBody(error.body_text())
    }
}

impl IntoResponse for EmployeesServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(ref e) = self {
            tracing::error!(error = format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
