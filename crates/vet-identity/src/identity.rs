//! Gateway-injected identity header extractor.

use axum::extract::FromRequestParts;
use http::request::Parts;

use vet_core::error::AppError;
use vet_domain::id::EmployeeId;

/// Header carrying the pre-authenticated employee id (24-char hex).
pub const USER_ID_HEADER: &str = "user-id";

/// Acting employee, taken from the `user-id` header.
///
/// Rejects with 400 when the header is absent or not a well-formed id, before
/// the handler body (and therefore any store call) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeIdentity {
    pub employee_id: EmployeeId,
}

impl<S> FromRequestParts<S> for EmployeeIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    // Extract synchronously and return a 'static future so the borrowed parts
    // are not captured.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let employee_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<EmployeeId>().ok());

        async move {
            let employee_id = employee_id
                .ok_or_else(|| AppError::BadRequest("invalid user-id header".to_owned()))?;
            Ok(Self { employee_id })
        }
    }
}
