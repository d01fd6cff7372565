use axum::extract::{rejection::PathRejection, Path};

use crate::server::error::AppError;

/// Unwraps a race id path parameter, turning a rejection into a 400 response.
///
/// # Returns
/// - `Ok(i32)` - The race id
/// - `Err(AppError::BadRequest)` - The segment is not an integer
pub fn race_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    match path {
        Ok(Path(race_id)) => Ok(race_id),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
