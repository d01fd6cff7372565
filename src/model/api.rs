use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every non-2xx response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub detail: String,
}
