use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub msg: String,
}

/// A plain confirmation message, returned by deletion endpoints
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// The confirmation message
    pub msg: String,
}
