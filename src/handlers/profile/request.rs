//! Profile request DTOs

use serde::Deserialize;
use validator::Validate;

/// Query string for profile reads
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub email: String,
}

/// Mutable profile fields; email and password do not change here
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Representative type is required"))]
    pub representative_type: String,

    pub college: Option<String>,
    pub school: Option<String>,

    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,

    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    pub year_of_study: Option<String>,
}
