//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Representative registration request
///
/// Field names match the registration form wire format.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "representative type is required"))]
    pub representative_type: String,

    pub college: Option<String>,

    pub school: Option<String>,

    #[validate(length(min = 1, message = "district is required"))]
    pub district: String,

    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,

    pub year_of_study: Option<String>,
}

/// Sign-in request, shared by both roles
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}
