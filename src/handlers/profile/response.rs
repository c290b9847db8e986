//! Profile response DTOs

use serde::Serialize;

use crate::models::Representative;

/// Profile fields exposed over the wire (snake_case, no password hash)
#[derive(Debug, Serialize)]
pub struct ProfileBody {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub representative_type: String,
    pub college: Option<String>,
    pub school: Option<String>,
    pub district: String,
    pub state: String,
    pub year_of_study: Option<String>,
}

impl From<Representative> for ProfileBody {
    fn from(rep: Representative) -> Self {
        Self {
            name: rep.name,
            email: rep.email,
            phone: rep.phone,
            representative_type: rep.representative_type,
            college: rep.college,
            school: rep.school,
            district: rep.district,
            state: rep.state,
            year_of_study: rep.year_of_study,
        }
    }
}

/// Profile envelope
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub status: &'static str,
    pub profile: ProfileBody,
}
