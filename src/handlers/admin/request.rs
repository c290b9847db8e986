//! Administrator request DTOs

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Accept a point value sent either as a number or as the string the task
/// form produces.
fn flexible_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom("expected an integer")),
    }
}

/// Task creation request (camelCase wire contract)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadTaskRequest {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    /// Empty or absent means open-ended
    pub deadline: Option<String>,

    #[serde(deserialize_with = "flexible_int")]
    pub points: i64,

    /// Defaults to "individual" when the form omits it
    pub submission_type: Option<String>,
}

/// Point award request, addressed by (email, taskId)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePointsRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub task_id: String,

    #[serde(deserialize_with = "flexible_int")]
    pub points_awarded: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_accepts_number_and_string() {
        let req: UploadTaskRequest =
            serde_json::from_str(r#"{"title":"T","description":"D","points":50}"#).unwrap();
        assert_eq!(req.points, 50);

        let req: UploadTaskRequest =
            serde_json::from_str(r#"{"title":"T","description":"D","points":"75"}"#).unwrap();
        assert_eq!(req.points, 75);

        let bad = serde_json::from_str::<UploadTaskRequest>(
            r#"{"title":"T","description":"D","points":"many"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_update_points_wire_casing() {
        let req: UpdatePointsRequest = serde_json::from_str(
            r#"{"email":"a@x.com","taskId":"123","pointsAwarded":30}"#,
        )
        .unwrap();
        assert_eq!(req.task_id, "123");
        assert_eq!(req.points_awarded, 30);
    }
}
