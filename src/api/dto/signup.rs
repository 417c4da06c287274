//! DTOs for signups.

use serde::{Deserialize, Serialize};

use crate::api::dto::activity::ActivityItem;
use crate::api::dto::camper::CamperSummary;
use crate::domain::entities::{NewSignup, SignupDetail};

/// Request body for `POST /signups`.
#[derive(Debug, Deserialize)]
pub struct CreateSignupRequest {
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i32,
}

impl From<CreateSignupRequest> for NewSignup {
    fn from(req: CreateSignupRequest) -> Self {
        Self {
            camper_id: req.camper_id,
            activity_id: req.activity_id,
            time: req.time,
        }
    }
}

/// Signup view: `{id, camper_id, activity_id, time, activity, camper}`.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i32,
    pub activity: ActivityItem,
    pub camper: CamperSummary,
}

impl From<SignupDetail> for SignupResponse {
    fn from(detail: SignupDetail) -> Self {
        Self {
            id: detail.signup.id,
            camper_id: detail.signup.camper_id,
            activity_id: detail.signup.activity_id,
            time: detail.signup.time,
            activity: detail.activity.into(),
            camper: detail.camper.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Activity, Camper, Signup};
    use serde_json::json;

    #[test]
    fn test_signup_view_nests_bare_relations() {
        let detail = SignupDetail {
            signup: Signup {
                id: 7,
                camper_id: 1,
                activity_id: 2,
                time: 9,
            },
            camper: Camper::new(1, "Alex".to_string(), 12),
            activity: Activity::new(2, "Archery".to_string(), 3),
        };

        let value = serde_json::to_value(SignupResponse::from(detail)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "camper_id": 1,
                "activity_id": 2,
                "time": 9,
                "activity": {"id": 2, "name": "Archery", "difficulty": 3},
                "camper": {"id": 1, "name": "Alex", "age": 12}
            })
        );
        assert!(value["camper"].get("signups").is_none());
    }
}
