//! DTOs for campers.

use serde::{Deserialize, Serialize};

use crate::api::dto::signup::SignupResponse;
use crate::domain::entities::{Camper, CamperDetail, CamperPatch, NewCamper};
use crate::error::AppError;

/// Request body for `POST /campers`.
#[derive(Debug, Deserialize)]
pub struct CreateCamperRequest {
    pub name: String,
    pub age: i32,
}

impl From<CreateCamperRequest> for NewCamper {
    fn from(req: CreateCamperRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
        }
    }
}

/// Request body for `PATCH /campers/{id}`.
///
/// Only `name` and `age` are accepted; any other key is rejected. A key that
/// is present must carry a value: `null` is rejected rather than treated as
/// "unchanged".
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCamperRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub age: Option<Option<i32>>,
}

impl UpdateCamperRequest {
    /// Converts into a domain patch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is explicitly `null`.
    pub fn into_patch(self) -> Result<CamperPatch, AppError> {
        let mut nulls = Vec::new();
        if matches!(self.name, Some(None)) {
            nulls.push("name: must not be null".to_string());
        }
        if matches!(self.age, Some(None)) {
            nulls.push("age: must not be null".to_string());
        }
        if !nulls.is_empty() {
            return Err(AppError::bad_request("Invalid camper patch", nulls));
        }

        Ok(CamperPatch {
            name: self.name.flatten(),
            age: self.age.flatten(),
        })
    }
}

/// Camper view without relations: `{id, name, age}`.
#[derive(Debug, Serialize)]
pub struct CamperSummary {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl From<Camper> for CamperSummary {
    fn from(c: Camper) -> Self {
        Self {
            id: c.id,
            name: c.name,
            age: c.age,
        }
    }
}

/// Camper view with its signups: `{id, name, age, signups}`.
#[derive(Debug, Serialize)]
pub struct CamperDetailResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub signups: Vec<SignupResponse>,
}

impl From<CamperDetail> for CamperDetailResponse {
    fn from(detail: CamperDetail) -> Self {
        Self {
            id: detail.camper.id,
            name: detail.camper.name,
            age: detail.camper.age,
            signups: detail
                .signups
                .into_iter()
                .map(SignupResponse::from)
                .collect(),
        }
    }
}
