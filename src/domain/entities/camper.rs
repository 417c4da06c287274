//! Camper entity and its write inputs.

use validator::Validate;

use super::SignupDetail;

/// A camp participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camper {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl Camper {
    pub fn new(id: i64, name: String, age: i32) -> Self {
        Self { id, name, age }
    }
}

/// A camper with every signup it owns, each carrying its activity.
#[derive(Debug, Clone, PartialEq)]
pub struct CamperDetail {
    pub camper: Camper,
    pub signups: Vec<SignupDetail>,
}

/// Input data for creating a camper.
#[derive(Debug, Clone, Validate)]
pub struct NewCamper {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    #[validate(range(
        min = 8,
        max = 18,
        message = "must be between 8 and 18"
    ))]
    pub age: i32,
}

/// Partial update for a camper.
///
/// Only `name` and `age` are patchable. `None` leaves the field unchanged;
/// present values obey the same rules as [`NewCamper`].
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CamperPatch {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(range(
        min = 8,
        max = 18,
        message = "must be between 8 and 18"
    ))]
    pub age: Option<i32>,
}

impl CamperPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}
