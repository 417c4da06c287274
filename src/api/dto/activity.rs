//! DTOs for activities.

use serde::Serialize;

use crate::domain::entities::Activity;

/// Activity view, used both for listing and nested inside signups.
#[derive(Debug, Serialize)]
pub struct ActivityItem {
    pub id: i64,
    pub name: String,
    pub difficulty: i32,
}

impl From<Activity> for ActivityItem {
    fn from(a: Activity) -> Self {
        Self {
            id: a.id,
            name: a.name,
            difficulty: a.difficulty,
        }
    }
}
