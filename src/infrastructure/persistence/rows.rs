//! Row shapes shared by the PostgreSQL repositories.

use crate::domain::entities::{Activity, Camper, Signup, SignupDetail};

#[derive(Debug, sqlx::FromRow)]
pub(super) struct CamperRow {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl From<CamperRow> for Camper {
    fn from(row: CamperRow) -> Self {
        Camper::new(row.id, row.name, row.age)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct ActivityRow {
    pub id: i64,
    pub name: String,
    pub difficulty: i32,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity::new(row.id, row.name, row.difficulty)
    }
}

/// A signup joined with its camper and activity. See [`SIGNUP_DETAIL_SELECT`].
#[derive(Debug, sqlx::FromRow)]
pub(super) struct SignupDetailRow {
    pub id: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i32,
    pub camper_name: String,
    pub camper_age: i32,
    pub activity_name: String,
    pub activity_difficulty: i32,
}

impl From<SignupDetailRow> for SignupDetail {
    fn from(row: SignupDetailRow) -> Self {
        SignupDetail {
            signup: Signup {
                id: row.id,
                camper_id: row.camper_id,
                activity_id: row.activity_id,
                time: row.time,
            },
            camper: Camper::new(row.camper_id, row.camper_name, row.camper_age),
            activity: Activity::new(row.activity_id, row.activity_name, row.activity_difficulty),
        }
    }
}

/// Projection decoded by [`SignupDetailRow`]. Callers append a `WHERE` clause.
pub(super) const SIGNUP_DETAIL_SELECT: &str = r#"
    SELECT s.id, s.camper_id, s.activity_id, s.time,
           c.name AS camper_name, c.age AS camper_age,
           a.name AS activity_name, a.difficulty AS activity_difficulty
    FROM signups s
    JOIN campers c ON c.id = s.camper_id
    JOIN activities a ON a.id = s.activity_id
"#;
