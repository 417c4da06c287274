//! Signup entity: the association between a camper and an activity.

use validator::Validate;

use super::{Activity, Camper};

/// A camper booked onto an activity at `time` (hour of day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub id: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i32,
}

/// A signup with both sides of the association loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupDetail {
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}

/// Input data for creating a signup.
///
/// Referenced ids are checked by storage (foreign keys), not here.
#[derive(Debug, Clone, Validate)]
pub struct NewSignup {
    pub camper_id: i64,
    pub activity_id: i64,

    #[validate(range(
        min = 0,
        max = 23,
        message = "must be between 0 and 23"
    ))]
    pub time: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_at(time: i32) -> NewSignup {
        NewSignup {
            camper_id: 1,
            activity_id: 1,
            time,
        }
    }

    #[test]
    fn test_time_bounds_accepted() {
        assert!(signup_at(0).validate().is_ok());
        assert!(signup_at(23).validate().is_ok());
    }

    #[test]
    fn test_time_out_of_range_rejected() {
        for time in [-1, 24, 25] {
            let errors = signup_at(time).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("time"));
        }
    }
}
