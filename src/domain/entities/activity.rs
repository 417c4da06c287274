//! Activity entity.

use validator::Validate;

/// An activity campers can sign up for.
///
/// Activities are never patched; they are created (seeded) and deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub difficulty: i32,
}

impl Activity {
    pub fn new(id: i64, name: String, difficulty: i32) -> Self {
        Self {
            id,
            name,
            difficulty,
        }
    }
}

/// Input data for creating an activity.
#[derive(Debug, Clone, Validate)]
pub struct NewActivity {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub difficulty: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_activity_valid() {
        let activity = NewActivity {
            name: "Archery".to_string(),
            difficulty: 2,
        };
        assert!(activity.validate().is_ok());
    }

    #[test]
    fn test_new_activity_empty_name() {
        let activity = NewActivity {
            name: String::new(),
            difficulty: 2,
        };
        assert!(activity.validate().is_err());
    }
}
