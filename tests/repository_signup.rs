mod common;

use camp_signups::domain::entities::NewSignup;
use camp_signups::domain::repositories::SignupRepository;
use camp_signups::error::AppError;
use camp_signups::infrastructure::persistence::PgSignupRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_signup_loads_relations(pool: PgPool) {
    let camper = common::create_test_camper(&pool, "Alex", 12).await;
    let activity = common::create_test_activity(&pool, "Archery", 2).await;
    let repo = PgSignupRepository::new(Arc::new(pool));

    let detail = repo
        .create(NewSignup {
            camper_id: camper,
            activity_id: activity,
            time: 9,
        })
        .await
        .unwrap();

    assert_eq!(detail.signup.camper_id, camper);
    assert_eq!(detail.signup.activity_id, activity);
    assert_eq!(detail.signup.time, 9);
    assert_eq!(detail.camper.name, "Alex");
    assert_eq!(detail.activity.name, "Archery");
}

#[sqlx::test]
async fn test_create_signup_foreign_key_violation_rolls_back(pool: PgPool) {
    let camper = common::create_test_camper(&pool, "Alex", 12).await;
    let repo = PgSignupRepository::new(Arc::new(pool));

    let result = repo
        .create(NewSignup {
            camper_id: camper,
            activity_id: 12345,
            time: 9,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_list_for_camper(pool: PgPool) {
    let alex = common::create_test_camper(&pool, "Alex", 12).await;
    let sam = common::create_test_camper(&pool, "Sam", 15).await;
    let archery = common::create_test_activity(&pool, "Archery", 2).await;
    let hiking = common::create_test_activity(&pool, "Hiking", 1).await;
    common::create_test_signup(&pool, alex, archery, 9).await;
    common::create_test_signup(&pool, alex, hiking, 11).await;
    common::create_test_signup(&pool, sam, hiking, 11).await;
    let repo = PgSignupRepository::new(Arc::new(pool));

    let signups = repo.list_for_camper(alex).await.unwrap();

    assert_eq!(signups.len(), 2);
    assert!(signups.iter().all(|s| s.camper.id == alex));
    assert_eq!(signups[0].activity.name, "Archery");
    assert_eq!(signups[1].activity.name, "Hiking");
    assert_eq!(repo.count().await.unwrap(), 3);
}
