use camp_signups::domain::entities::{CamperPatch, NewCamper};
use camp_signups::domain::repositories::CamperRepository;
use camp_signups::error::AppError;
use camp_signups::infrastructure::persistence::PgCamperRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_and_find_camper(pool: PgPool) {
    let repo = PgCamperRepository::new(Arc::new(pool));

    let created = repo
        .create(NewCamper {
            name: "Alex".to_string(),
            age: 12,
        })
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test]
async fn test_find_missing_camper(pool: PgPool) {
    let repo = PgCamperRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_schema_rejects_out_of_range_age(pool: PgPool) {
    let repo = PgCamperRepository::new(Arc::new(pool));

    // Bypasses service validation; the check constraint still applies.
    let result = repo
        .create(NewCamper {
            name: "Alex".to_string(),
            age: 30,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_list_campers_ordered(pool: PgPool) {
    let repo = PgCamperRepository::new(Arc::new(pool));

    for (name, age) in [("Alex", 12), ("Jordan", 9), ("Sam", 15)] {
        repo.create(NewCamper {
            name: name.to_string(),
            age,
        })
        .await
        .unwrap();
    }

    let campers = repo.list().await.unwrap();
    let names: Vec<_> = campers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alex", "Jordan", "Sam"]);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
async fn test_update_camper_partial(pool: PgPool) {
    let repo = PgCamperRepository::new(Arc::new(pool));
    let camper = repo
        .create(NewCamper {
            name: "Alex".to_string(),
            age: 12,
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            camper.id,
            CamperPatch {
                name: Some("Alexandra".to_string()),
                age: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Alexandra");
    assert_eq!(updated.age, 12);
}

#[sqlx::test]
async fn test_update_missing_camper(pool: PgPool) {
    let repo = PgCamperRepository::new(Arc::new(pool));

    let result = repo
        .update(
            999,
            CamperPatch {
                name: None,
                age: Some(10),
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_rejected_update_leaves_row_unchanged(pool: PgPool) {
    let repo = PgCamperRepository::new(Arc::new(pool));
    let camper = repo
        .create(NewCamper {
            name: "Alex".to_string(),
            age: 12,
        })
        .await
        .unwrap();

    let result = repo
        .update(
            camper.id,
            CamperPatch {
                name: Some("Changed".to_string()),
                age: Some(5),
            },
        )
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    let unchanged = repo.find_by_id(camper.id).await.unwrap().unwrap();
    assert_eq!(unchanged, camper);
}
