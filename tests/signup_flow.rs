use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use activities_website::database::bootstrap;
use activities_website::services::activities_service;
use activities_website::services::signup_service::{self, SignupError};

async fn seeded_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Pool creation failed");
    bootstrap::prepare(&pool).await.expect("Seed failed");
    pool
}

#[tokio::test]
async fn catalog_lists_all_seeded_activities() {
    let pool = seeded_pool().await;

    let catalog = activities_service::load_catalog(&pool)
        .await
        .expect("Catalog load failed");

    for name in ["Basketball", "Tennis Club", "Debate Team", "Science Club"] {
        assert!(catalog.contains_key(name), "missing activity: {}", name);
    }

    let basketball = &catalog["Basketball"];
    assert!(!basketball.description.is_empty());
    assert!(!basketball.schedule.is_empty());
    assert_eq!(basketball.max_participants, 15);
    assert!(basketball
        .participants
        .contains(&"james@mergington.edu".to_string()));
}

#[tokio::test]
async fn signup_appends_participant() {
    let pool = seeded_pool().await;

    let message = signup_service::signup(&pool, "Chess Club", "newstudent@mergington.edu")
        .await
        .expect("Signup failed");
    assert_eq!(message, "Signed up newstudent@mergington.edu for Chess Club");

    let catalog = activities_service::load_catalog(&pool).await.unwrap();
    let roster = &catalog["Chess Club"].participants;
    assert!(roster.contains(&"newstudent@mergington.edu".to_string()));
    // New signups land at the end of the roster.
    assert_eq!(roster.last().unwrap(), "newstudent@mergington.edu");
}

#[tokio::test]
async fn duplicate_signup_is_rejected_without_duplicating() {
    let pool = seeded_pool().await;

    let err = signup_service::signup(&pool, "Basketball", "james@mergington.edu")
        .await
        .expect_err("Duplicate signup should fail");
    assert!(matches!(err, SignupError::AlreadySignedUp));

    let catalog = activities_service::load_catalog(&pool).await.unwrap();
    let count = catalog["Basketball"]
        .participants
        .iter()
        .filter(|email| *email == "james@mergington.edu")
        .count();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn signup_unknown_activity_does_not_mutate() {
    let pool = seeded_pool().await;
    let before = activities_service::load_catalog(&pool).await.unwrap();

    let err = signup_service::signup(&pool, "Knitting Circle", "student@mergington.edu")
        .await
        .expect_err("Unknown activity should fail");
    assert!(matches!(err, SignupError::ActivityNotFound));

    let after = activities_service::load_catalog(&pool).await.unwrap();
    assert_eq!(before.len(), after.len());
    for (name, view) in &before {
        assert_eq!(view.participants, after[name].participants);
    }
}

#[tokio::test]
async fn unregister_removes_only_that_participant() {
    let pool = seeded_pool().await;

    let message = signup_service::unregister(&pool, "Debate Team", "alex@mergington.edu")
        .await
        .expect("Unregister failed");
    assert_eq!(message, "Removed alex@mergington.edu from Debate Team");

    let catalog = activities_service::load_catalog(&pool).await.unwrap();
    let roster = &catalog["Debate Team"].participants;
    assert!(!roster.contains(&"alex@mergington.edu".to_string()));
    assert!(roster.contains(&"ryan@mergington.edu".to_string()));
}

#[tokio::test]
async fn unregister_non_member_does_not_mutate() {
    let pool = seeded_pool().await;

    let err = signup_service::unregister(&pool, "Basketball", "notstudent@mergington.edu")
        .await
        .expect_err("Non-member unregister should fail");
    assert!(matches!(err, SignupError::NotSignedUp));

    let catalog = activities_service::load_catalog(&pool).await.unwrap();
    assert_eq!(catalog["Basketball"].participants.len(), 2);
}

#[tokio::test]
async fn unregister_unknown_activity_fails() {
    let pool = seeded_pool().await;

    let err = signup_service::unregister(&pool, "Knitting Circle", "student@mergington.edu")
        .await
        .expect_err("Unknown activity should fail");
    assert!(matches!(err, SignupError::ActivityNotFound));
}

#[tokio::test]
async fn signup_after_unregister_is_allowed_again() {
    let pool = seeded_pool().await;

    signup_service::unregister(&pool, "Basketball", "james@mergington.edu")
        .await
        .unwrap();
    signup_service::signup(&pool, "Basketball", "james@mergington.edu")
        .await
        .expect("Re-signup after unregister should succeed");

    let catalog = activities_service::load_catalog(&pool).await.unwrap();
    let roster = &catalog["Basketball"].participants;
    assert!(roster.contains(&"james@mergington.edu".to_string()));
    assert_eq!(roster.len(), 2);
}
