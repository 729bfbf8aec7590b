mod common;

use business_service::business::errors::BusinessError;
use business_service::business::models::Business;
use business_service::business::models::BusinessId;
use business_service::business::models::BusinessName;
use business_service::business::models::Location;
use business_service::business::ports::BusinessRepository;
use business_service::repositories::PostgresBusinessRepository;
use business_service::repositories::PostgresUserRepository;
use business_service::user::errors::UserError;
use business_service::user::models::EmailAddress;
use business_service::user::models::FullName;
use business_service::user::models::User;
use business_service::user::models::UserId;
use business_service::user::models::UserRole;
use business_service::user::ports::UserRepository;
use chrono::Utc;
use common::TestDb;

fn user(email: &str, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: UserId::new(),
        full_name: FullName::new("Test User".to_string()).unwrap(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        role,
        password_hash: "$argon2id$test_hash".to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn business(name: &str, owner: &User, members: Vec<UserId>) -> Business {
    let now = Utc::now();
    Business {
        id: BusinessId::new(),
        name: BusinessName::new(name.to_string()).unwrap(),
        location: Location::new(27.7172, 85.3240).unwrap(),
        owner_id: Some(owner.id),
        members,
        email: None,
        phone_number: None,
        display_picture: None,
        created_at: now,
        updated_at: now,
    }
}

async fn seeded_users(db: &TestDb, emails: &[&str]) -> (PostgresUserRepository, Vec<User>) {
    let repository = PostgresUserRepository::new(db.pool.clone());
    let mut users = Vec::new();
    for email in emails {
        users.push(
            repository
                .create(user(email, UserRole::Admin))
                .await
                .expect("Failed to seed user"),
        );
    }
    (repository, users)
}

#[tokio::test]
async fn test_user_create_and_lookup() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let created = repository
        .create(user("alice@example.com", UserRole::Supervisor))
        .await
        .unwrap();

    let by_id = repository.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email.as_str(), "alice@example.com");
    assert_eq!(by_id.role, UserRole::Supervisor);
    assert!(by_id.is_active);

    let by_email = repository
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, created.id);

    assert!(repository
        .find_by_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
    assert!(repository.find_by_id(&UserId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_duplicate_email_is_rejected() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    repository
        .create(user("alice@example.com", UserRole::Operator))
        .await
        .unwrap();
    let result = repository
        .create(user("alice@example.com", UserRole::Admin))
        .await;

    assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
}

#[tokio::test]
async fn test_inactive_user_is_hidden_from_active_lookup() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());
    let created = repository
        .create(user("bob@example.com", UserRole::Operator))
        .await
        .unwrap();

    assert!(repository
        .find_active_by_email("bob@example.com")
        .await
        .unwrap()
        .is_some());

    let deactivated = repository.set_active(&created.id, false).await.unwrap();
    assert!(!deactivated.is_active);

    assert!(repository
        .find_active_by_email("bob@example.com")
        .await
        .unwrap()
        .is_none());
    // The unfiltered lookup still sees the row
    let found = repository
        .find_by_email("bob@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(!found.is_active);

    repository.set_active(&created.id, true).await.unwrap();
    assert!(repository
        .find_active_by_email("bob@example.com")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_set_active_for_unknown_user() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let result = repository.set_active(&UserId::new(), false).await;

    assert!(matches!(result, Err(UserError::NotFound(_))));
}

#[tokio::test]
async fn test_business_create_persists_roster() {
    let db = TestDb::new().await;
    let (_, users) = seeded_users(&db, &["owner@example.com", "member@example.com"]).await;
    let repository = PostgresBusinessRepository::new(db.pool.clone());

    let created = repository
        .create(business("Clean Co", &users[0], vec![users[1].id]))
        .await
        .unwrap();

    let found = repository.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(found.name.as_str(), "Clean Co");
    assert_eq!(found.owner_id, Some(users[0].id));
    assert_eq!(found.members, vec![users[1].id]);
    assert_eq!(found.location, created.location);

    let by_name = repository.find_by_name("Clean Co").await.unwrap().unwrap();
    assert_eq!(by_name.id, created.id);
}

#[tokio::test]
async fn test_business_duplicate_name_is_rejected() {
    let db = TestDb::new().await;
    let (_, users) = seeded_users(&db, &["owner@example.com"]).await;
    let repository = PostgresBusinessRepository::new(db.pool.clone());

    repository
        .create(business("Clean Co", &users[0], vec![]))
        .await
        .unwrap();
    let result = repository
        .create(business("Clean Co", &users[0], vec![]))
        .await;

    assert!(matches!(result, Err(BusinessError::NameAlreadyExists(_))));
}

#[tokio::test]
async fn test_business_unknown_member_rolls_back_create() {
    let db = TestDb::new().await;
    let (_, users) = seeded_users(&db, &["owner@example.com"]).await;
    let repository = PostgresBusinessRepository::new(db.pool.clone());

    let result = repository
        .create(business("Ghost Co", &users[0], vec![UserId::new()]))
        .await;

    assert!(matches!(result, Err(BusinessError::UnknownMember(_))));
    assert!(repository.find_by_name("Ghost Co").await.unwrap().is_none());
}

#[tokio::test]
async fn test_business_update_replaces_roster() {
    let db = TestDb::new().await;
    let (_, users) = seeded_users(
        &db,
        &["owner@example.com", "first@example.com", "second@example.com"],
    )
    .await;
    let repository = PostgresBusinessRepository::new(db.pool.clone());

    let mut created = repository
        .create(business("Clean Co", &users[0], vec![users[1].id]))
        .await
        .unwrap();

    created.name = BusinessName::new("Sparkle Ltd".to_string()).unwrap();
    created.members = vec![users[2].id];
    repository.update(created.clone()).await.unwrap();

    let found = repository.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(found.name.as_str(), "Sparkle Ltd");
    assert_eq!(found.members, vec![users[2].id]);
}

#[tokio::test]
async fn test_business_failed_update_keeps_previous_roster() {
    let db = TestDb::new().await;
    let (_, users) = seeded_users(&db, &["owner@example.com", "member@example.com"]).await;
    let repository = PostgresBusinessRepository::new(db.pool.clone());

    let mut created = repository
        .create(business("Clean Co", &users[0], vec![users[1].id]))
        .await
        .unwrap();

    created.name = BusinessName::new("Renamed Co".to_string()).unwrap();
    created.members = vec![users[1].id, UserId::new()];
    let result = repository.update(created.clone()).await;
    assert!(matches!(result, Err(BusinessError::UnknownMember(_))));

    let found = repository.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(found.name.as_str(), "Clean Co");
    assert_eq!(found.members, vec![users[1].id]);
}

#[tokio::test]
async fn test_business_update_name_collision() {
    let db = TestDb::new().await;
    let (_, users) = seeded_users(&db, &["owner@example.com"]).await;
    let repository = PostgresBusinessRepository::new(db.pool.clone());

    repository
        .create(business("Clean Co", &users[0], vec![]))
        .await
        .unwrap();
    let mut other = repository
        .create(business("Sparkle Ltd", &users[0], vec![]))
        .await
        .unwrap();

    other.name = BusinessName::new("Clean Co".to_string()).unwrap();
    let result = repository.update(other).await;

    assert!(matches!(result, Err(BusinessError::NameAlreadyExists(_))));
}

#[tokio::test]
async fn test_business_list_and_delete() {
    let db = TestDb::new().await;
    let (_, users) = seeded_users(
        &db,
        &["owner@example.com", "other@example.com", "member@example.com"],
    )
    .await;
    let repository = PostgresBusinessRepository::new(db.pool.clone());

    let first = repository
        .create(business("Clean Co", &users[0], vec![users[2].id]))
        .await
        .unwrap();
    repository
        .create(business("Sparkle Ltd", &users[1], vec![]))
        .await
        .unwrap();

    let owned = repository.list_by_owner(&users[0].id).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, first.id);
    assert_eq!(owned[0].members, vec![users[2].id]);

    repository.delete(&first.id).await.unwrap();
    assert!(repository.find_by_id(&first.id).await.unwrap().is_none());
    assert!(matches!(
        repository.delete(&first.id).await,
        Err(BusinessError::NotFound(_))
    ));

    let roster_rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM user_business_association WHERE business_id = $1",
    )
    .bind(first.id.0)
    .fetch_one(&db.pool)
    .await
    .unwrap();
    assert_eq!(roster_rows, 0);
}
