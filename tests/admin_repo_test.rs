use workforce_backend::config::postgres_conf::PostgresConfig;
use workforce_backend::model::admin::Admin;
use workforce_backend::repository::admin_repo::{AdminRepository, PgAdminRepository};
use workforce_backend::repository::repository_error::{RepositoryError, RepositoryResult};

async fn setup_admin_repository() -> RepositoryResult<PgAdminRepository> {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();
    let config = PostgresConfig::from_env()
        .map_err(|e| RepositoryError::database(format!("Failed to load PostgresConfig: {}", e)))?;
    PgAdminRepository::new(&config)
        .await
        .map_err(|e| RepositoryError::connection(format!("Failed to setup PgAdminRepository: {}", e)))
}

#[tokio::test]
async fn test_admin_repository_workflow() {
    let repo = setup_admin_repository().await.expect("Failed to setup admin repository");

    // Start from a clean table
    repo.delete_all().await.expect("Failed to clear admins");
    assert_eq!(repo.count().await.expect("Failed to count"), 0);

    // Create an admin; id, timestamps and the active flag are store-assigned
    let admin = Admin::new(
        "admin01",
        "admin01@example.com",
        "password123",
        Some("John Admin".to_string()),
        Some("SUPER_ADMIN".to_string()),
    );
    let created = repo.create(admin).await.expect("Failed to create admin");
    assert!(created.id.is_some());
    assert!(created.active);
    assert_eq!(created.username, "admin01");
    assert_eq!(created.password, "password123");
    assert!(created.created_at.is_some());
    assert_eq!(created.created_at, created.updated_at);
    let admin_id = created.id.unwrap();

    // Lookups by id and by natural keys
    let by_id = repo.find_by_id(admin_id).await.expect("Failed to find by id");
    assert_eq!(by_id.as_ref().and_then(|a| a.id), Some(admin_id));

    let by_username = repo
        .find_by_username("admin01")
        .await
        .expect("Failed to find by username")
        .expect("Admin not found by username");
    assert_eq!(by_username.email, "admin01@example.com");

    let by_email = repo
        .find_by_email("admin01@example.com")
        .await
        .expect("Failed to find by email")
        .expect("Admin not found by email");
    assert_eq!(by_email.username, "admin01");

    // Duplicate username (different email) is rejected
    let dup_username = Admin::new(
        "admin01",
        "other@example.com",
        "password456",
        None,
        None,
    );
    let err = repo.create(dup_username).await.expect_err("Duplicate username must fail");
    assert!(matches!(err, RepositoryError::AlreadyExists(_)), "got {:?}", err);

    // Duplicate email (different username) is rejected too
    let dup_email = Admin::new("admin02", "admin01@example.com", "password456", None, None);
    let err = repo.create(dup_email).await.expect_err("Duplicate email must fail");
    assert!(matches!(err, RepositoryError::AlreadyExists(_)), "got {:?}", err);

    // A second valid admin goes through
    let second = repo
        .create(Admin::new(
            "admin02",
            "admin02@example.com",
            "password456",
            Some("Jane Admin".to_string()),
            Some("ADMIN".to_string()),
        ))
        .await
        .expect("Failed to create second admin");
    assert!(second.id.unwrap() > admin_id);

    let all = repo.find_all().await.expect("Failed to list admins");
    assert_eq!(all.len(), 2);

    // Full-field update: identifier and created_at survive, updated_at moves
    let mut update = created.clone();
    update.full_name = Some("John Updated".to_string());
    update.role = Some("ADMIN".to_string());
    update.password = "newpassword123".to_string();
    update.active = false;
    let updated = repo.update(admin_id, update).await.expect("Failed to update admin");
    assert_eq!(updated.id, Some(admin_id));
    assert_eq!(updated.full_name, Some("John Updated".to_string()));
    assert_eq!(updated.password, "newpassword123");
    assert!(!updated.active);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    // A deactivated admin is still persisted and queryable
    assert!(repo.exists(admin_id).await.expect("Failed to check existence"));

    // Misses are absent results, not errors
    assert!(repo.find_by_id(999_999).await.expect("Lookup must not fail").is_none());
    assert!(!repo.exists(999_999).await.expect("Existence check must not fail"));

    // update/delete of a missing id report NotFound
    let err = repo
        .update(999_999, Admin::new("ghost", "ghost@example.com", "x", None, None))
        .await
        .expect_err("Update of missing id must fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));

    let err = repo.delete(999_999).await.expect_err("Delete of missing id must fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));

    // Delete, then the id is gone
    repo.delete(admin_id).await.expect("Failed to delete admin");
    assert!(repo.find_by_id(admin_id).await.expect("Lookup must not fail").is_none());

    repo.delete_all().await.expect("Failed to clear admins");
    assert_eq!(repo.count().await.expect("Failed to count"), 0);
}
