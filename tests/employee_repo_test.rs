use workforce_backend::config::mongo_conf::MongoConfig;
use workforce_backend::model::employee::Employee;
use workforce_backend::repository::employee_repo::{EmployeeRepository, MongoEmployeeRepository};
use workforce_backend::repository::repository_error::{RepositoryError, RepositoryResult};

async fn setup_employee_repository() -> RepositoryResult<MongoEmployeeRepository> {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();
    let config = MongoConfig::from_env()
        .map_err(|e| RepositoryError::database(format!("Failed to load MongoConfig: {}", e)))?;
    MongoEmployeeRepository::new(&config).await.map_err(|e| {
        RepositoryError::connection(format!("Failed to setup MongoEmployeeRepository: {}", e))
    })
}

#[tokio::test]
async fn test_employee_repository_workflow() {
    let repo = setup_employee_repository()
        .await
        .expect("Failed to setup employee repository");

    // Start from a clean collection
    repo.delete_all().await.expect("Failed to clear employees");
    assert_eq!(repo.count().await.expect("Failed to count"), 0);

    // Create an employee; identifier and timestamps are store-assigned
    let employee = Employee::new(
        "John",
        "Doe",
        "john.doe@example.com",
        Some("Engineering".to_string()),
        Some(50000.0),
    );
    let created = repo.create(employee).await.expect("Failed to create employee");
    assert!(created.id.is_some());
    assert_eq!(created.created_at, created.updated_at);
    let employee_id = created.id.unwrap().to_hex();

    // Lookup by email
    let by_email = repo
        .find_by_email("john.doe@example.com")
        .await
        .expect("Failed to find by email")
        .expect("Employee not found by email");
    assert_eq!(by_email.first_name, "John");
    assert_eq!(by_email.department, Some("Engineering".to_string()));

    // No uniqueness on email: a second employee with the same address is fine
    let twin = repo
        .create(Employee::new(
            "Johnny",
            "Doeson",
            "john.doe@example.com",
            Some("Sales".to_string()),
            None,
        ))
        .await
        .expect("Duplicate email must be allowed");
    assert!(twin.id.is_some());
    assert_ne!(twin.id, created.id);

    let all = repo.find_all().await.expect("Failed to list employees");
    assert_eq!(all.len(), 2);

    // Full update that only changes department and salary; names and email
    // ride along unchanged, created_at survives, updated_at moves
    let stored = repo
        .find_by_id(&employee_id)
        .await
        .expect("Failed to find by id")
        .expect("Employee not found by id");
    let mut update = stored.clone();
    update.department = Some("HR".to_string());
    update.salary = Some(55000.0);
    let updated = repo
        .update(&employee_id, update)
        .await
        .expect("Failed to update employee");
    assert_eq!(updated.first_name, "John");
    assert_eq!(updated.last_name, "Doe");
    assert_eq!(updated.email, "john.doe@example.com");
    assert_eq!(updated.department, Some("HR".to_string()));
    assert_eq!(updated.salary, Some(55000.0));
    assert_eq!(updated.created_at, stored.created_at);
    assert!(updated.updated_at >= stored.updated_at);

    // Omitted optional fields are overwritten with null, not merged
    let mut clearing = updated.clone();
    clearing.department = None;
    clearing.salary = None;
    let cleared = repo
        .update(&employee_id, clearing)
        .await
        .expect("Failed to clear optional fields");
    assert_eq!(cleared.department, None);
    assert_eq!(cleared.salary, None);

    // Misses are absent results, never errors: a well-formed but unknown id
    // and a string the store could never have produced behave the same
    let absent = bson::oid::ObjectId::new().to_hex();
    assert!(repo.find_by_id(&absent).await.expect("Lookup must not fail").is_none());
    assert!(repo.find_by_id("999").await.expect("Lookup must not fail").is_none());
    assert!(!repo.exists("999").await.expect("Existence check must not fail"));

    let err = repo.delete(&absent).await.expect_err("Delete of missing id must fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));

    let ghost = Employee::new("Ghost", "Nobody", "ghost@example.com", None, None);
    let err = repo
        .update("999", ghost)
        .await
        .expect_err("Update of missing id must fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));

    // Delete, then the id is gone
    assert!(repo.exists(&employee_id).await.expect("Failed to check existence"));
    repo.delete(&employee_id).await.expect("Failed to delete employee");
    assert!(repo
        .find_by_id(&employee_id)
        .await
        .expect("Lookup must not fail")
        .is_none());

    repo.delete_all().await.expect("Failed to clear employees");
    assert_eq!(repo.count().await.expect("Failed to count"), 0);
}
