use crate::config::mongo_conf::MongoConfig;
use crate::model::employee::Employee;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson};
use futures::stream::StreamExt;
use tracing::{error, info};

/// Persistence contract for employee records.
///
/// Identifiers are opaque strings assigned by the store. A string that
/// does not name any document (including one the store could never have
/// produced) is an absent identifier, not an error. No uniqueness is
/// enforced on `email`.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: Employee) -> RepositoryResult<Employee>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Employee>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>>;
    async fn find_all(&self) -> RepositoryResult<Vec<Employee>>;
    async fn update(&self, id: &str, employee: Employee) -> RepositoryResult<Employee>;
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
    async fn exists(&self, id: &str) -> RepositoryResult<bool>;
    async fn count(&self) -> RepositoryResult<u64>;
    async fn delete_all(&self) -> RepositoryResult<()>;
}

pub struct MongoEmployeeRepository {
    collection: mongodb::Collection<Employee>,
}

impl MongoEmployeeRepository {
    /// Create a new MongoEmployeeRepository using MongoConfig
    pub async fn new(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        use mongodb::{
            options::{ClientOptions, Credential, ResolverConfig},
            Client,
        };

        let mut client_options =
            ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare())
                .await?;
        client_options.app_name = Some("WorkforceBackend".to_string());
        client_options.max_pool_size = Some(config.pool_size);
        client_options.connect_timeout =
            Some(std::time::Duration::from_secs(config.connection_timeout_secs));

        if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
            client_options.credential = Some(
                Credential::builder()
                    .username(username.clone())
                    .password(password.clone())
                    .build(),
            );
        }

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.database);
        let collection_name = config.employee_collection.as_deref().unwrap_or("employees");
        let collection = db.collection::<Employee>(collection_name);
        Ok(MongoEmployeeRepository { collection })
    }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    #[tracing::instrument(skip(self, employee), fields(email = %employee.email))]
    async fn create(&self, employee: Employee) -> RepositoryResult<Employee> {
        info!("Creating new employee");
        let mut new_employee = employee;
        // Identifier and audit timestamps are assigned here, regardless of
        // what the caller put in the record.
        new_employee.id = Some(ObjectId::new());
        let now = chrono::Utc::now();
        new_employee.created_at = now;
        new_employee.updated_at = now;

        match self.collection.insert_one(new_employee.clone(), None).await {
            Ok(_) => {
                info!("Employee created successfully with id {:?}", new_employee.id);
                Ok(new_employee)
            }
            Err(e) => {
                error!("Failed to create employee: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Employee>> {
        let oid = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            // Not a store-shaped identifier, so it names nothing
            Err(_) => return Ok(None),
        };
        let employee = self
            .collection
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(|e| {
                error!("Failed to find employee by id: {}", e);
                RepositoryError::from(e)
            })?;
        Ok(employee)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>> {
        let employee = self
            .collection
            .find_one(doc! { "email": email }, None)
            .await
            .map_err(|e| {
                error!("Failed to find employee by email: {}", e);
                RepositoryError::from(e)
            })?;
        Ok(employee)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        let mut cursor = self.collection.find(None, None).await.map_err(|e| {
            error!("Failed to list employees: {}", e);
            RepositoryError::from(e)
        })?;
        let mut employees = Vec::new();
        while let Some(employee) = cursor.next().await {
            match employee {
                Ok(e) => employees.push(e),
                Err(e) => {
                    error!("Failed to deserialize employee: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize employee: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} employees", employees.len());
        Ok(employees)
    }

    #[tracing::instrument(skip(self, employee))]
    async fn update(&self, id: &str, employee: Employee) -> RepositoryResult<Employee> {
        info!("Updating employee with id {}", id);
        let oid = ObjectId::parse_str(id).map_err(|_| {
            RepositoryError::not_found(format!("No employee found to update for id: {}", id))
        })?;

        let now = chrono::Utc::now();
        // Full-field overwrite, written out field by field. Optional fields
        // omitted by the caller land as null. _id and createdAt are never
        // part of the update document.
        let mut set = doc! {
            "firstName": employee.first_name.as_str(),
            "lastName": employee.last_name.as_str(),
            "email": employee.email.as_str(),
            "updatedAt": bson::DateTime::from_chrono(now),
        };
        match &employee.department {
            Some(department) => set.insert("department", department.as_str()),
            None => set.insert("department", Bson::Null),
        };
        match employee.salary {
            Some(salary) => set.insert("salary", salary),
            None => set.insert("salary", Bson::Null),
        };

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": set }, None)
            .await
            .map_err(|e| {
                error!("Failed to update employee: {}", e);
                RepositoryError::from(e)
            })?;

        if result.matched_count == 0 {
            error!("No employee found to update for id {}", id);
            return Err(RepositoryError::not_found(format!(
                "No employee found to update for id: {}",
                id
            )));
        }

        // Read back the stored record so the caller sees the untouched
        // createdAt next to the refreshed updatedAt.
        match self.collection.find_one(doc! { "_id": oid }, None).await? {
            Some(updated) => {
                info!("Employee updated successfully for id {}", id);
                Ok(updated)
            }
            None => Err(RepositoryError::not_found(format!(
                "No employee found to update for id: {}",
                id
            ))),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        info!("Deleting employee with id {}", id);
        let oid = ObjectId::parse_str(id).map_err(|_| {
            RepositoryError::not_found(format!("No employee found to delete for id: {}", id))
        })?;
        let result = self
            .collection
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(|e| {
                error!("Failed to delete employee: {}", e);
                RepositoryError::from(e)
            })?;
        if result.deleted_count > 0 {
            info!("Employee deleted successfully for id {}", id);
            Ok(())
        } else {
            error!("No employee found to delete for id {}", id);
            Err(RepositoryError::not_found(format!(
                "No employee found to delete for id: {}",
                id
            )))
        }
    }

    #[tracing::instrument(skip(self))]
    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        let oid = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => return Ok(false),
        };
        let count = self
            .collection
            .count_documents(doc! { "_id": oid }, None)
            .await?;
        Ok(count > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        let count = self.collection.count_documents(None, None).await.map_err(|e| {
            error!("Failed to count employees: {}", e);
            RepositoryError::from(e)
        })?;
        Ok(count)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_all(&self) -> RepositoryResult<()> {
        self.collection.delete_many(doc! {}, None).await?;
        info!("Deleted all employees");
        Ok(())
    }
}
