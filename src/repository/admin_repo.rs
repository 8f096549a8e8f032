use crate::config::postgres_conf::PostgresConfig;
use crate::model::admin::Admin;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info};

/// Persistence contract for administrative accounts.
///
/// The repository owns identifier assignment and the audit timestamps;
/// callers never supply either. Lookups return `Option` (a miss is not an
/// error), while `update`/`delete` report a missing identifier as
/// `RepositoryError::NotFound`.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, admin: Admin) -> RepositoryResult<Admin>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Admin>>;
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<Admin>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Admin>>;
    async fn find_all(&self) -> RepositoryResult<Vec<Admin>>;
    async fn update(&self, id: i64, admin: Admin) -> RepositoryResult<Admin>;
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
    async fn exists(&self, id: i64) -> RepositoryResult<bool>;
    async fn count(&self) -> RepositoryResult<u64>;
    async fn delete_all(&self) -> RepositoryResult<()>;
}

pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    /// Create a new PgAdminRepository using PostgresConfig.
    ///
    /// Builds the connection pool and applies pending migrations.
    pub async fn new(config: &PostgresConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

        Ok(PgAdminRepository { pool })
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[tracing::instrument(skip(self, admin), fields(username = %admin.username))]
    async fn create(&self, admin: Admin) -> RepositoryResult<Admin> {
        info!("Creating new admin");
        let now = Utc::now();
        // id comes from the sequence, active is forced on, both audit
        // timestamps start equal. Caller-supplied values for those fields
        // are ignored.
        let created = sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (username, email, password, full_name, role, active, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, TRUE, $6, $6)
                RETURNING id, username, email, password, full_name, role, active,
                    created_at, updated_at",
        )
        .bind(&admin.username)
        .bind(&admin.email)
        .bind(&admin.password)
        .bind(&admin.full_name)
        .bind(&admin.role)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create admin: {}", e);
            RepositoryError::from(e)
        })?;
        info!("Admin created successfully with id {:?}", created.id);
        Ok(created)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, email, password, full_name, role, active,
                    created_at, updated_at
                FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, email, password, full_name, role, active,
                    created_at, updated_at
                FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, email, password, full_name, role, active,
                    created_at, updated_at
                FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<Admin>> {
        let admins = sqlx::query_as::<_, Admin>(
            "SELECT id, username, email, password, full_name, role, active,
                    created_at, updated_at
                FROM admins ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        info!("Fetched {} admins", admins.len());
        Ok(admins)
    }

    #[tracing::instrument(skip(self, admin))]
    async fn update(&self, id: i64, admin: Admin) -> RepositoryResult<Admin> {
        info!("Updating admin with id {}", id);
        let now = Utc::now();
        // Full-field overwrite: every caller-overwritable column is written
        // from the payload. id and created_at are never touched.
        let updated = sqlx::query_as::<_, Admin>(
            "UPDATE admins
                SET username = $2, email = $3, password = $4, full_name = $5,
                    role = $6, active = $7, updated_at = $8
                WHERE id = $1
                RETURNING id, username, email, password, full_name, role, active,
                    created_at, updated_at",
        )
        .bind(id)
        .bind(&admin.username)
        .bind(&admin.email)
        .bind(&admin.password)
        .bind(&admin.full_name)
        .bind(&admin.role)
        .bind(admin.active)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to update admin: {}", e);
            RepositoryError::from(e)
        })?;
        match updated {
            Some(admin) => {
                info!("Admin updated successfully for id {}", id);
                Ok(admin)
            }
            None => {
                error!("No admin found to update for id {}", id);
                Err(RepositoryError::not_found(format!(
                    "No admin found to update for id: {}",
                    id
                )))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        info!("Deleting admin with id {}", id);
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() > 0 {
            info!("Admin deleted successfully for id {}", id);
            Ok(())
        } else {
            error!("No admin found to delete for id {}", id);
            Err(RepositoryError::not_found(format!(
                "No admin found to delete for id: {}",
                id
            )))
        }
    }

    #[tracing::instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepositoryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM admins WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_all(&self) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM admins").execute(&self.pool).await?;
        info!("Deleted all admins");
        Ok(())
    }
}
