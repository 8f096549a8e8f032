use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::mongo_conf::MongoConfig;
use crate::config::postgres_conf::PostgresConfig;
use crate::repository::admin_repo::{AdminRepository, PgAdminRepository};
use crate::repository::employee_repo::{EmployeeRepository, MongoEmployeeRepository};
use crate::router::admin_router::admin_router;
use crate::router::employee_router::employee_router;

pub struct App {
    config: AppConfig,
    router: Router,
    pub admin_repo: Arc<dyn AdminRepository>,
    pub employee_repo: Arc<dyn EmployeeRepository>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();

        let postgres_config = PostgresConfig::from_env().expect("Postgres config error");
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");

        let admin_repo: Arc<dyn AdminRepository> = Arc::new(
            PgAdminRepository::new(&postgres_config)
                .await
                .expect("Admin repo error"),
        );
        let employee_repo: Arc<dyn EmployeeRepository> = Arc::new(
            MongoEmployeeRepository::new(&mongo_config)
                .await
                .expect("Employee repo error"),
        );

        let router = Router::new()
            .merge(admin_router(admin_repo.clone()))
            .merge(employee_router(employee_repo.clone()))
            .route("/health", get(|| async { "OK" }));

        App {
            config,
            router,
            admin_repo,
            employee_repo,
        }
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
