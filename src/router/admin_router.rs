use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::admin_handler::{
    create_admin_handler, delete_admin_handler, get_admin_handler, list_admins_handler,
    update_admin_handler,
};
use crate::repository::admin_repo::AdminRepository;

pub fn admin_router(repo: Arc<dyn AdminRepository>) -> Router {
    Router::new()
        .route(
            "/api/admins",
            post(create_admin_handler).get(list_admins_handler),
        )
        .route(
            "/api/admins/{id}",
            get(get_admin_handler)
                .put(update_admin_handler)
                .delete(delete_admin_handler),
        )
        .with_state(repo)
}
