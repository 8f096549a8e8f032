use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::employee_handler::{
    create_employee_handler, delete_employee_handler, get_employee_handler,
    list_employees_handler, update_employee_handler,
};
use crate::repository::employee_repo::EmployeeRepository;

pub fn employee_router(repo: Arc<dyn EmployeeRepository>) -> Router {
    Router::new()
        .route(
            "/api/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route(
            "/api/employees/{id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .with_state(repo)
}
