pub mod admin_router;
pub mod employee_router;
