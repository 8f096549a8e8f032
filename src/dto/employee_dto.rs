use crate::model::employee::Employee;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1))]
    pub first_name: String,

    #[validate(length(min = 1))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Employee::new(
            req.first_name,
            req.last_name,
            req.email,
            req.department,
            req.salary,
        )
    }
}

/// Update payload: every caller-overwritable field; omitted optional
/// fields overwrite the stored values with null.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1))]
    pub first_name: String,

    #[validate(length(min = 1))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl From<UpdateEmployeeRequest> for Employee {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Employee::new(
            req.first_name,
            req.last_name,
            req.email,
            req.department,
            req.salary,
        )
    }
}

/// Wire shape for employee records: the store identifier goes out as its
/// hex string.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeResponse {
            id: employee.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            department: employee.department,
            salary: employee.salary,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;

    #[test]
    fn test_response_exposes_id_as_hex_string() {
        let mut employee = Employee::new("John", "Doe", "john.doe@example.com", None, None);
        let oid = ObjectId::new();
        employee.id = Some(oid);

        let response = EmployeeResponse::from(employee);
        assert_eq!(response.id, oid.to_hex());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json["id"].is_string());
    }
}
