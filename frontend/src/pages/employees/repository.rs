use std::rc::Rc;

use crate::api::{ApiClient, ApiError, CreateEmployeeRequest, Employee};

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn create(&self, request: &CreateEmployeeRequest) -> Result<Employee, ApiError> {
        self.client.create_employee(request).await
    }

    pub async fn delete(&self, employee_id: &str) -> Result<(), ApiError> {
        self.client.delete_employee(employee_id).await
    }
}
