use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployeeRequest, Employee},
};

/// Characters that must not appear raw inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn employee_path(base_url: &str, employee_id: &str) -> String {
    format!(
        "{}/employees/{}",
        base_url,
        utf8_percent_encode(employee_id, PATH_SEGMENT)
    )
}

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send(self.http_client().get(format!("{}/employees", base_url)))
            .await?
            .json()
    }

    pub async fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
    ) -> Result<Employee, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send(
            self.http_client()
                .post(format!("{}/employees", base_url))
                .json(request),
        )
        .await?
        .json()
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send(
            self.http_client()
                .delete(employee_path(&base_url, employee_id)),
        )
        .await?
        .empty()
    }
}
