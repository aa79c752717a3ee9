//! Backend seam between the console and the API

use async_trait::async_trait;
use roster_client::{ClientResult, HttpClient};
use shared::{DeleteResponse, Employee, EmployeeCreate, EmployeeUpdate};

/// Employee operations the console needs
///
/// Implemented by [`HttpClient`]; tests substitute an in-memory fake.
#[async_trait]
pub trait EmployeeBackend: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Employee>>;

    async fn create(&self, payload: EmployeeCreate) -> ClientResult<Employee>;

    async fn update(&self, id: i64, update: EmployeeUpdate) -> ClientResult<Employee>;

    async fn delete(&self, id: i64) -> ClientResult<DeleteResponse>;
}

#[async_trait]
impl EmployeeBackend for HttpClient {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.list_employees().await
    }

    async fn create(&self, payload: EmployeeCreate) -> ClientResult<Employee> {
        self.create_employee(&payload).await
    }

    async fn update(&self, id: i64, update: EmployeeUpdate) -> ClientResult<Employee> {
        self.update_employee(id, &update).await
    }

    async fn delete(&self, id: i64) -> ClientResult<DeleteResponse> {
        self.delete_employee(id).await
    }
}
