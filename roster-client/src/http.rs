//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{DeleteResponse, Employee, EmployeeCreate, EmployeeUpdate};

/// HTTP client for making requests to the Roster Server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(%status, body = %text, "Request failed");
            return Err(ClientError::from_status(status, &text));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    // ========== Employee API ==========

    /// List all employees, ordered by id
    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("/employees").await
    }

    pub async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        self.get(&format!("/employees/{id}")).await
    }

    /// Create an employee; returns the stored record with its new id
    pub async fn create_employee(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        self.post("/employees", payload).await
    }

    /// Apply a partial update; omitted fields keep their stored values
    pub async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> ClientResult<Employee> {
        self.put(&format!("/employees/{id}"), update).await
    }

    pub async fn delete_employee(&self, id: i64) -> ClientResult<DeleteResponse> {
        self.delete(&format!("/employees/{id}")).await
    }
}
