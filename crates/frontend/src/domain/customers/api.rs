//! Customer/user endpoints.

use contracts::domain::customer::{CreateCustomerRequest, Customer};
use serde_json::Value;

use crate::shared::http;

pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let value: Value = http::get_json("/api/customers").await?;
    if let Ok(list) = serde_json::from_value::<Vec<Customer>>(value.clone()) {
        return Ok(list);
    }
    #[derive(serde::Deserialize)]
    struct CustomerListResponse {
        customers: Vec<Customer>,
    }
    serde_json::from_value::<CustomerListResponse>(value)
        .map(|r| r.customers)
        .map_err(|e| format!("Failed to parse customers: {e}"))
}

pub async fn create_customer(request: &CreateCustomerRequest) -> Result<(), String> {
    let _: Value = http::post_json("/api/customers", request).await?;
    Ok(())
}
