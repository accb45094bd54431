//! Supplier (vendor) endpoints.

use contracts::domain::supplier::{Supplier, SupplierListResponse, SupplierPayload};
use serde_json::Value;
use uuid::Uuid;

use crate::shared::http;

/// The list endpoint has returned both a bare array and `{ "suppliers": ... }`.
pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    let value: Value = http::get_json("/api/suppliers").await?;
    if let Ok(list) = serde_json::from_value::<Vec<Supplier>>(value.clone()) {
        return Ok(list);
    }
    serde_json::from_value::<SupplierListResponse>(value)
        .map(|r| r.suppliers)
        .map_err(|e| format!("Failed to parse suppliers: {e}"))
}

pub async fn create_supplier(payload: &SupplierPayload) -> Result<(), String> {
    let _: Value = http::post_json("/api/suppliers", payload).await?;
    Ok(())
}

pub async fn update_supplier(id: Uuid, payload: &SupplierPayload) -> Result<(), String> {
    let _: Value = http::patch_json(&format!("/api/suppliers/{id}"), payload).await?;
    Ok(())
}

pub async fn delete_supplier(id: Uuid) -> Result<(), String> {
    http::delete(&format!("/api/suppliers/{id}")).await
}
