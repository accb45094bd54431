//! Order endpoints.

use contracts::domain::order::{Order, OrderDraft, OrderEnvelope, OrderListResponse, OrderPatch};
use serde_json::Value;
use uuid::Uuid;

use crate::shared::http;

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let response: OrderListResponse = http::get_json("/api/orders").await?;
    Ok(response.orders)
}

/// Some deployments return the order bare, others under `{ "order": ... }`.
pub async fn fetch_order(id: Uuid) -> Result<Order, String> {
    let value: Value = http::get_json(&format!("/api/orders/{id}")).await?;
    if let Ok(envelope) = serde_json::from_value::<OrderEnvelope>(value.clone()) {
        return Ok(envelope.order);
    }
    serde_json::from_value::<Order>(value).map_err(|e| format!("Failed to parse order: {e}"))
}

pub async fn create_order(draft: &OrderDraft) -> Result<Order, String> {
    let value: Value = http::post_json("/api/orders", draft).await?;
    if let Ok(envelope) = serde_json::from_value::<OrderEnvelope>(value.clone()) {
        return Ok(envelope.order);
    }
    serde_json::from_value::<Order>(value).map_err(|e| format!("Failed to parse order: {e}"))
}

pub async fn patch_order(id: Uuid, patch: &OrderPatch) -> Result<(), String> {
    let _: Value = http::patch_json(&format!("/api/orders/{id}"), patch).await?;
    Ok(())
}

/// Admin-side cancellation; the backend records who cancelled.
pub async fn cancel_order_admin(id: Uuid) -> Result<(), String> {
    let body = OrderPatch::status(contracts::domain::order::OrderStatus::Cancelled);
    let _: Value = http::patch_json(&format!("/api/orders/{id}/cancel-admin"), &body).await?;
    Ok(())
}

/// Marks the order delivered (`CONFIRMED → COMPLETED`).
pub async fn complete_order(id: Uuid) -> Result<(), String> {
    http::patch_empty(&format!("/api/orders/{id}/complete")).await
}
