//! Quote (bid) endpoints.

use contracts::domain::quote::{
    AdminCancelRequest, CreateQuoteRequest, Quote, QuoteListResponse, QuotePatch, QuoteStatus,
    ValidatedQuote,
};
use serde_json::Value;
use uuid::Uuid;

use crate::shared::http;

/// Bids for one order, as shown on the detail page's bid list.
///
/// The server answers with a bare array; older builds wrapped it in
/// `{ "quotes": [...] }`, so both shapes are accepted.
pub async fn fetch_order_bids(order_id: Uuid) -> Result<Vec<Quote>, String> {
    let value: Value = http::get_json(&format!("/api/quotes/order/{order_id}")).await?;
    parse_quote_list(value)
}

fn parse_quote_list(value: Value) -> Result<Vec<Quote>, String> {
    if let Ok(list) = serde_json::from_value::<Vec<Quote>>(value.clone()) {
        return Ok(list);
    }
    serde_json::from_value::<QuoteListResponse>(value)
        .map(|r| r.quotes)
        .map_err(|e| format!("Failed to parse bids: {e}"))
}

/// Bids for one order with the supplier rows embedded (bid management page).
pub async fn fetch_admin_bids(order_id: Uuid) -> Result<Vec<Quote>, String> {
    let response: QuoteListResponse =
        http::get_json(&format!("/api/quotes/admin/order/{order_id}")).await?;
    Ok(response.quotes)
}

pub async fn create_quote(order_id: Uuid, quote: ValidatedQuote) -> Result<(), String> {
    let body = CreateQuoteRequest {
        order_id,
        quote,
        status: QuoteStatus::Pending,
    };
    let _: Value = http::post_json("/api/quotes", &body).await?;
    Ok(())
}

pub async fn patch_quote(id: Uuid, patch: &QuotePatch) -> Result<(), String> {
    let _: Value = http::patch_json(&format!("/api/quotes/{id}"), patch).await?;
    Ok(())
}

pub async fn delete_quote(id: Uuid) -> Result<(), String> {
    http::delete(&format!("/api/quotes/{id}")).await
}

/// Cancel a bid on the supplier's behalf; remarks are mandatory.
pub async fn admin_cancel_quote(id: Uuid, admin_remarks: String) -> Result<(), String> {
    let body = AdminCancelRequest { admin_remarks };
    http::delete_json(&format!("/api/quotes/{id}/admin/cancel"), &body).await
}

/// Admin approval of the customer-accepted quote (QC assignment step).
pub async fn approve_quote(id: Uuid) -> Result<(), String> {
    http::post_empty(&format!("/api/quotes/{id}/approve")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid_json() -> String {
        format!(
            r#"{{
                "id": "{}",
                "orderId": "{}",
                "supplierId": "{}",
                "buyPrice": 1800,
                "status": "PENDING"
            }}"#,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
    }

    #[test]
    fn quote_list_parses_bare_array() {
        let value: Value = serde_json::from_str(&format!("[{}]", bid_json())).unwrap();
        let quotes = parse_quote_list(value).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].buy_price, 1800.0);
    }

    #[test]
    fn quote_list_parses_envelope() {
        let value: Value =
            serde_json::from_str(&format!(r#"{{"quotes": [{}]}}"#, bid_json())).unwrap();
        assert_eq!(parse_quote_list(value).unwrap().len(), 1);
    }

    #[test]
    fn quote_list_rejects_other_shapes() {
        let value: Value = serde_json::from_str(r#"{"message": "not found"}"#).unwrap();
        assert!(parse_quote_list(value).is_err());
    }
}
