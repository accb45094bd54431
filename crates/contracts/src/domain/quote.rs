use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::supplier::Supplier;

/// Lifecycle of a supplier bid against an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    Pending,
    AcceptedByCustomer,
    ApprovedByAdmin,
    CancelledByAdmin,
    Rejected,
}

impl QuoteStatus {
    /// An accepted quote is the one promoted to the order's final quote.
    /// Admin approval keeps the quote in the accepted set.
    pub fn is_accepted(self) -> bool {
        matches!(
            self,
            QuoteStatus::AcceptedByCustomer | QuoteStatus::ApprovedByAdmin
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartQuality {
    #[serde(rename = "OEM")]
    Oem,
    #[serde(rename = "OES")]
    Oes,
    Aftermarket,
    Used,
}

impl PartQuality {
    pub const ALL: [PartQuality; 4] = [
        PartQuality::Oem,
        PartQuality::Oes,
        PartQuality::Aftermarket,
        PartQuality::Used,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PartQuality::Oem => "OEM",
            PartQuality::Oes => "OES",
            PartQuality::Aftermarket => "Aftermarket",
            PartQuality::Used => "Used",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Uuid,
    pub order_id: Uuid,
    pub supplier_id: Uuid,
    #[serde(default, alias = "Supplier")]
    pub supplier: Option<Supplier>,

    pub buy_price: f64,
    #[serde(default)]
    pub sell_price: Option<f64>,
    #[serde(default)]
    pub part_quality: Option<PartQuality>,

    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub admin_remarks: Option<String>,
    #[serde(default)]
    pub delivery_eta: Option<String>,
    #[serde(default)]
    pub warranty: Option<String>,
    #[serde(default)]
    pub stock_status: Option<String>,
    #[serde(default)]
    pub notify_lower_bids: bool,
    #[serde(default)]
    pub part_images: Vec<String>,

    pub status: QuoteStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quote {
    pub fn supplier_name(&self) -> &str {
        self.supplier
            .as_ref()
            .map(|s| s.display_name())
            .unwrap_or("—")
    }
}

/// The accepted quote, if any, out of a bid list.
pub fn accepted_quote(quotes: &[Quote]) -> Option<&Quote> {
    quotes.iter().find(|q| q.status.is_accepted())
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteListResponse {
    pub quotes: Vec<Quote>,
}

// ============================================================================
// Form DTOs
// ============================================================================

/// New-bid form state. Prices are kept as raw strings while the admin
/// types; `validate` parses them and must pass before any network call.
#[derive(Debug, Clone, Default)]
pub struct QuoteDraft {
    pub supplier_id: String,
    pub buy_price: String,
    pub sell_price: String,
    pub remarks: String,
    pub admin_remarks: String,
    pub delivery_eta: String,
    pub warranty: String,
    pub stock_status: String,
    pub notify_lower_bids: bool,
}

impl QuoteDraft {
    pub fn validate(&self) -> Result<ValidatedQuote, String> {
        let supplier_id = self.supplier_id.trim();
        if supplier_id.is_empty() {
            return Err("Supplier ID is required".into());
        }
        let supplier_id = Uuid::parse_str(supplier_id)
            .map_err(|_| "Supplier ID must be a valid id".to_string())?;

        if self.buy_price.trim().is_empty() {
            return Err("Buy Price is required".into());
        }
        let buy_price: f64 = self
            .buy_price
            .trim()
            .parse()
            .map_err(|_| "Buy Price must be a valid number".to_string())?;
        if !buy_price.is_finite() || buy_price < 0.0 {
            return Err("Buy Price must be a valid number".into());
        }

        let sell_price = match self.sell_price.trim() {
            "" => None,
            raw => Some(
                raw.parse::<f64>()
                    .map_err(|_| "Sell Price must be a valid number".to_string())?,
            ),
        };

        Ok(ValidatedQuote {
            supplier_id,
            buy_price,
            sell_price,
            remarks: none_if_empty(&self.remarks),
            admin_remarks: none_if_empty(&self.admin_remarks),
            delivery_eta: none_if_empty(&self.delivery_eta),
            warranty: none_if_empty(&self.warranty),
            stock_status: none_if_empty(&self.stock_status),
            notify_lower_bids: self.notify_lower_bids,
        })
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validated payload for POST /api/quotes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedQuote {
    pub supplier_id: Uuid,
    pub buy_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_eta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,
    pub notify_lower_bids: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    pub order_id: Uuid,
    #[serde(flatten)]
    pub quote: ValidatedQuote,
    pub status: QuoteStatus,
}

/// Partial quote update; only set fields go on the wire.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_quality: Option<PartQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_lower_bids: Option<bool>,
}

/// Body for DELETE /api/quotes/:id/admin/cancel. Remarks are mandatory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCancelRequest {
    pub admin_remarks: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(supplier_id: &str, buy: &str) -> QuoteDraft {
        QuoteDraft {
            supplier_id: supplier_id.into(),
            buy_price: buy.into(),
            ..QuoteDraft::default()
        }
    }

    #[test]
    fn accepted_set_is_customer_or_admin() {
        assert!(QuoteStatus::AcceptedByCustomer.is_accepted());
        assert!(QuoteStatus::ApprovedByAdmin.is_accepted());
        assert!(!QuoteStatus::Pending.is_accepted());
        assert!(!QuoteStatus::CancelledByAdmin.is_accepted());
        assert!(!QuoteStatus::Rejected.is_accepted());
    }

    #[test]
    fn draft_requires_supplier_id() {
        assert!(draft("", "1200").validate().is_err());
        assert!(draft("not-a-uuid", "1200").validate().is_err());
    }

    #[test]
    fn draft_requires_numeric_buy_price() {
        let id = Uuid::new_v4().to_string();
        assert!(draft(&id, "").validate().is_err());
        assert!(draft(&id, "abc").validate().is_err());
        assert!(draft(&id, "-5").validate().is_err());

        let ok = draft(&id, "1499.50").validate().unwrap();
        assert_eq!(ok.buy_price, 1499.50);
        assert_eq!(ok.sell_price, None);
        assert_eq!(ok.remarks, None);
    }

    #[test]
    fn optional_sell_price_still_validated() {
        let id = Uuid::new_v4().to_string();
        let mut d = draft(&id, "1000");
        d.sell_price = "12x0".into();
        assert!(d.validate().is_err());
        d.sell_price = "1200".into();
        assert_eq!(d.validate().unwrap().sell_price, Some(1200.0));
    }

    #[test]
    fn accepted_quote_picks_first_accepted() {
        let supplier_id = Uuid::new_v4();
        let mk = |status: QuoteStatus| Quote {
            id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            supplier_id,
            supplier: None,
            buy_price: 100.0,
            sell_price: None,
            part_quality: None,
            remarks: None,
            admin_remarks: None,
            delivery_eta: None,
            warranty: None,
            stock_status: None,
            notify_lower_bids: false,
            part_images: Vec::new(),
            status,
            created_at: None,
            updated_at: None,
        };
        let quotes = vec![
            mk(QuoteStatus::Pending),
            mk(QuoteStatus::AcceptedByCustomer),
            mk(QuoteStatus::ApprovedByAdmin),
        ];
        let accepted = accepted_quote(&quotes).unwrap();
        assert_eq!(accepted.status, QuoteStatus::AcceptedByCustomer);
        assert!(accepted_quote(&quotes[..1]).is_none());
    }

    #[test]
    fn quote_deserializes_capitalized_supplier_key() {
        // Older backend rows embed the supplier under "Supplier".
        let json = format!(
            r#"{{
                "id": "{}",
                "orderId": "{}",
                "supplierId": "{}",
                "Supplier": {{"id": "{}", "name": "Sai Auto", "phone": "9876543210"}},
                "buyPrice": 2500,
                "status": "PENDING"
            }}"#,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        let quote: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote.supplier_name(), "Sai Auto");
        assert_eq!(quote.buy_price, 2500.0);
    }

    #[test]
    fn part_quality_found_by_label() {
        // Edit forms resolve the select value back through the label.
        for quality in PartQuality::ALL {
            let found = PartQuality::ALL
                .into_iter()
                .find(|q| q.label() == quality.label());
            assert_eq!(found, Some(quality));
        }
    }

    #[test]
    fn patch_carries_part_quality() {
        let patch = QuotePatch {
            part_quality: Some(PartQuality::Oem),
            ..QuotePatch::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"partQuality":"OEM"}"#
        );
    }

    #[test]
    fn part_quality_wire_names() {
        assert_eq!(serde_json::to_string(&PartQuality::Oem).unwrap(), "\"OEM\"");
        assert_eq!(
            serde_json::to_string(&PartQuality::Aftermarket).unwrap(),
            "\"Aftermarket\""
        );
    }
}
