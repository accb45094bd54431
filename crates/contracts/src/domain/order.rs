use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::quote::Quote;

// ============================================================================
// Status state machine
// ============================================================================

/// Lifecycle of an order as the backend reports it.
///
/// One-way progression `PENDING → QUOTED → QUOTE_ACCEPTED_BY_CUSTOMER →
/// CONFIRMED → COMPLETED`; `CANCELLED` is reachable from any non-terminal
/// state and only by an admin. Every guard the UI needs lives here so the
/// rules stay testable without a DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Quoted,
    QuoteAcceptedByCustomer,
    Confirmed,
    Completed,
    Cancelled,
}

/// The single primary action the list/detail views may render for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Navigate to the bid management page.
    ViewBids,
    /// Approve the accepted quote and move the order to `Confirmed`.
    AssignQc,
    /// Move the order to `Completed`.
    MarkDelivered,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Admin cancellation is only allowed before a quote has been accepted.
    pub fn admin_can_cancel(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Quoted)
    }

    /// Bid solicitation is over once the customer has accepted a quote.
    /// The detail page must not even issue the bid-list query outside
    /// these states.
    pub fn shows_bid_list(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Quoted)
    }

    /// The final-quote panel replaces the bid list from acceptance onward.
    pub fn shows_final_quote(self) -> bool {
        matches!(
            self,
            OrderStatus::QuoteAcceptedByCustomer | OrderStatus::Confirmed | OrderStatus::Completed
        )
    }

    /// Status → action table. The UI renders exactly this button, or none.
    pub fn primary_action(self) -> Option<OrderAction> {
        match self {
            OrderStatus::Pending => Some(OrderAction::ViewBids),
            OrderStatus::QuoteAcceptedByCustomer => Some(OrderAction::AssignQc),
            OrderStatus::Confirmed => Some(OrderAction::MarkDelivered),
            OrderStatus::Quoted | OrderStatus::Completed | OrderStatus::Cancelled => None,
        }
    }

    /// Guard for the one-way progression plus admin cancellation.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (Pending, Quoted)
            | (Quoted, QuoteAcceptedByCustomer)
            | (QuoteAcceptedByCustomer, Confirmed)
            | (Confirmed, Completed) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }

    /// Customer-facing label for the status column.
    pub fn display_label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "New Order Request",
            OrderStatus::Quoted => "Quoted",
            OrderStatus::QuoteAcceptedByCustomer => "Quote Accepted",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Completed => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Quoted => "QUOTED",
            OrderStatus::QuoteAcceptedByCustomer => "QUOTE_ACCEPTED_BY_CUSTOMER",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Quoted,
        OrderStatus::QuoteAcceptedByCustomer,
        OrderStatus::Confirmed,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Diesel,
    Petrol,
    #[serde(rename = "CNG")]
    Cng,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Diesel,
        FuelType::Petrol,
        FuelType::Cng,
        FuelType::Electric,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Petrol => "Petrol",
            FuelType::Cng => "CNG",
            FuelType::Electric => "Electric",
        }
    }
}

/// A single requested part line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPart {
    pub name: String,
    #[serde(default = "default_qty")]
    pub qty: u32,
}

fn default_qty() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub status: OrderStatus,

    pub vehicle_number: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    #[serde(default)]
    pub vehicle_year: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<FuelType>,

    #[serde(default)]
    pub parts: Vec<OrderPart>,
    #[serde(default = "default_qty")]
    pub quantity: u32,
    #[serde(default)]
    pub notes: Option<String>,

    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_city: Option<String>,
    #[serde(default)]
    pub customer_state: Option<String>,

    #[serde(default)]
    pub overdue: bool,
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,

    /// Present only on endpoints that embed the quotes (bid management page).
    #[serde(default)]
    pub quotes: Option<Vec<Quote>>,
}

impl Order {
    /// Short id for headings ("Bids For Order #1a2b3...").
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(5).collect()
    }

    pub fn part_names(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Most relevant timestamp for the list's date column.
    pub fn display_timestamp(&self) -> Option<DateTime<Utc>> {
        self.confirmed_at.or(self.created_at).or(self.updated_at)
    }
}

/// Some endpoints wrap the order, some return it bare.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderEnvelope {
    pub order: Order,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
}

// ============================================================================
// Form DTOs
// ============================================================================

/// Create-order form state. Validated client-side before any request.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_id: Option<Uuid>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub customer_city: Option<String>,
    pub customer_state: Option<String>,

    pub vehicle_number: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    pub parts: Vec<OrderPart>,
    pub quantity: u32,
    pub notes: String,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self {
            quantity: 1,
            parts: vec![OrderPart {
                name: String::new(),
                qty: 1,
            }],
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.customer_id.is_none() {
            return Err("Please select a customer first".into());
        }
        if self.vehicle_number.trim().is_empty() {
            return Err("Vehicle number is required".into());
        }
        if self.vehicle_make.trim().is_empty() || self.vehicle_model.trim().is_empty() {
            return Err("Vehicle make and model are required".into());
        }
        if self.parts.is_empty() || self.parts.iter().all(|p| p.name.trim().is_empty()) {
            return Err("At least one part name is required".into());
        }
        if self.parts.iter().any(|p| !p.name.trim().is_empty() && p.qty == 0) {
            return Err("Part quantity must be at least 1".into());
        }
        Ok(())
    }
}

/// Partial order update; only set fields go on the wire.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderPatch {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_table_is_exact() {
        assert_eq!(
            OrderStatus::Pending.primary_action(),
            Some(OrderAction::ViewBids)
        );
        assert_eq!(OrderStatus::Quoted.primary_action(), None);
        assert_eq!(
            OrderStatus::QuoteAcceptedByCustomer.primary_action(),
            Some(OrderAction::AssignQc)
        );
        assert_eq!(
            OrderStatus::Confirmed.primary_action(),
            Some(OrderAction::MarkDelivered)
        );
        assert_eq!(OrderStatus::Completed.primary_action(), None);
        assert_eq!(OrderStatus::Cancelled.primary_action(), None);
    }

    #[test]
    fn cancel_only_before_acceptance() {
        for status in OrderStatus::ALL {
            let expected = matches!(status, OrderStatus::Pending | OrderStatus::Quoted);
            assert_eq!(status.admin_can_cancel(), expected, "{status:?}");
        }
    }

    #[test]
    fn bid_list_and_final_quote_are_disjoint() {
        for status in OrderStatus::ALL {
            assert!(
                !(status.shows_bid_list() && status.shows_final_quote()),
                "{status:?} shows both panels"
            );
        }
        assert!(OrderStatus::Pending.shows_bid_list());
        assert!(OrderStatus::Quoted.shows_bid_list());
        assert!(!OrderStatus::Cancelled.shows_bid_list());
        assert!(!OrderStatus::Cancelled.shows_final_quote());
        assert!(OrderStatus::Completed.shows_final_quote());
    }

    #[test]
    fn transitions_follow_one_way_progression() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Quoted));
        assert!(Quoted.can_transition_to(QuoteAcceptedByCustomer));
        assert!(QuoteAcceptedByCustomer.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Completed));
        // No going backwards or skipping a step.
        assert!(!Quoted.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(QuoteAcceptedByCustomer));
        assert!(!Quoted.can_transition_to(Confirmed));
        assert!(!Completed.can_transition_to(Confirmed));
    }

    #[test]
    fn cancellation_reaches_every_non_terminal_state() {
        use OrderStatus::*;
        for status in OrderStatus::ALL {
            assert_eq!(
                status.can_transition_to(Cancelled),
                !status.is_terminal(),
                "{status:?}"
            );
        }
    }

    #[test]
    fn status_wire_format_round_trips() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_wire()));
            let back: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
        assert_eq!(
            serde_json::to_string(&OrderStatus::QuoteAcceptedByCustomer).unwrap(),
            "\"QUOTE_ACCEPTED_BY_CUSTOMER\""
        );
    }

    #[test]
    fn order_draft_validation() {
        let mut draft = OrderDraft::new();
        assert!(draft.validate().is_err());

        draft.customer_id = Some(Uuid::new_v4());
        draft.customer_name = "Asha Motors".into();
        draft.vehicle_number = "MH12AB1234".into();
        draft.vehicle_make = "Maruti".into();
        draft.vehicle_model = "Swift".into();
        assert!(draft.validate().is_err(), "empty part list must fail");

        draft.parts[0].name = "Alternator".into();
        assert!(draft.validate().is_ok());

        draft.parts[0].qty = 0;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn status_patch_serializes_only_status() {
        let patch = OrderPatch::status(OrderStatus::Quoted);
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"status":"QUOTED"}"#
        );
    }

    #[test]
    fn order_deserializes_backend_shape() {
        let json = r#"{
            "id": "7b6a1f3e-5f2a-4e6f-9f34-2f6f327ac001",
            "status": "PENDING",
            "vehicleNumber": "MH12AB1234",
            "vehicleMake": "Hyundai",
            "vehicleModel": "i20",
            "fuelType": "Petrol",
            "parts": [{"name": "Headlight", "qty": 2}],
            "quantity": 2,
            "customerName": "R. Sharma",
            "createdAt": "2025-06-01T09:30:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.part_names(), "Headlight");
        assert_eq!(order.short_id(), "7b6a1");
        assert!(order.display_timestamp().is_some());
        assert!(order.quotes.is_none());
    }
}
