//! Quote domain models

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Name used when the customer field is left blank
pub const DEFAULT_CUSTOMER_NAME: &str = "Cliente";

/// One reservation as captured at the desk. Transient; built per
/// button-press and discarded after the message renders.
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub customer_name: String,
    pub pickup: NaiveDateTime,
    pub return_at: NaiveDateTime,
    pub pickup_location: String,
    pub return_location: String,
    pub extra_driver: bool,
}

impl ReservationRequest {
    /// One-way rental: return location differs from pickup
    pub fn is_one_way(&self) -> bool {
        self.pickup_location != self.return_location
    }
}

/// Computed quote amounts for one reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteResult {
    pub billable_days: i64,
    pub daily_subtotal: Decimal,
    pub extra_driver_subtotal: Decimal,
    pub grand_total: Decimal,
    /// Grace-rule overage notice, when an extra day was billed
    pub warning: Option<String>,
}
