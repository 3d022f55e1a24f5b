//! Request DTOs for the quote API.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use super::models::{ReservationRequest, DEFAULT_CUSTOMER_NAME};

/// Request to quote one reservation
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Vehicle name as shown in the price sheet
    pub vehicle: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub pickup_date: NaiveDate,
    #[serde(default = "default_leg_time")]
    pub pickup_time: NaiveTime,
    pub return_date: NaiveDate,
    #[serde(default = "default_leg_time")]
    pub return_time: NaiveTime,
    pub pickup_location: String,
    pub return_location: String,
    #[serde(default)]
    pub extra_driver: bool,
}

/// The desk historically books 10:00 pickups/returns
fn default_leg_time() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 0, 0).unwrap()
}

impl QuoteRequest {
    pub fn to_reservation(&self) -> ReservationRequest {
        let customer_name = self
            .customer_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_CUSTOMER_NAME)
            .to_string();

        ReservationRequest {
            customer_name,
            pickup: NaiveDateTime::new(self.pickup_date, self.pickup_time),
            return_at: NaiveDateTime::new(self.return_date, self.return_time),
            pickup_location: self.pickup_location.clone(),
            return_location: self.return_location.clone(),
            extra_driver: self.extra_driver,
        }
    }
}
