//! Response DTOs for the quote API.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::fleet::VehicleRecord;

use super::services::QuoteOutcome;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn brl(amount: Decimal) -> Self {
        Self {
            amount,
            currency: "BRL".to_string(),
        }
    }
}

/// Vehicle details echoed back with a quote
#[derive(Debug, Serialize)]
pub struct VehicleSummaryResponse {
    pub name: String,
    pub group: String,
    pub engine_spec: String,
    pub transmission: String,
    pub seats: u8,
    pub luggage: u8,
    pub icon: &'static str,
    pub availability_status: String,
    pub sold_out: bool,
}

impl VehicleSummaryResponse {
    pub fn from_record(vehicle: &VehicleRecord) -> Self {
        let specs = vehicle.specs();
        Self {
            name: vehicle.name.clone(),
            group: vehicle.group.clone(),
            engine_spec: vehicle.engine_spec.clone(),
            transmission: vehicle.transmission.clone(),
            seats: specs.seats,
            luggage: specs.luggage,
            icon: specs.icon,
            availability_status: vehicle.availability_status.clone(),
            sold_out: vehicle.is_sold_out(),
        }
    }
}

/// Full quote payload for one reservation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub vehicle: VehicleSummaryResponse,
    pub decoy: bool,
    /// Season label, present for decoy/upsell quotes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    pub billable_days: i64,
    pub daily_rate: MoneyResponse,
    pub daily_subtotal: MoneyResponse,
    pub pickup_fee: MoneyResponse,
    pub one_way_surcharge: MoneyResponse,
    pub extra_driver_subtotal: MoneyResponse,
    pub grand_total: MoneyResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Ready-to-copy customer message
    pub message: String,
    /// Non-fatal issues found while reading the price sheet
    pub feed_warnings: Vec<String>,
}

impl QuoteResponse {
    pub fn from_outcome(
        vehicle: &VehicleRecord,
        outcome: QuoteOutcome,
        feed_warnings: Vec<String>,
    ) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            vehicle: VehicleSummaryResponse::from_record(vehicle),
            decoy: outcome.decoy,
            season: outcome
                .script
                .as_ref()
                .map(|s| s.period_label.to_string()),
            billable_days: outcome.quote.billable_days,
            daily_rate: MoneyResponse::brl(outcome.daily_rate),
            daily_subtotal: MoneyResponse::brl(outcome.quote.daily_subtotal),
            pickup_fee: MoneyResponse::brl(outcome.pickup_fee),
            one_way_surcharge: MoneyResponse::brl(outcome.return_surcharge),
            extra_driver_subtotal: MoneyResponse::brl(outcome.quote.extra_driver_subtotal),
            grand_total: MoneyResponse::brl(outcome.quote.grand_total),
            warning: outcome.quote.warning,
            message: outcome.message,
            feed_warnings,
        }
    }
}

/// Generic quote error response
#[derive(Debug, Serialize)]
pub struct QuoteErrorResponse {
    pub error_type: String,
    pub message: String,
}

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
