//! Application and business configuration.
//!
//! The fee tables and season sets are plain immutable values handed to
//! `QuoteEngine::new`, so tests can substitute alternative schedules
//! without touching process-wide state.

use anyhow::Context;
use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Runtime configuration read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Published CSV export of the fleet/price spreadsheet
    pub sheet_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let sheet_url = std::env::var("SHEET_URL")
            .context("SHEET_URL must point at the published price-sheet CSV")?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            bind_addr,
            sheet_url,
        })
    }
}

/// Business constants for quote computation.
///
/// Defaults reflect the operator's current schedule; everything here is a
/// product decision, not derived data.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    /// Pickup/delivery fee per location, keyed by the display name used on
    /// the desk form. Unknown keys quote a zero fee.
    pub location_fees: Vec<(String, Decimal)>,
    /// Flat surcharge when the return location differs from pickup
    pub one_way_surcharge: Decimal,
    /// Per-billable-day fee for an additional driver
    pub extra_driver_daily_fee: Decimal,
    /// Months that select the peak price tier (pickup month only)
    pub peak_months: Vec<u32>,
    /// Months the upsell scripts treat as vacation high season
    pub vacation_months: Vec<u32>,
    /// Sub-day overage tolerated before an extra day is billed
    pub grace_period: Duration,
    /// Off-peak daily price at or below which a vehicle is a decoy
    pub decoy_price_ceiling: Decimal,
    /// Literal status substring marking a decoy vehicle (case-sensitive)
    pub decoy_marker: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            location_fees: vec![
                ("Loja Centro".to_string(), dec!(0.00)),
                ("Aeroporto (Taxa Entrega)".to_string(), dec!(80.00)),
                ("Hotel / Delivery".to_string(), dec!(50.00)),
            ],
            one_way_surcharge: dec!(150.00),
            extra_driver_daily_fee: dec!(15.00),
            peak_months: vec![1, 2, 7, 12],
            vacation_months: vec![2, 3, 7],
            grace_period: Duration::hours(2),
            decoy_price_ceiling: dec!(100.00),
            decoy_marker: "Isca".to_string(),
        }
    }
}

impl QuoteConfig {
    /// Flat fee for a location key; unknown locations quote zero so the
    /// desk always gets a printable total.
    pub fn location_fee(&self, location: &str) -> Decimal {
        self.location_fees
            .iter()
            .find(|(name, _)| name == location)
            .map(|(_, fee)| *fee)
            .unwrap_or(Decimal::ZERO)
    }
}
