//! Quote engine.
//!
//! Ties the pure calculators together with the operator's fee schedule:
//! tier selection, fee aggregation, decoy detection and script selection.
//! Every operation is total - bad input degrades to a printable quote,
//! never an error.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::QuoteConfig;
use crate::fleet::VehicleRecord;

use super::calculators::{billable_days, is_peak_month, round_money};
use super::message::{compose_message, PricingLines};
use super::models::{QuoteResult, ReservationRequest};
use super::scripts::{select_upsell_script, UpsellScript};

/// Fully priced reservation, ready for rendering
#[derive(Debug, Clone)]
pub struct QuoteOutcome {
    pub decoy: bool,
    pub daily_rate: Decimal,
    pub pickup_fee: Decimal,
    pub return_surcharge: Decimal,
    pub quote: QuoteResult,
    /// Present iff the requested vehicle is a decoy
    pub script: Option<UpsellScript>,
    pub message: String,
}

/// Quote computation engine. Holds the immutable business configuration;
/// all per-request state arrives as arguments.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    config: QuoteConfig,
}

impl QuoteEngine {
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// A vehicle is a decoy when its off-peak price sits at or below the
    /// ceiling, or the sheet tags it with the decoy marker. Computed
    /// fresh on every quote; never cached.
    pub fn is_decoy(&self, vehicle: &VehicleRecord) -> bool {
        vehicle.base_price_off_peak <= self.config.decoy_price_ceiling
            || vehicle
                .availability_status
                .contains(&self.config.decoy_marker)
    }

    /// Daily rate for a reservation: the peak tier when the pickup month
    /// is a peak month, the off-peak tier otherwise. The return date
    /// plays no part even when the reservation crosses a tier boundary.
    pub fn daily_rate(&self, vehicle: &VehicleRecord, pickup_date: NaiveDate) -> Decimal {
        if is_peak_month(pickup_date, &self.config.peak_months) {
            vehicle.base_price_peak
        } else {
            vehicle.base_price_off_peak
        }
    }

    pub fn location_fee(&self, location: &str) -> Decimal {
        self.config.location_fee(location)
    }

    /// Price one reservation at the given daily rate and fees.
    pub fn compute_quote(
        &self,
        request: &ReservationRequest,
        daily_rate: Decimal,
        pickup_fee: Decimal,
        return_surcharge: Decimal,
    ) -> QuoteResult {
        let stay = billable_days(request.return_at - request.pickup, self.config.grace_period);
        let days = Decimal::from(stay.days);

        let daily_subtotal = round_money(days * daily_rate, 2);
        let extra_driver_subtotal = if request.extra_driver {
            round_money(days * self.config.extra_driver_daily_fee, 2)
        } else {
            Decimal::ZERO
        };
        let grand_total = daily_subtotal + pickup_fee + return_surcharge + extra_driver_subtotal;

        QuoteResult {
            billable_days: stay.days,
            daily_subtotal,
            extra_driver_subtotal,
            grand_total,
            warning: stay.overage_warning,
        }
    }

    /// Full per-button-press flow: fees, tier, decoy check, script
    /// selection and message composition.
    pub fn build_quote(
        &self,
        vehicle: &VehicleRecord,
        request: &ReservationRequest,
    ) -> QuoteOutcome {
        let decoy = self.is_decoy(vehicle);
        let daily_rate = self.daily_rate(vehicle, request.pickup.date());
        let pickup_fee = self.location_fee(&request.pickup_location);
        let return_surcharge = if request.is_one_way() {
            self.config.one_way_surcharge
        } else {
            Decimal::ZERO
        };

        let quote = self.compute_quote(request, daily_rate, pickup_fee, return_surcharge);

        let script = if decoy {
            tracing::info!(vehicle = %vehicle.name, "decoy detected, upsell script selected");
            Some(select_upsell_script(
                request.pickup.date(),
                &request.customer_name,
                &self.config.vacation_months,
            ))
        } else {
            None
        };

        let message = compose_message(
            &PricingLines {
                vehicle,
                request,
                quote: &quote,
                daily_rate,
                pickup_fee,
                return_surcharge,
                extra_driver_daily_fee: self.config.extra_driver_daily_fee,
            },
            script.as_ref(),
        );

        QuoteOutcome {
            decoy,
            daily_rate,
            pickup_fee,
            return_surcharge,
            quote,
            script,
            message,
        }
    }
}
