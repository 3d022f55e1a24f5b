//! Customer-facing message composition.
//!
//! Pure string templating. Every amount the engine computes shows up in
//! the rendered text; the desk copies it verbatim into WhatsApp or email.

use rust_decimal::Decimal;

use crate::fleet::VehicleRecord;

use super::models::{QuoteResult, ReservationRequest};
use super::scripts::UpsellScript;

const BENEFITS_LINE: &str =
    "✅ INCLUSO: Km Livre, Proteção Parcial (CDW), Taxas de Serviço e Limpeza.";

/// Everything the message needs about one priced reservation
#[derive(Debug)]
pub struct PricingLines<'a> {
    pub vehicle: &'a VehicleRecord,
    pub request: &'a ReservationRequest,
    pub quote: &'a QuoteResult,
    pub daily_rate: Decimal,
    pub pickup_fee: Decimal,
    pub return_surcharge: Decimal,
    pub extra_driver_daily_fee: Decimal,
}

fn fmt_brl(amount: Decimal) -> String {
    format!("R$ {amount:.2}")
}

/// Render the message for one quote.
///
/// With a script (decoy vehicle) this is the seasonal upsell variant; the
/// financial block is still rendered against the requested vehicle's
/// price so staff can quote the upgrade with the same numbers. Without a
/// script it is the plain confirmation.
pub fn compose_message(lines: &PricingLines, script: Option<&UpsellScript>) -> String {
    match script {
        Some(script) => compose_upsell(lines, script),
        None => compose_confirmation(lines),
    }
}

fn compose_confirmation(lines: &PricingLines) -> String {
    let vehicle = lines.vehicle;
    let request = lines.request;
    let specs = vehicle.specs();

    let mut message = format!(
        "Assunto: Confirmação de Reserva - {}\n\n\
         Olá, {}! Segue a confirmação da sua reserva.\n\n\
         {} VEÍCULO: {} ({} | Motor {} | {})\n\
         👥 {} lugares | 🧳 {} malas\n\
         📅 RETIRADA: {} - {}\n\
         📅 DEVOLUÇÃO: {} - {}\n\n",
        vehicle.name,
        request.customer_name,
        specs.icon,
        vehicle.name,
        vehicle.group,
        vehicle.engine_spec,
        vehicle.transmission,
        specs.seats,
        specs.luggage,
        request.pickup.format("%d/%m/%Y %H:%M"),
        request.pickup_location,
        request.return_at.format("%d/%m/%Y %H:%M"),
        request.return_location,
    );

    message.push_str(&financial_block(lines, "📋 RESUMO FINANCEIRO:"));
    message.push('\n');
    message.push_str(BENEFITS_LINE);
    message.push_str("\n\nPodemos confirmar a reserva?");
    message
}

fn compose_upsell(lines: &PricingLines, script: &UpsellScript) -> String {
    let vehicle = lines.vehicle;

    let mut message = format!(
        "Assunto: Retorno sobre {}\n\n{}\n{}\n\n",
        vehicle.name, script.opening, script.body,
    );

    message.push_str(&financial_block(
        lines,
        &format!("📋 VALORES DE REFERÊNCIA ({}):", vehicle.name),
    ));
    message.push('\n');
    message.push_str(BENEFITS_LINE);
    message.push_str("\n\nPosso confirmar o upgrade para você?");
    message
}

/// Itemized financial breakdown, shared by both variants
fn financial_block(lines: &PricingLines, heading: &str) -> String {
    let quote = lines.quote;
    let request = lines.request;

    let mut block = format!(
        "{}\n• {} diária(s) x {} = {}\n• Taxa de retirada ({}): {}\n",
        heading,
        quote.billable_days,
        fmt_brl(lines.daily_rate),
        fmt_brl(quote.daily_subtotal),
        request.pickup_location,
        fmt_brl(lines.pickup_fee),
    );

    if request.is_one_way() {
        block.push_str(&format!(
            "• Devolução em local diferente ({}): {}\n",
            request.return_location,
            fmt_brl(lines.return_surcharge),
        ));
    }
    if request.extra_driver {
        block.push_str(&format!(
            "• Motorista adicional ({} diária(s) x {}): {}\n",
            quote.billable_days,
            fmt_brl(lines.extra_driver_daily_fee),
            fmt_brl(quote.extra_driver_subtotal),
        ));
    }
    if let Some(warning) = &quote.warning {
        block.push_str(&format!("⚠️ {warning}\n"));
    }
    block.push_str(&format!("💰 TOTAL: {}", fmt_brl(quote.grand_total)));
    block.push('\n');
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;

    use crate::quote::scripts::select_upsell_script;

    fn vehicle() -> VehicleRecord {
        VehicleRecord {
            name: "Hyundai HB20 Sense".to_string(),
            group: "B".to_string(),
            engine_spec: "1.0".to_string(),
            transmission: "Manual".to_string(),
            base_price_off_peak: dec!(150.00),
            base_price_peak: dec!(200.00),
            availability_status: "Disponível".to_string(),
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn request(one_way: bool, extra_driver: bool) -> ReservationRequest {
        ReservationRequest {
            customer_name: "João".to_string(),
            pickup: at(2026, 3, 10, 10),
            return_at: at(2026, 3, 13, 10),
            pickup_location: "Loja Centro".to_string(),
            return_location: if one_way {
                "Aeroporto (Taxa Entrega)".to_string()
            } else {
                "Loja Centro".to_string()
            },
            extra_driver,
        }
    }

    fn quote() -> QuoteResult {
        QuoteResult {
            billable_days: 3,
            daily_subtotal: dec!(450.00),
            extra_driver_subtotal: dec!(0.00),
            grand_total: dec!(450.00),
            warning: None,
        }
    }

    #[test]
    fn test_confirmation_surfaces_all_amounts() {
        let vehicle = vehicle();
        let request = request(false, false);
        let quote = quote();
        let message = compose_message(
            &PricingLines {
                vehicle: &vehicle,
                request: &request,
                quote: &quote,
                daily_rate: dec!(150.00),
                pickup_fee: dec!(0.00),
                return_surcharge: dec!(0.00),
                extra_driver_daily_fee: dec!(15.00),
            },
            None,
        );

        assert!(message.contains("Confirmação de Reserva - Hyundai HB20 Sense"));
        assert!(message.contains("Olá, João!"));
        assert!(message.contains("3 diária(s) x R$ 150.00 = R$ 450.00"));
        assert!(message.contains("Taxa de retirada (Loja Centro): R$ 0.00"));
        assert!(message.contains("💰 TOTAL: R$ 450.00"));
        assert!(message.contains("Km Livre"));
        assert!(message.contains("10/03/2026 10:00"));
        // same-location return: no one-way line
        assert!(!message.contains("Devolução em local diferente"));
        assert!(!message.contains("Motorista adicional"));
    }

    #[test]
    fn test_confirmation_one_way_and_extra_driver_lines() {
        let vehicle = vehicle();
        let request = request(true, true);
        let quote = QuoteResult {
            billable_days: 3,
            daily_subtotal: dec!(450.00),
            extra_driver_subtotal: dec!(45.00),
            grand_total: dec!(645.00),
            warning: None,
        };
        let message = compose_message(
            &PricingLines {
                vehicle: &vehicle,
                request: &request,
                quote: &quote,
                daily_rate: dec!(150.00),
                pickup_fee: dec!(0.00),
                return_surcharge: dec!(150.00),
                extra_driver_daily_fee: dec!(15.00),
            },
            None,
        );

        assert!(message
            .contains("Devolução em local diferente (Aeroporto (Taxa Entrega)): R$ 150.00"));
        assert!(message.contains("Motorista adicional (3 diária(s) x R$ 15.00): R$ 45.00"));
        assert!(message.contains("💰 TOTAL: R$ 645.00"));
    }

    #[test]
    fn test_confirmation_includes_overage_warning() {
        let vehicle = vehicle();
        let request = request(false, false);
        let quote = QuoteResult {
            billable_days: 4,
            daily_subtotal: dec!(600.00),
            extra_driver_subtotal: dec!(0.00),
            grand_total: dec!(600.00),
            warning: Some("Devolução excede o horário de retirada em 2.5h. Foi cobrada 1 diária extra.".to_string()),
        };
        let message = compose_message(
            &PricingLines {
                vehicle: &vehicle,
                request: &request,
                quote: &quote,
                daily_rate: dec!(150.00),
                pickup_fee: dec!(0.00),
                return_surcharge: dec!(0.00),
                extra_driver_daily_fee: dec!(15.00),
            },
            None,
        );
        assert!(message.contains("⚠️ Devolução excede o horário de retirada em 2.5h"));
    }

    #[test]
    fn test_upsell_keeps_breakdown_for_requested_vehicle() {
        let vehicle = VehicleRecord {
            name: "Economy X".to_string(),
            base_price_off_peak: dec!(80.00),
            base_price_peak: dec!(80.00),
            ..vehicle()
        };
        let mut request = request(false, false);
        request.pickup = at(2026, 12, 22, 10);
        request.return_at = at(2026, 12, 25, 10);
        let quote = QuoteResult {
            billable_days: 3,
            daily_subtotal: dec!(240.00),
            extra_driver_subtotal: dec!(0.00),
            grand_total: dec!(240.00),
            warning: None,
        };
        let script = select_upsell_script(request.pickup.date(), &request.customer_name, &[2, 3, 7]);
        let message = compose_message(
            &PricingLines {
                vehicle: &vehicle,
                request: &request,
                quote: &quote,
                daily_rate: dec!(80.00),
                pickup_fee: dec!(0.00),
                return_surcharge: dec!(0.00),
                extra_driver_daily_fee: dec!(15.00),
            },
            Some(&script),
        );

        assert!(message.contains("Assunto: Retorno sobre Economy X"));
        assert!(message.contains("Olá, João!"));
        assert!(message.contains("Onix"));
        assert!(message.contains("Renegade"));
        assert!(message.contains("VALORES DE REFERÊNCIA (Economy X)"));
        assert!(message.contains("3 diária(s) x R$ 80.00 = R$ 240.00"));
        assert!(message.contains("Posso confirmar o upgrade"));
    }
}
