//! Seasonal upsell scripts for decoy vehicles.
//!
//! When the requested vehicle is a decoy (loss-leader pricing or an
//! explicit marker in the sheet), the desk switches from a confirmation
//! to one of three scripted responses picked by the pickup date. The
//! copy is fixed; recommended upgrades are named in the script, never
//! looked up or re-priced from the feed.

use chrono::{Datelike, NaiveDate};

/// Calendar season of a pickup date, for script selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// Dec 20 through Jan 5 (Reveillon window)
    YearEndPeak,
    /// School-vacation months
    VacationPeak,
    LowSeason,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::YearEndPeak => "🔥 ALTA TEMPORADA (Fim de Ano)",
            Season::VacationPeak => "⛱️ ALTA TEMPORADA (Férias)",
            Season::LowSeason => "📉 BAIXA TEMPORADA",
        }
    }
}

/// Scripted upsell response for one season
#[derive(Debug, Clone)]
pub struct UpsellScript {
    pub season: Season,
    pub period_label: &'static str,
    /// Greeting line, personalized with the customer name
    pub opening: String,
    pub body: &'static str,
}

/// Classify a pickup date. Precedence: year-end window first, then
/// vacation months, then low season.
pub fn classify_season(pickup_date: NaiveDate, vacation_months: &[u32]) -> Season {
    let (month, day) = (pickup_date.month(), pickup_date.day());
    if (month == 12 && day >= 20) || (month == 1 && day <= 5) {
        Season::YearEndPeak
    } else if vacation_months.contains(&month) {
        Season::VacationPeak
    } else {
        Season::LowSeason
    }
}

/// Pick the upsell script for a pickup date.
pub fn select_upsell_script(
    pickup_date: NaiveDate,
    customer_name: &str,
    vacation_months: &[u32],
) -> UpsellScript {
    let season = classify_season(pickup_date, vacation_months);
    let (opening, body) = match season {
        Season::YearEndPeak => (
            format!("Olá, {customer_name}! Agradecemos o contato."),
            "Infelizmente, o modelo econômico básico já está **ESGOTADO** para o Reveillon.\n\
             Mas consegui segurar estas opções superiores:\n\
             🚗 **Chevrolet Onix Turbo (Automático)** - Conforto no trânsito.\n\
             🚙 **Jeep Renegade Turbo (SUV)** - Status e Espaço.\n\
             ⚠️ A frota deve zerar em 24h. Recomendo garantir agora.",
        ),
        Season::VacationPeak => (
            format!("Olá, {customer_name}! O carro popular promocional acabou de sair."),
            "Mas tenho um upgrade com ótimo custo-benefício:\n\
             🚗 **Hyundai HB20** - Mais espaço para malas.\n\
             🚗 **Chevrolet Onix Turbo** - Wi-Fi e Automático.\n\
             Vale muito a pena o conforto extra na viagem!",
        ),
        Season::LowSeason => (
            format!("Olá, {customer_name}! O promocional de entrada não está disponível."),
            "Mas trago boas notícias: estamos com condições especiais em categorias acima:\n\
             🚗 **Hyundai HB20** - Por uma pequena diferença, muito mais carro.\n\
             🚗 **Onix Turbo** - Economia e Potência.\n\
             Posso reservar o HB20? É o nosso campeão de vendas.",
        ),
    };

    UpsellScript {
        season,
        period_label: season.label(),
        opening,
        body,
    }
}
