//! Vehicle fleet models

use rust_decimal::Decimal;
use serde::Serialize;

/// Status substring the spreadsheet uses for vehicles with no stock left
pub const SOLD_OUT_MARKER: &str = "ESGOTADO";

/// One rentable vehicle as read from the price sheet.
///
/// Rebuilt on every feed load; nothing here is cached between refreshes.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleRecord {
    pub name: String,
    pub group: String,
    pub engine_spec: String,
    pub transmission: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price_off_peak: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price_peak: Decimal,
    pub availability_status: String,
}

impl VehicleRecord {
    /// Display specs derived from the vehicle name
    pub fn specs(&self) -> &'static SpecProfile {
        classify_specs(&self.name)
    }

    pub fn is_sold_out(&self) -> bool {
        self.availability_status.contains(SOLD_OUT_MARKER)
    }
}

/// Display profile for a vehicle class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecProfile {
    pub seats: u8,
    pub luggage: u8,
    pub icon: &'static str,
}

const DEFAULT_PROFILE: SpecProfile = SpecProfile {
    seats: 5,
    luggage: 2,
    icon: "🚘",
};

/// Ordered (keywords, profile) pairs; the first group with a keyword
/// contained in the vehicle name wins.
const SPEC_TABLE: &[(&[&str], SpecProfile)] = &[
    (
        &["kwid", "mobi"],
        SpecProfile {
            seats: 5,
            luggage: 1,
            icon: "🚗",
        },
    ),
    (
        &["hb20", "onix", "polo"],
        SpecProfile {
            seats: 5,
            luggage: 2,
            icon: "🚗",
        },
    ),
    (
        &["renegade", "t-cross", "suv"],
        SpecProfile {
            seats: 5,
            luggage: 3,
            icon: "🚙",
        },
    ),
];

/// Classify a vehicle name into a display profile.
///
/// Case-insensitive substring match against `SPEC_TABLE`; names matching
/// no group get the generic 5-seat profile.
pub fn classify_specs(name: &str) -> &'static SpecProfile {
    let lowered = name.to_lowercase();
    SPEC_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, profile)| profile)
        .unwrap_or(&DEFAULT_PROFILE)
}
