//! Remote price-sheet feed.
//!
//! The fleet lives in a spreadsheet the operator edits by hand, published
//! as CSV. Every load re-fetches the sheet; there is deliberately no
//! caching layer, so an F5 at the desk always quotes current prices.

use csv::ReaderBuilder;
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{AppError, Result};
use crate::quote::calculators::try_normalize_price;

use super::models::VehicleRecord;

pub const COL_NAME: &str = "Carro";
pub const COL_GROUP: &str = "Grupo";
pub const COL_ENGINE: &str = "Motor";
pub const COL_TRANSMISSION: &str = "Câmbio";
pub const COL_PRICE_OFF_PEAK: &str = "Preço Baixa";
pub const COL_PRICE_PEAK: &str = "Preço Alta";
pub const COL_STATUS: &str = "Disponibilidade";

/// One feed read: the vehicles plus non-fatal per-cell warnings.
///
/// Unparseable price cells still normalize to 0.00 in the record (the
/// quote math never blocks on bad data); the warnings list is the side
/// channel that makes those cells visible to staff.
#[derive(Debug, Clone, Default)]
pub struct FleetSnapshot {
    pub vehicles: Vec<VehicleRecord>,
    pub warnings: Vec<String>,
}

/// Client for the published spreadsheet CSV
#[derive(Debug, Clone)]
pub struct SheetFeed {
    client: Client,
    url: String,
}

impl SheetFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Fetch and parse the sheet. No caching by design.
    pub async fn load(&self) -> Result<FleetSnapshot> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let snapshot = parse_feed(&body)?;
        info!(
            vehicles = snapshot.vehicles.len(),
            warnings = snapshot.warnings.len(),
            "price sheet loaded"
        );
        Ok(snapshot)
    }
}

/// Parse the CSV body of the published sheet.
///
/// `Carro` plus at least one price-tier column are required; their absence
/// is a hard load failure. Everything else defaults per field and never
/// errors.
pub fn parse_feed(csv_text: &str) -> Result<FleetSnapshot> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    let name_col = position(COL_NAME).ok_or_else(|| {
        AppError::FeedMalformed(format!("coluna obrigatória '{COL_NAME}' ausente"))
    })?;
    let off_peak_col = position(COL_PRICE_OFF_PEAK);
    let peak_col = position(COL_PRICE_PEAK);
    if off_peak_col.is_none() && peak_col.is_none() {
        return Err(AppError::FeedMalformed(format!(
            "nenhuma coluna de preço encontrada ('{COL_PRICE_OFF_PEAK}' ou '{COL_PRICE_PEAK}')"
        )));
    }
    let group_col = position(COL_GROUP);
    let engine_col = position(COL_ENGINE);
    let transmission_col = position(COL_TRANSMISSION);
    let status_col = position(COL_STATUS);

    let mut snapshot = FleetSnapshot::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // Spreadsheets accumulate fully blank rows; skip them silently
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        // 1-based data row, after the header line
        let row_no = row + 2;

        let cell =
            |col: Option<usize>| col.and_then(|i| record.get(i)).map(str::trim).unwrap_or("");
        let text = |col: Option<usize>, default: &str| {
            let value = cell(col);
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };

        let name = cell(Some(name_col));
        if name.is_empty() {
            snapshot
                .warnings
                .push(format!("linha {row_no}: sem nome de veículo, ignorada"));
            continue;
        }

        let base_price_off_peak = read_price(
            cell(off_peak_col),
            name,
            COL_PRICE_OFF_PEAK,
            row_no,
            &mut snapshot.warnings,
        );
        let base_price_peak = read_price(
            cell(peak_col),
            name,
            COL_PRICE_PEAK,
            row_no,
            &mut snapshot.warnings,
        );

        snapshot.vehicles.push(VehicleRecord {
            name: name.to_string(),
            group: text(group_col, "N/A"),
            engine_spec: text(engine_col, "1.0"),
            transmission: text(transmission_col, "Manual"),
            base_price_off_peak,
            base_price_peak,
            availability_status: text(status_col, ""),
        });
    }

    Ok(snapshot)
}

/// Lenient price-cell read. Empty cells default quietly; garbage and
/// negative values default to zero and land in the warnings list.
fn read_price(
    raw: &str,
    name: &str,
    column: &str,
    row_no: usize,
    warnings: &mut Vec<String>,
) -> Decimal {
    if raw.is_empty() {
        return Decimal::ZERO;
    }
    match try_normalize_price(raw) {
        Some(value) if value.is_sign_negative() => {
            warnings.push(format!(
                "linha {row_no} ({name}): '{column}' negativo '{raw}', assumido 0"
            ));
            Decimal::ZERO
        }
        Some(value) => value,
        None => {
            warnings.push(format!(
                "linha {row_no} ({name}): '{column}' ilegível '{raw}', assumido 0"
            ));
            Decimal::ZERO
        }
    }
}
