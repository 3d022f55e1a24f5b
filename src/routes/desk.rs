//! Quote desk page handler

use askama::Template;
use axum::{extract::State, response::Html, routing::get, Router};

use crate::error::Result;
use crate::AppState;

/// Vehicle entry for the desk dropdown
struct VehicleOption {
    name: String,
    label: String,
}

/// Location entry for the pickup/return dropdowns
struct LocationOption {
    name: String,
    fee: String,
}

/// Quote desk template
#[derive(Template)]
#[template(path = "desk.html")]
struct DeskTemplate {
    vehicles: Vec<VehicleOption>,
    locations: Vec<LocationOption>,
    feed_down: bool,
    feed_error: String,
    feed_warnings: Vec<String>,
    has_feed_warnings: bool,
    has_vehicles: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(desk))
}

/// Quote desk page.
///
/// The sheet is fetched fresh on every page load. A feed failure renders
/// the page anyway, with an empty vehicle list and a visible warning;
/// the desk must never see a crash page because a spreadsheet is down.
async fn desk(State(state): State<AppState>) -> Result<Html<String>> {
    let (records, feed_warnings, feed_down, feed_error) = match state.feed.load().await {
        Ok(snapshot) => (snapshot.vehicles, snapshot.warnings, false, String::new()),
        Err(e) => {
            tracing::warn!("price sheet unavailable, rendering empty desk: {e}");
            (Vec::new(), Vec::new(), true, e.to_string())
        }
    };

    let vehicles: Vec<VehicleOption> = records
        .iter()
        .map(|vehicle| {
            let specs = vehicle.specs();
            VehicleOption {
                name: vehicle.name.clone(),
                label: format!(
                    "{} {} ({} lugares, {} malas)",
                    specs.icon, vehicle.name, specs.seats, specs.luggage
                ),
            }
        })
        .collect();

    let locations: Vec<LocationOption> = state
        .engine
        .config()
        .location_fees
        .iter()
        .map(|(name, fee)| LocationOption {
            name: name.clone(),
            fee: format!("R$ {fee:.2}"),
        })
        .collect();

    let template = DeskTemplate {
        has_vehicles: !vehicles.is_empty(),
        has_feed_warnings: !feed_warnings.is_empty(),
        vehicles,
        locations,
        feed_down,
        feed_error,
        feed_warnings,
    };

    Ok(Html(template.render()?))
}
