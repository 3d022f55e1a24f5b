//! locadora-web: quote desk for a Brazilian car rental operator.
//!
//! Loads the fleet/price list from a published spreadsheet CSV, computes
//! reservation quotes (seasonal price tiers, grace-period proration,
//! location and one-way fees) and renders a ready-to-send customer
//! message. Decoy vehicles switch the flow to a seasonal upsell script.

pub mod config;
pub mod error;
pub mod fleet;
pub mod quote;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::QuoteConfig;
use crate::fleet::SheetFeed;
use crate::quote::QuoteEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub feed: SheetFeed,
    pub engine: Arc<QuoteEngine>,
}

impl AppState {
    pub fn new(sheet_url: &str, quote_config: QuoteConfig) -> Self {
        Self {
            feed: SheetFeed::new(sheet_url),
            engine: Arc::new(QuoteEngine::new(quote_config)),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::desk::router())
        .merge(quote::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
