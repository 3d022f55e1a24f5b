//! Quote engine module.
//!
//! Owns price normalization, price-tier selection (peak vs. off-peak),
//! duration/grace-period proration, fee aggregation and decoy detection
//! with season-based upsell scripts. Called by the desk page and the
//! JSON quote API.

pub mod calculators;
pub mod message;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod scripts;
pub mod services;

// Re-export commonly used items
pub use calculators::{normalize_price, round_money};
pub use routes::router;
pub use services::{QuoteEngine, QuoteOutcome};
