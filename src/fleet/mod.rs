//! Vehicle fleet: records, spec profiles and the remote price-sheet feed.

pub mod feed;
pub mod models;

pub use feed::{parse_feed, FleetSnapshot, SheetFeed};
pub use models::{classify_specs, SpecProfile, VehicleRecord};
