//! HTML route handlers

pub mod desk;
