//! Geocode domain — place-name resolution.

pub mod client;
