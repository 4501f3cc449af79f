//! Account domain — account management via the local-admin endpoint.

pub mod client;
