//! Server domain — node status and introspection endpoints.

pub mod client;
