//! HTTP client layer — `LoklakHttp`, one method per endpoint.

pub mod client;

pub use client::LoklakHttp;
