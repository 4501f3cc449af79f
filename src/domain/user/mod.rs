//! User domain — screen-name lookup with optional follower graph.

pub mod client;
