//! CLI library components for stop reconciliation.

pub mod logging;
