//! Inbound adapters - external formats feeding the fleet
//!
//! Currently: the whitespace-separated text format read by the `fleet` binary

pub mod text;

pub use text::{run, FleetInput, FleetReport, InputError};
