pub mod ship;
pub mod stats;
