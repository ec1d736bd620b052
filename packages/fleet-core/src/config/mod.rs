//! Configuration System
//!
//! Capacity limits for a fleet, with two levels of control:
//! - Level 1: `FleetLimits::default()` (the supported bounds)
//! - Level 2: YAML file loaded through `FleetConfig::from_yaml`
//!
//! # Examples
//!
//! ```rust,ignore
//! use fleet_core::config::{FleetConfig, FleetLimits};
//!
//! let limits = FleetLimits::default();
//! let config = FleetConfig::from_yaml("fleet.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod limits;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::FleetConfig;
pub use limits::FleetLimits;
pub use validation::Validatable;
