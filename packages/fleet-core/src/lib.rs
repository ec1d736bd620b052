/*
 * Fleet Core - Ship Topology Engine
 *
 * Feature-First Layout:
 * - shared/      : Common ids, constants and the ShipClass model
 * - config/      : Capacity limits (defaults + YAML)
 * - features/    : Vertical slices (fleet_store → discovery → lca → distance → advantage)
 * - api/         : The `Fleet` facade driving the lifecycle
 * - adapters/    : Text input/output used by the `fleet` binary
 *
 * Lifecycle:
 * - Fleet::new → add_teleport* → scan (once) → stat / distance / advantage_time_bound*
 */

#![allow(clippy::new_without_default)] // Default impl not always meaningful
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and constants
pub mod shared;

/// Feature modules (store → discovery → lca → distance → advantage)
pub mod features;

/// Configuration system (limits + YAML)
pub mod config;

/// Fleet facade (lifecycle entry point)
pub mod api;

/// External adapters (text input format, reports)
pub mod adapters;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{Fleet, ScanPhase};
pub use config::{FleetConfig, FleetLimits};
pub use errors::{ErrorKind, FleetError, Result};
pub use features::discovery::{FleetStats, Ship};
pub use features::fleet_store::{Group, Placement};
pub use shared::models::{PostId, ShipClass, ShipId};
