//! Configuration validation

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use fleet_core::config::Validatable;
///
/// fn load<C: Validatable>(config: C) -> ConfigResult<C> {
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Name used in log records about this configuration
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Reject `value` outside `[min, max]`, carrying `hint` into the message
pub(crate) fn check_range(field: &str, value: usize, min: usize, max: usize, hint: &str) -> ConfigResult<()> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    Err(ConfigError::Range {
        field: field.to_string(),
        value: value.to_string(),
        min: min.to_string(),
        max: max.to_string(),
        hint: hint.to_string(),
    })
}
