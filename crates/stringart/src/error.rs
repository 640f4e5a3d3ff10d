//! Error type shared by the combinators and all pattern generators.
//!
//! Parameters are checked before any shape is built, so a generator either
//! returns a complete template or one of these errors.

use thiserror::Error;

/// Parameter and geometry failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Non-positive length, count below the minimum, or a layout that would divide by zero.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// A hole would sit outside (or on) its enclosing boundary.
    #[error("geometric overflow: {reason}")]
    GeometricOverflow { reason: String },
}

impl PatternError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(reason: impl Into<String>) -> Self {
        Self::GeometricOverflow {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

/// `value` must be finite and `> 0`.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PatternError::invalid(format!(
            "{name} must be finite and > 0 (got {value})"
        )));
    }
    Ok(())
}

/// `value` must be finite and `>= 0`.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PatternError::invalid(format!(
            "{name} must be finite and >= 0 (got {value})"
        )));
    }
    Ok(())
}

/// Upper bound on any hole, side or copy count.
pub const MAX_COUNT: usize = 100_000;

/// `min <= value <= MAX_COUNT`.
pub(crate) fn ensure_count(name: &str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(PatternError::invalid(format!(
            "{name} must be >= {min} (got {value})"
        )));
    }
    if value > MAX_COUNT {
        return Err(PatternError::invalid(format!(
            "{name} must be <= {MAX_COUNT} (got {value})"
        )));
    }
    Ok(())
}

/// Derived count from checked arithmetic; `None` means it overflowed `usize`.
pub(crate) fn derived_count(name: &str, value: Option<usize>, min: usize) -> Result<usize> {
    let value = value.ok_or_else(|| {
        PatternError::invalid(format!("{name} must be <= {MAX_COUNT} (overflows)"))
    })?;
    ensure_count(name, value, min)?;
    Ok(value)
}
