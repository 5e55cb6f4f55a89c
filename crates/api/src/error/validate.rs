//! Validation utilities shared by every specification constructor
//!
//! Rejections are logged at `debug` level so that a caller with a tracing
//! subscriber installed can see which invariant failed without having to
//! inspect the returned error.

use super::{Error, Result};
use std::borrow::Cow;

/// Validate a parameter condition
#[inline]
pub fn parameter<R>(condition: bool, context: &'static str, reason: R) -> Result<()>
where
    R: Into<Cow<'static, str>>,
{
    if !condition {
        let reason = reason.into();
        tracing::debug!(context, reason = %reason, "parameter rejected");
        return Err(Error::invalid(context, reason));
    }
    Ok(())
}

/// Require a field that a builder may leave unset
#[inline]
pub fn present<T>(value: Option<T>, name: &'static str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(field = name, "required field missing");
            Err(Error::null(name))
        }
    }
}

/// Validate that a name is not the empty string
#[inline]
pub fn non_empty(value: &str, context: &'static str) -> Result<()> {
    parameter(!value.is_empty(), context, "must not be empty")
}

/// Validate a strictly positive quantity
#[inline]
pub fn positive(is_positive: bool, context: &'static str) -> Result<()> {
    parameter(is_positive, context, "must be positive")
}

/// Validate a non-negative quantity
#[inline]
pub fn non_negative(is_negative: bool, context: &'static str) -> Result<()> {
    parameter(!is_negative, context, "must not be negative")
}
