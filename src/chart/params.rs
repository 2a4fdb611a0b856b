use std::sync::LazyLock;

use regex::Regex;

use crate::core::FinError;

/// A positive integer immediately followed by a unit suffix, e.g. `5d`,
/// `3mo`, `2Y`, `10wk`.
static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[1-9][0-9]*(d|wk|mo|y)$").expect("valid range pattern"));

/// Validate a relative range parameter before any request is issued.
///
/// # Errors
///
/// Returns [`FinError::DataRequest`] naming the parameter when it does not
/// match the range pattern.
pub fn validate_range(range: &str) -> Result<(), FinError> {
    if RANGE_PATTERN.is_match(range) {
        Ok(())
    } else {
        Err(FinError::DataRequest(format!("invalid range: {range}")))
    }
}
