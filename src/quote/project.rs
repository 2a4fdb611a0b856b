use serde_json::{Map, Value};

use crate::core::FinError;
use crate::fields;

/// Derive a filtered quote from `source`, keeping (or dropping) the
/// requested `fields`.
///
/// Every requested field must belong to
/// [`ACCEPTED_FIELDS`](crate::fields::ACCEPTED_FIELDS); otherwise the whole
/// projection fails with [`FinError::InvalidField`] naming the first
/// offending field, and no output is produced.
///
/// With `exclude = false` the output contains only the pairs of `source`
/// whose key appears in `fields`; with `exclude = true` it contains the
/// complement. Requested fields absent from `source` are silently ignored.
///
/// # Errors
///
/// Returns [`FinError::InvalidField`] if any requested field is not accepted.
pub fn project(
    source: &Map<String, Value>,
    fields: &[&str],
    exclude: bool,
) -> Result<Map<String, Value>, FinError> {
    fields::ensure_accepted(fields)?;

    let mut picked = Map::new();
    if exclude {
        for (key, value) in source {
            if !fields.contains(&key.as_str()) {
                picked.insert(key.clone(), value.clone());
            }
        }
    } else {
        for (key, value) in source {
            if fields.contains(&key.as_str()) {
                picked.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(picked)
}
