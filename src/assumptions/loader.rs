//! CSV-based assumption overrides
//!
//! Loads `key,value` rows that override the default assumption set, so a
//! model variant can live in a small file next to the binary instead of
//! in code.

use std::fs::File;
use std::path::Path;

use super::ProjectionAssumptions;
use crate::error::ModelError;

/// Default path to the assumption override file
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions.csv";

/// Load assumptions from the default override file
pub fn load_default() -> Result<ProjectionAssumptions, ModelError> {
    load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
}

/// Load assumptions by applying `key,value` overrides to the defaults.
///
/// Unknown keys and non-numeric values are rejected rather than skipped;
/// a typo in an override file must not silently run the base model.
pub fn load_from(path: &Path) -> Result<ProjectionAssumptions, ModelError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file);

    let mut assumptions = ProjectionAssumptions::default();
    let mut overrides = 0usize;

    for result in reader.records() {
        let record = result?;
        let key = record.get(0).unwrap_or("").trim();
        let raw = record.get(1).unwrap_or("").trim();

        if key.is_empty() {
            continue;
        }

        let value: f64 = raw.parse().map_err(|_| ModelError::InvalidOverride {
            key: key.to_string(),
            value: raw.to_string(),
        })?;

        assumptions.set_field(key, value)?;
        overrides += 1;
    }

    log::info!(
        "loaded {} assumption overrides from {}",
        overrides,
        path.display()
    );

    Ok(assumptions)
}
