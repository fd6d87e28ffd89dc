// Rust guideline compliant 2026-10-19

//! Canary config ID resolution.
//!
//! Turns a human-assigned config name, scoped to an application, into the
//! single config ID it refers to. Resolution is a pure function over a catalog
//! snapshot: it performs no IO, keeps no state, and never retries.
//!
//! Exactly one matching record is required. Two or more matches are always an
//! error, even when the records are identical, because the resolver only
//! reasons about record count.

use crate::{CanaryConfig, Error, ResolutionInput, Result};

/// Returns every record matching the name and application, in catalog order.
///
/// # Arguments
///
/// * `config_name` - The requested config name (exact, case-sensitive)
/// * `application` - The application the lookup is scoped to
/// * `catalog` - The catalog snapshot to search
pub fn find_candidates<'a>(
    config_name: Option<&str>,
    application: &str,
    catalog: &'a [CanaryConfig],
) -> Vec<&'a CanaryConfig> {
    catalog
        .iter()
        .filter(|config| config.matches(config_name, application))
        .collect()
}

/// Resolves a config name within an application to a unique config ID.
///
/// # Arguments
///
/// * `config_name` - The requested config name (exact, case-sensitive)
/// * `application` - The application the lookup is scoped to
/// * `catalog` - The catalog snapshot to search
///
/// # Returns
///
/// The ID of the sole matching record.
///
/// # Errors
///
/// Returns an error if:
/// - No record matches (`Error::NotFound`)
/// - More than one record matches (`Error::Ambiguous`)
pub fn resolve_config_id(
    config_name: Option<&str>,
    application: &str,
    catalog: &[CanaryConfig],
) -> Result<String> {
    let candidates = find_candidates(config_name, application, catalog);

    match candidates.as_slice() {
        [] => Err(Error::NotFound {
            config_name: config_name.map(str::to_string),
            application: application.to_string(),
        }),
        [config] => Ok(config.id.clone()),
        _ => Err(Error::Ambiguous {
            config_name: config_name.map(str::to_string),
            application: application.to_string(),
            matches: candidates.iter().map(|config| config.id.clone()).collect(),
        }),
    }
}

impl ResolutionInput {
    /// Resolves this input against a catalog snapshot.
    ///
    /// # Errors
    ///
    /// Same as [`resolve_config_id`].
    pub fn resolve(&self, catalog: &[CanaryConfig]) -> Result<String> {
        resolve_config_id(self.config_name.as_deref(), &self.application, catalog)
    }
}
