// Rust guideline compliant 2026-10-19

//! Core data models for canary config resolution.

use serde::{Deserialize, Serialize};

/// A canary config record as listed in the catalog.
///
/// Only the fields needed for resolution are modelled; any other fields in a
/// catalog snapshot are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanaryConfig {
    /// Stable config identifier, unique within the catalog.
    pub id: String,
    /// Display name. Not unique across the catalog.
    pub name: String,
    /// Applications this config is associated with.
    #[serde(default)]
    pub applications: Vec<String>,
}

impl CanaryConfig {
    /// Creates a new canary config record.
    ///
    /// # Arguments
    ///
    /// * `id` - The config identifier
    /// * `name` - The display name
    /// * `applications` - Applications the config belongs to
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        applications: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            applications: applications.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `application` is one of this config's applications.
    ///
    /// Membership is exact: no prefix, substring, or case-insensitive match.
    #[must_use]
    pub fn belongs_to(&self, application: &str) -> bool {
        self.applications.iter().any(|app| app == application)
    }

    /// Returns true if this record is a candidate for the given lookup.
    ///
    /// An absent `config_name` never matches.
    #[must_use]
    pub fn matches(&self, config_name: Option<&str>, application: &str) -> bool {
        config_name == Some(self.name.as_str()) && self.belongs_to(application)
    }
}

/// Strongly typed input to a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionInput {
    /// Requested config name. May be absent or empty.
    pub config_name: Option<String>,
    /// Application the lookup is scoped to.
    pub application: String,
}

impl ResolutionInput {
    /// Creates a new resolution input.
    pub fn new(config_name: Option<String>, application: impl Into<String>) -> Self {
        Self {
            config_name,
            application: application.into(),
        }
    }
}
