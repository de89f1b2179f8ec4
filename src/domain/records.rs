//! Decoded roster rows

use serde::Deserialize;

/// One person as found in the input roster.
///
/// Wire names are camelCase (`joinDate`, `reportsTo`). A missing or null
/// `reportsTo` marks a root. Unknown extra fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Display name, also the lookup key for manager references
    pub name: String,
    /// Job title, free text
    pub title: String,
    /// Join date, kept opaque
    pub join_date: String,
    /// Name of the manager, if any
    #[serde(default)]
    pub reports_to: Option<String>,
}
