//! Access policy overrides.
//!
//! Keys and values are plain strings here; they are parsed into route and
//! role types when the policy is built, so a typo fails startup instead of
//! silently granting nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Overrides applied on top of the built-in route table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Route id → complete list of roles permitted on it.
    ///
    /// Replaces the built-in role set for that route.
    #[serde(default)]
    pub grants: BTreeMap<String, Vec<String>>,
    /// Role name → route id the role lands on after login.
    #[serde(default)]
    pub default_views: BTreeMap<String, String>,
}

impl PolicyConfig {
    /// Returns `true` if no override is configured.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty() && self.default_views.is_empty()
    }
}
