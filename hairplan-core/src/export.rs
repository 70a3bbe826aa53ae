//! Export record: profile + recommended categories + schedule + user mapping.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plan::Schedule;
use crate::profile::Profile;
use crate::rules::RecommendationBundle;

/// Default file name for a downloaded plan.
pub const DEFAULT_EXPORT_FILE: &str = "hair-routine.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineExport {
    pub form: Profile,
    /// Recommended generic categories.
    pub recommendations: Vec<String>,
    pub plan: Schedule,
    /// User overrides: generic category → product name.
    #[serde(default)]
    pub mapping: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at_utc: Option<DateTime<Utc>>,
}

impl RoutineExport {
    pub fn new(
        profile: &Profile,
        rec: &RecommendationBundle,
        plan: &Schedule,
        mapping: BTreeMap<String, String>,
    ) -> Self {
        Self {
            form: profile.clone(),
            recommendations: rec.products().iter().cloned().collect(),
            plan: plan.clone(),
            mapping,
            exported_at_utc: None,
        }
    }

    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.exported_at_utc = Some(at);
        self
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize routine export")
    }

    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parse routine export")
    }
}
