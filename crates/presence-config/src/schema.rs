//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Tracking period bounds
    #[serde(default)]
    pub period: Option<RawPeriod>,

    /// Ordered absence justification list; the first entry is the default
    /// assigned when someone is marked absent without a reason
    #[serde(default)]
    pub justifications: Option<Vec<String>>,

    /// Snapshot retention cap
    #[serde(default)]
    pub max_snapshots: Option<usize>,

    /// Seed roster used when the store is empty on first run
    #[serde(default)]
    pub members: Vec<RawMember>,
}

/// Inclusive tracking period, ISO `YYYY-MM-DD` bounds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPeriod {
    pub start: String,
    pub end: String,
}

/// Raw seed-roster member
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMember {
    /// Stable id; generated when omitted
    pub id: Option<String>,

    /// Display name
    pub name: String,

    /// Group: "matin" / "soir" (the legacy full labels are also accepted)
    pub group: String,

    /// Avatar URL; derived from the name when omitted
    pub avatar: Option<String>,
}
