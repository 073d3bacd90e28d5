//! Configuration parsing and validation for presence-tracker
//!
//! Supports TOML configuration with:
//! - Versioned schema
//! - Tracking period bounds (the calendar)
//! - Ordered justification list and snapshot retention cap
//! - Optional seed roster for first run
//! - Validation with clear error messages

mod schema;
mod validation;

pub use schema::*;
pub use validation::*;

use chrono::NaiveDate;
use presence_model::{default_avatar_url, Calendar, Group, Person};
use presence_util::{parse_date_key, PersonId};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Default tracking period when none is configured
const DEFAULT_PERIOD: (&str, &str) = ("2025-11-22", "2025-12-06");

/// Default ordered justification list; the first entry is the provisional
/// default assigned on a fresh absence
pub const DEFAULT_JUSTIFICATIONS: [&str; 3] = ["Maladie", "Retard", "Autres"];

/// Default snapshot retention cap
pub const DEFAULT_MAX_SNAPSHOTS: usize = 10;

/// Validated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The fixed tracking-period calendar
    pub calendar: Calendar,

    /// Ordered absence justifications; never empty
    pub justifications: Vec<String>,

    /// At most this many snapshots are retained
    pub max_snapshots: usize,

    /// Roster written to the store when it is empty on startup
    pub seed_roster: Vec<Person>,
}

impl AppConfig {
    fn from_raw(raw: RawConfig) -> Self {
        let (start, end) = match &raw.period {
            // Dates are checked during validation
            Some(period) => (
                parse_date_key(&period.start).unwrap(),
                parse_date_key(&period.end).unwrap(),
            ),
            None => default_period(),
        };
        let calendar = Calendar::new(start, end).unwrap();

        let justifications = raw
            .justifications
            .unwrap_or_else(|| DEFAULT_JUSTIFICATIONS.map(String::from).to_vec());

        let seed_roster = raw
            .members
            .into_iter()
            .map(|member| {
                let group = parse_group(&member.group).unwrap();
                let avatar = member
                    .avatar
                    .unwrap_or_else(|| default_avatar_url(&member.name));
                let mut person = Person::new(member.name.trim(), group, avatar);
                if let Some(id) = member.id {
                    person.id = PersonId::new(id);
                }
                person
            })
            .collect();

        Self {
            calendar,
            justifications,
            max_snapshots: raw.max_snapshots.unwrap_or(DEFAULT_MAX_SNAPSHOTS),
            seed_roster,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let (start, end) = default_period();
        Self {
            calendar: Calendar::new(start, end).unwrap(),
            justifications: DEFAULT_JUSTIFICATIONS.map(String::from).to_vec(),
            max_snapshots: DEFAULT_MAX_SNAPSHOTS,
            seed_roster: Vec::new(),
        }
    }
}

fn default_period() -> (NaiveDate, NaiveDate) {
    (
        parse_date_key(DEFAULT_PERIOD.0).unwrap(),
        parse_date_key(DEFAULT_PERIOD.1).unwrap(),
    )
}

/// Parse a group name: "matin" / "soir" or the legacy full labels
pub fn parse_group(value: &str) -> Option<Group> {
    match value.trim().to_lowercase().as_str() {
        "matin" | "groupe matin" => Some(Group::Morning),
        "soir" | "groupe soir" => Some(Group::Evening),
        _ => None,
    }
}

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<AppConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    let errors = validate_config(&raw);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(AppConfig::from_raw(raw))
}
