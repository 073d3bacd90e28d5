//! Configuration validation

use crate::schema::RawConfig;
use presence_util::parse_date_key;
use std::collections::HashSet;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Period start '{start}' is after end '{end}'")]
    PeriodInverted { start: String, end: String },

    #[error("Justification list must not be empty")]
    EmptyJustifications,

    #[error("Member '{name}': {message}")]
    MemberError { name: String, message: String },

    #[error("Duplicate member ID: {0}")]
    DuplicateMemberId(String),
}

/// Validate a raw config, collecting every problem found
pub fn validate_config(raw: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(period) = &raw.period {
        let start = parse_date_key(&period.start);
        let end = parse_date_key(&period.end);

        if start.is_none() {
            errors.push(ValidationError::InvalidDate {
                value: period.start.clone(),
            });
        }
        if end.is_none() {
            errors.push(ValidationError::InvalidDate {
                value: period.end.clone(),
            });
        }
        if let (Some(start_date), Some(end_date)) = (start, end) {
            if start_date > end_date {
                errors.push(ValidationError::PeriodInverted {
                    start: period.start.clone(),
                    end: period.end.clone(),
                });
            }
        }
    }

    if let Some(justifications) = &raw.justifications {
        if justifications.is_empty() || justifications.iter().all(|j| j.trim().is_empty()) {
            errors.push(ValidationError::EmptyJustifications);
        }
    }

    let mut seen_ids = HashSet::new();
    for member in &raw.members {
        if member.name.trim().is_empty() {
            errors.push(ValidationError::MemberError {
                name: member.name.clone(),
                message: "name must not be empty".into(),
            });
        }

        if crate::parse_group(&member.group).is_none() {
            errors.push(ValidationError::MemberError {
                name: member.name.clone(),
                message: format!("unknown group '{}'", member.group),
            });
        }

        if let Some(id) = &member.id {
            if !seen_ids.insert(id.clone()) {
                errors.push(ValidationError::DuplicateMemberId(id.clone()));
            }
        }
    }

    errors
}
