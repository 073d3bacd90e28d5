//! People and attendance records

use presence_util::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attendance status for a single person/date pair.
///
/// A date with no stored record is implicitly `Pending`; an explicit
/// `Pending` record (a cleared cell) is equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Pending,
}

/// Roster group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    #[serde(rename = "Groupe Matin")]
    Morning,
    #[serde(rename = "Groupe Soir")]
    Evening,
}

impl Group {
    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Group::Morning => "Groupe Matin",
            Group::Evening => "Groupe Soir",
        }
    }
}

/// One recorded person/date cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// ISO date-key; always equals the map key this record is stored under
    pub date: String,

    pub status: AttendanceStatus,

    /// Free-text absence reason; present only when status is `Absent`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl AttendanceRecord {
    pub fn new(date: impl Into<String>, status: AttendanceStatus) -> Self {
        Self {
            date: date.into(),
            status,
            justification: None,
        }
    }

    pub fn with_justification(
        date: impl Into<String>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            status: AttendanceStatus::Absent,
            justification: Some(justification.into()),
        }
    }
}

/// Avatar URL derived from a display name, for people created without one
pub fn default_avatar_url(name: &str) -> String {
    let compact: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("https://avatar.iran.liara.run/public?username={compact}")
}

/// A person on the roster with their sparse per-date attendance map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,

    /// Non-empty display name
    pub name: String,

    pub group: Group,

    /// Avatar URL; cosmetic, no invariant
    pub avatar: String,

    /// Date-key -> record; keys are unique, lookup is always by date-key
    #[serde(default)]
    pub attendance: BTreeMap<String, AttendanceRecord>,
}

impl Person {
    /// Create a person with a fresh id and an empty attendance map
    pub fn new(name: impl Into<String>, group: Group, avatar: impl Into<String>) -> Self {
        Self {
            id: PersonId::generate(),
            name: name.into(),
            group,
            avatar: avatar.into(),
            attendance: BTreeMap::new(),
        }
    }

    pub fn record(&self, date_key: &str) -> Option<&AttendanceRecord> {
        self.attendance.get(date_key)
    }

    /// Stored status for a date, or `Pending` when no record exists
    pub fn status_on(&self, date_key: &str) -> AttendanceStatus {
        self.record(date_key)
            .map(|r| r.status)
            .unwrap_or(AttendanceStatus::Pending)
    }

    /// True if any record anywhere in the map has the given status
    pub fn has_ever_been(&self, status: AttendanceStatus) -> bool {
        self.attendance.values().any(|r| r.status == status)
    }
}
