//! The attendance store: the live roster and its invariants

use presence_model::{AttendanceRecord, AttendanceStatus, Group, Person};
use presence_util::{PersonId, PresenceError, Result};

/// The canonical collection of people being tracked.
///
/// Invariants held here:
/// - person ids are unique
/// - every attendance map key equals the `date` of its record
/// - a justification is stored only alongside an `Absent` status
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    fn get_mut(&mut self, id: &PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| &p.id == id)
    }

    /// Add a person with a fresh id and an empty attendance map.
    ///
    /// The name is stored trimmed; an empty trimmed name is a validation
    /// error. Display normalization (uppercasing) is the caller's concern.
    pub fn add_person(
        &mut self,
        name: &str,
        group: Group,
        avatar: impl Into<String>,
    ) -> Result<&Person> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresenceError::validation("name must not be empty"));
        }

        self.people.push(Person::new(name, group, avatar));
        Ok(self.people.last().unwrap())
    }

    /// Remove a person and all of their attendance data.
    ///
    /// Unknown ids are a no-op, so repeated deletion is safe. Returns
    /// whether anything was removed.
    pub fn remove_person(&mut self, id: &PersonId) -> bool {
        let before = self.people.len();
        self.people.retain(|p| &p.id != id);
        self.people.len() != before
    }

    /// Overwrite the record for a person/date pair.
    ///
    /// The justification is discarded unless the status is `Absent`.
    pub fn set_attendance(
        &mut self,
        id: &PersonId,
        date_key: &str,
        status: AttendanceStatus,
        justification: Option<String>,
    ) -> Result<()> {
        let person = self
            .get_mut(id)
            .ok_or_else(|| PresenceError::PersonNotFound(id.clone()))?;

        let record = AttendanceRecord {
            date: date_key.to_string(),
            status,
            justification: match status {
                AttendanceStatus::Absent => justification,
                _ => None,
            },
        };
        person.attendance.insert(date_key.to_string(), record);

        Ok(())
    }

    /// Atomic bulk replace of the entire roster (restore/import path).
    pub fn replace_all(&mut self, people: Vec<Person>) {
        self.people = people;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_person_trims_and_starts_empty() {
        let mut roster = Roster::new();
        let person = roster
            .add_person("  JANE DOE  ", Group::Morning, "")
            .unwrap();

        assert_eq!(person.name, "JANE DOE");
        assert!(person.attendance.is_empty());
    }

    #[test]
    fn add_person_rejects_blank_names() {
        let mut roster = Roster::new();
        assert!(roster.add_person("   ", Group::Morning, "").is_err());
        assert!(roster.add_person("", Group::Evening, "").is_err());
        assert!(roster.is_empty());
    }

    #[test]
    fn added_people_get_unique_ids() {
        let mut roster = Roster::new();
        let a = roster.add_person("A", Group::Morning, "").unwrap().id.clone();
        let b = roster.add_person("A", Group::Morning, "").unwrap().id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn remove_person_is_idempotent() {
        let mut roster = Roster::new();
        let id = roster
            .add_person("JANE DOE", Group::Morning, "")
            .unwrap()
            .id
            .clone();

        assert!(roster.remove_person(&id));
        assert!(!roster.remove_person(&id));
        assert!(roster.is_empty());

        // Unknown ids never raise and never alter the roster
        assert!(!roster.remove_person(&PersonId::new("nobody")));
    }

    #[test]
    fn set_attendance_requires_a_known_person() {
        let mut roster = Roster::new();
        let err = roster
            .set_attendance(
                &PersonId::new("nobody"),
                "2025-11-22",
                AttendanceStatus::Present,
                None,
            )
            .unwrap_err();
        assert!(matches!(err, PresenceError::PersonNotFound(_)));
    }

    #[test]
    fn set_attendance_keeps_key_and_date_in_sync() {
        let mut roster = Roster::new();
        let id = roster
            .add_person("JANE DOE", Group::Morning, "")
            .unwrap()
            .id
            .clone();

        roster
            .set_attendance(&id, "2025-11-22", AttendanceStatus::Present, None)
            .unwrap();

        let person = roster.get(&id).unwrap();
        let record = person.record("2025-11-22").unwrap();
        assert_eq!(record.date, "2025-11-22");
    }

    #[test]
    fn justification_is_discarded_unless_absent() {
        let mut roster = Roster::new();
        let id = roster
            .add_person("JANE DOE", Group::Morning, "")
            .unwrap()
            .id
            .clone();

        roster
            .set_attendance(
                &id,
                "2025-11-22",
                AttendanceStatus::Present,
                Some("Maladie".into()),
            )
            .unwrap();
        assert!(roster
            .get(&id)
            .unwrap()
            .record("2025-11-22")
            .unwrap()
            .justification
            .is_none());

        roster
            .set_attendance(
                &id,
                "2025-11-22",
                AttendanceStatus::Absent,
                Some("Maladie".into()),
            )
            .unwrap();
        assert_eq!(
            roster
                .get(&id)
                .unwrap()
                .record("2025-11-22")
                .unwrap()
                .justification
                .as_deref(),
            Some("Maladie")
        );
    }

    #[test]
    fn set_attendance_overwrites_prior_record() {
        let mut roster = Roster::new();
        let id = roster
            .add_person("JANE DOE", Group::Morning, "")
            .unwrap()
            .id
            .clone();

        roster
            .set_attendance(
                &id,
                "2025-11-22",
                AttendanceStatus::Absent,
                Some("Retard".into()),
            )
            .unwrap();
        roster
            .set_attendance(&id, "2025-11-22", AttendanceStatus::Present, None)
            .unwrap();

        let person = roster.get(&id).unwrap();
        assert_eq!(person.attendance.len(), 1);
        let record = person.record("2025-11-22").unwrap();
        assert_eq!(record.status, AttendanceStatus::Present);
        assert!(record.justification.is_none());
    }

    #[test]
    fn replace_all_swaps_the_whole_roster() {
        let mut roster = Roster::new();
        roster.add_person("OLD", Group::Morning, "").unwrap();

        let replacement = vec![Person::new("NEW", Group::Evening, "")];
        roster.replace_all(replacement);

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.people()[0].name, "NEW");
    }
}
