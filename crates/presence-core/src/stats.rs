//! Pure filtering and aggregation over a roster.
//!
//! Nothing here mutates its inputs; given the same roster and calendar the
//! results are identical on every call.

use presence_model::{AttendanceStatus, Calendar, Group, Person};

/// Group filter for roster views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFilter {
    All,
    Only(Group),
}

/// Presence filter: "has ever been marked X" over the whole attendance map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceFilter {
    All,
    Present,
    Absent,
}

/// Rollup over every person × calendar-date pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalStats {
    pub present: usize,
    pub absent: usize,
    pub pending: usize,
    /// Rounded percentage of present over recorded (present + absent) days
    pub rate: u32,
}

/// Per-person rollup, restricted to the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersonStats {
    pub present: usize,
    pub absent: usize,
    pub rate: u32,
}

/// Filtered view of the roster. Group and presence filters compose with
/// logical AND; a person present once and absent once matches both
/// presence filters.
pub fn filter_people<'a>(
    people: &'a [Person],
    group: GroupFilter,
    presence: PresenceFilter,
) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|person| match group {
            GroupFilter::All => true,
            GroupFilter::Only(g) => person.group == g,
        })
        .filter(|person| match presence {
            PresenceFilter::All => true,
            PresenceFilter::Present => person.has_ever_been(AttendanceStatus::Present),
            PresenceFilter::Absent => person.has_ever_been(AttendanceStatus::Absent),
        })
        .collect()
}

/// Classify every person × calendar-date pair; dates without a record count
/// as pending, and records outside the calendar are ignored.
pub fn global_stats(people: &[Person], calendar: &Calendar) -> GlobalStats {
    let mut stats = GlobalStats::default();

    for person in people {
        for date in calendar.dates() {
            match person.status_on(date) {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Absent => stats.absent += 1,
                AttendanceStatus::Pending => stats.pending += 1,
            }
        }
    }

    stats.rate = presence_rate(stats.present, stats.absent);
    stats
}

/// Same classification restricted to one person, so
/// `present + absent <= calendar.len()` always holds.
pub fn person_stats(person: &Person, calendar: &Calendar) -> PersonStats {
    let mut stats = PersonStats::default();

    for date in calendar.dates() {
        match person.status_on(date) {
            AttendanceStatus::Present => stats.present += 1,
            AttendanceStatus::Absent => stats.absent += 1,
            AttendanceStatus::Pending => {}
        }
    }

    stats.rate = presence_rate(stats.present, stats.absent);
    stats
}

/// Rounded percent of present over recorded days; 0 when nothing is recorded
fn presence_rate(present: usize, absent: usize) -> u32 {
    let recorded = present + absent;
    if recorded == 0 {
        return 0;
    }
    ((present as f64 / recorded as f64) * 100.0).round() as u32
}
