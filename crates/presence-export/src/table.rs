//! Tabular attendance sheet construction

use presence_core::stats::person_stats;
use presence_model::{AttendanceStatus, Calendar, Person};
use presence_util::{format_day_name, format_short_date};

/// The attendance sheet as rows of strings, ready for any encoder.
///
/// Column order is fixed: name, group, one column per calendar date in
/// calendar order, then the presence total and rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Build the sheet: one row per person, cells labeled for human readers
pub fn build_table(people: &[Person], calendar: &Calendar) -> ExportTable {
    let mut headers = vec!["NOM".to_string(), "GROUPE".to_string()];
    headers.extend(
        calendar
            .dates()
            .iter()
            .map(|date| format!("{} {}", format_day_name(date), format_short_date(date))),
    );
    headers.push("TOTAL PRÉSENCE".to_string());
    headers.push("TAUX".to_string());

    let total_days = calendar.len();
    let rows = people
        .iter()
        .map(|person| {
            let mut row = vec![person.name.clone(), person.group.label().to_string()];
            row.extend(calendar.dates().iter().map(|date| date_cell(person, date)));

            let stats = person_stats(person, calendar);
            row.push(format!("{} / {}", stats.present, total_days));
            row.push(format!("{}%", day_rate(stats.present, total_days)));

            row
        })
        .collect();

    ExportTable { headers, rows }
}

fn date_cell(person: &Person, date: &str) -> String {
    match person.record(date) {
        None => String::new(),
        Some(record) => match record.status {
            AttendanceStatus::Present => "PRÉSENT".to_string(),
            AttendanceStatus::Absent => match &record.justification {
                Some(justification) => format!("ABSENT ({justification})"),
                None => "ABSENT".to_string(),
            },
            // An explicitly cleared cell reads the same as an untouched one
            AttendanceStatus::Pending => String::new(),
        },
    }
}

/// Rounded percent of present days over the whole tracking period
fn day_rate(present: usize, total_days: usize) -> u32 {
    ((present as f64 / total_days.max(1) as f64) * 100.0).round() as u32
}
