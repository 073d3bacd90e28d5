//! JSON roster export (the shape `import_roster` accepts back)

use chrono::NaiveDate;
use presence_model::Person;
use presence_util::date_key;

use crate::ExportResult;

/// Pretty-printed roster JSON
pub fn export_json(people: &[Person]) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(people)?)
}

/// Download name for a JSON export taken on the given day
pub fn json_export_file_name(date: NaiveDate) -> String {
    format!("neo-presence-export-{}.json", date_key(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use presence_model::{Group, Person};

    #[test]
    fn export_is_a_top_level_array() {
        let people = vec![Person::new("ALI SAID", Group::Evening, "")];
        let json = export_json(&people).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["name"], "ALI SAID");
        assert_eq!(value[0]["group"], "Groupe Soir");
    }

    #[test]
    fn file_name_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 6).unwrap();
        assert_eq!(
            json_export_file_name(date),
            "neo-presence-export-2025-12-06.json"
        );
    }
}
