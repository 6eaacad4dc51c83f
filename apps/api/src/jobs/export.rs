//! CSV / JSON export of a user's jobs.

use anyhow::{Context, Result};

use crate::models::job::JobRow;

pub const CSV_HEADER: [&str; 9] = [
    "title",
    "company",
    "location",
    "url",
    "salary",
    "status",
    "description",
    "notes",
    "created_at",
];

/// Renders jobs as CSV. Quoting and escaping are handled by the csv writer.
pub fn jobs_to_csv(jobs: &[JobRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(CSV_HEADER)?;
    for job in jobs {
        writer.write_record([
            job.title.as_str(),
            job.company.as_str(),
            job.location.as_deref().unwrap_or(""),
            job.url.as_deref().unwrap_or(""),
            job.salary.as_deref().unwrap_or(""),
            job.status.as_str(),
            job.description.as_deref().unwrap_or(""),
            job.notes.as_deref().unwrap_or(""),
            &job.created_at.to_rfc3339(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Renders jobs as a pretty-printed JSON array.
pub fn jobs_to_json(jobs: &[JobRow]) -> Result<String> {
    serde_json::to_string_pretty(jobs).context("Failed to serialize jobs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn make_job(title: &str, company: &str, notes: Option<&str>) -> JobRow {
        let created_at = Utc.with_ymd_and_hms(2025, 3, 10, 9, 30, 0).unwrap();
        JobRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: title.to_string(),
            company: company.to_string(),
            location: Some("Remote".to_string()),
            url: None,
            salary: None,
            description: None,
            notes: notes.map(str::to_string),
            status: "applied".to_string(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let jobs = vec![make_job("Engineer", "Acme", None)];
        let csv = jobs_to_csv(&jobs).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "title,company,location,url,salary,status,description,notes,created_at"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Engineer,Acme,Remote,,,applied,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_escapes_commas_and_quotes() {
        let jobs = vec![make_job(
            "Engineer, Backend",
            "Acme \"Labs\"",
            Some("line one\nline two"),
        )];
        let csv = jobs_to_csv(&jobs).unwrap();
        assert!(csv.contains("\"Engineer, Backend\""));
        assert!(csv.contains("\"Acme \"\"Labs\"\"\""));
        assert!(csv.contains("\"line one\nline two\""));
    }

    #[test]
    fn test_csv_of_empty_list_is_header_only() {
        let csv = jobs_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_json_export_is_an_array() {
        let jobs = vec![make_job("Engineer", "Acme", None)];
        let json = jobs_to_json(&jobs).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["company"], "Acme");
    }
}
