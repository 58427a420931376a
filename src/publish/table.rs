//! Results table
//!
//! An append-only CSV with one row per successfully published post, in
//! processing order. Created fresh at the start of each run and uploaded as
//! a spreadsheet artifact at the end.

use super::PublishError;
use crate::summarize::SummaryRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exact header row of the results table
pub const RESULTS_HEADER: &str = "Title,Industry,Keywords,Link to Article,Link to Docs";

/// CSV file collecting one row per published post
pub struct ResultsTable {
    path: PathBuf,
}

impl ResultsTable {
    /// Creates the table file with its header row, replacing any previous
    /// run's file
    pub fn create(path: &Path) -> Result<Self, PublishError> {
        std::fs::write(path, format!("{}\n", RESULTS_HEADER))?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Appends one row for a published post
    pub fn append_row(
        &self,
        record: &SummaryRecord,
        article_url: &str,
        docs_link: &str,
    ) -> Result<(), PublishError> {
        let keywords = record.keywords.join(", ");
        let fields = [
            record.title.as_str(),
            record.industry.as_str(),
            keywords.as_str(),
            article_url,
            docs_link,
        ];
        let row = fields
            .iter()
            .map(|field| escape_field(field))
            .collect::<Vec<_>>()
            .join(",");

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}", row)?;
        Ok(())
    }

    /// Reads the full table content for uploading
    pub fn contents(&self) -> Result<String, PublishError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Quotes a field when it contains a comma, quote, or newline
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(title: &str) -> SummaryRecord {
        SummaryRecord {
            title: title.to_string(),
            industry: "Analytics".to_string(),
            keywords: vec!["data".to_string(), "cloud".to_string()],
            body: "body".to_string(),
        }
    }

    #[test]
    fn test_create_writes_exact_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let table = ResultsTable::create(&path).unwrap();
        assert_eq!(
            table.contents().unwrap(),
            "Title,Industry,Keywords,Link to Article,Link to Docs\n"
        );
    }

    #[test]
    fn test_append_row_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let table = ResultsTable::create(&path).unwrap();

        table
            .append_row(
                &record("First"),
                "https://x.com/blog/first",
                "https://docs.google.com/document/d/abc",
            )
            .unwrap();
        table
            .append_row(
                &record("Second"),
                "https://x.com/blog/second",
                "https://docs.google.com/document/d/def",
            )
            .unwrap();

        let lines: Vec<String> = table
            .contents()
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], RESULTS_HEADER);
        assert_eq!(
            lines[1],
            "First,Analytics,\"data, cloud\",https://x.com/blog/first,https://docs.google.com/document/d/abc"
        );
        assert!(lines[2].starts_with("Second,"));
    }

    #[test]
    fn test_create_replaces_previous_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let table = ResultsTable::create(&path).unwrap();
        table.append_row(&record("Old"), "https://x.com/a", "link").unwrap();

        let table = ResultsTable::create(&path).unwrap();
        assert_eq!(table.contents().unwrap(), format!("{}\n", RESULTS_HEADER));
    }

    #[test]
    fn test_fields_with_commas_and_quotes_escaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let table = ResultsTable::create(&path).unwrap();

        let mut rec = record("Scaling, fast");
        rec.industry = "Say \"data\"".to_string();
        table.append_row(&rec, "https://x.com/a", "link").unwrap();

        let contents = table.contents().unwrap();
        assert!(contents.contains("\"Scaling, fast\""));
        assert!(contents.contains("\"Say \"\"data\"\"\""));
    }
}
