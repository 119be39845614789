use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::discovery::DiscoveredFile;

use super::record::format_modified;
use super::FileRecord;

const EMPTY_MESSAGE: &str = "No files found";

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub total: usize,
    pub files: Vec<FileRecord>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(files: &[DiscoveredFile], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Self::build_output(files))?),
            OutputFormat::Table => Ok(Self::render_table(files)),
        }
    }

    pub fn build_output(files: &[DiscoveredFile]) -> JsonOutput {
        JsonOutput {
            total: files.len(),
            files: files.iter().map(FileRecord::from_discovered).collect(),
        }
    }

    /// Renders one row per file, numbered from 1 so a row can be passed to
    /// `--open`.
    pub fn render_table(files: &[DiscoveredFile]) -> String {
        if files.is_empty() {
            return format!("{EMPTY_MESSAGE}\n");
        }

        let rows: Vec<[String; 4]> = files
            .iter()
            .enumerate()
            .map(|(i, file)| {
                [
                    (i + 1).to_string(),
                    format_modified(file),
                    file.name().to_string(),
                    file.containing_directory().display().to_string(),
                ]
            })
            .collect();

        let header = ["#", "MODIFIED", "NAME", "DIRECTORY"].map(String::from);
        let mut widths = header.clone().map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for row in std::iter::once(&header).chain(rows.iter()) {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::{Duration, UNIX_EPOCH};

    fn sample() -> Vec<DiscoveredFile> {
        vec![
            DiscoveredFile::new(
                "newer.png",
                "/data/1/Canvas/22",
                UNIX_EPOCH + Duration::from_secs(2_000_000),
            ),
            DiscoveredFile::new(
                "older.PNG",
                "/data/1/Canvas/3",
                UNIX_EPOCH + Duration::from_secs(1_000_000),
            ),
        ]
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(OutputFormatter::render_table(&[]), "No files found\n");
    }

    #[test]
    fn test_table_rows_are_numbered_and_aligned() {
        let table = OutputFormatter::render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#  MODIFIED"));
        assert!(lines[1].starts_with("1  "));
        assert!(lines[1].ends_with("/data/1/Canvas/22"));
        assert!(lines[2].starts_with("2  "));
        assert_eq!(lines[1].find("newer.png"), lines[2].find("older.PNG"));
    }

    #[test]
    fn test_json_output() {
        let json = OutputFormatter::format(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 2);
        assert_eq!(value["files"][0]["name"], "newer.png");
        assert_eq!(value["files"][0]["path"], "/data/1/Canvas/22/newer.png");
        assert_eq!(value["files"][1]["modified_unix"], 1_000_000);
    }

    #[test]
    fn test_json_empty() {
        let json = OutputFormatter::format(&[], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["files"], serde_json::json!([]));
    }
}
