//! EXIF ingestion via exiftool.
//!
//! Shells out to a persistent exiftool process (`-stay_open` mode) and maps
//! capture time plus GPS fix into [`Photo`] records. The `-n` flag keeps
//! GPS output as signed decimal degrees, so no sexagesimal parsing is
//! needed. Files missing a tag produce records with the matching field
//! empty; ingestion itself only fails when the exiftool process or its
//! output is broken.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::photo::Photo;

#[derive(Deserialize)]
struct ExiftoolOutput {
    #[serde(rename = "SourceFile")]
    source_file: String,
    #[serde(rename = "DateTimeOriginal")]
    date_time_original: Option<String>,
    #[serde(rename = "GPSLatitude")]
    gps_latitude: Option<f64>,
    #[serde(rename = "GPSLongitude")]
    gps_longitude: Option<f64>,
}

pub struct ExiftoolRunner {
    child: Child,
    stdin: BufWriter<std::process::ChildStdin>,
    stdout: BufReader<std::process::ChildStdout>,
}

impl ExiftoolRunner {
    /// Spawn a persistent exiftool process.
    pub fn new() -> Result<Self> {
        let mut child = Command::new("exiftool")
            .args(["-stay_open", "True", "-@", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to spawn exiftool process. Make sure exiftool is installed and in PATH.")?;

        let stdin = BufWriter::new(
            child
                .stdin
                .take()
                .context("Failed to get stdin handle for exiftool process")?,
        );
        let stdout = BufReader::new(
            child
                .stdout
                .take()
                .context("Failed to get stdout handle for exiftool process")?,
        );

        Ok(Self {
            child,
            stdin,
            stdout,
        })
    }

    /// Extract photo records for the given image files.
    pub fn extract(&mut self, paths: &[PathBuf]) -> Result<Vec<Photo>> {
        if paths.is_empty() {
            return Ok(Vec::new());
        }

        writeln!(self.stdin, "-json")?;
        writeln!(self.stdin, "-n")?;
        writeln!(self.stdin, "-fast2")?;
        writeln!(self.stdin, "-DateTimeOriginal")?;
        writeln!(self.stdin, "-GPSLatitude")?;
        writeln!(self.stdin, "-GPSLongitude")?;

        for path in paths {
            writeln!(self.stdin, "{}", path.display())?;
        }

        writeln!(self.stdin, "-execute")?;
        self.stdin.flush()?;

        // Read JSON output until the {ready} sentinel.
        let mut json_output = String::new();
        loop {
            let mut line = String::new();
            let bytes_read = self.stdout.read_line(&mut line)?;
            if bytes_read == 0 {
                bail!("Unexpected EOF from exiftool process");
            }

            let trimmed = line.trim();
            if trimmed.starts_with("{ready") && trimmed.ends_with('}') {
                break;
            }
            json_output.push_str(&line);
        }

        let rows: Vec<ExiftoolOutput> = serde_json::from_str(&json_output)
            .context("Failed to parse exiftool JSON output")?;

        Ok(rows
            .into_iter()
            .map(|row| Photo {
                id: row.source_file,
                taken_at: row
                    .date_time_original
                    .as_deref()
                    .and_then(parse_exif_datetime),
                latitude: row.gps_latitude,
                longitude: row.gps_longitude,
                location_name: None,
            })
            .collect())
    }
}

impl Drop for ExiftoolRunner {
    fn drop(&mut self) {
        // Gracefully shut down exiftool.
        let _ = writeln!(self.stdin, "-stay_open");
        let _ = writeln!(self.stdin, "False");
        let _ = self.stdin.flush();
        let _ = self.child.wait();
    }
}

/// Parse exiftool's `YYYY:MM:DD HH:MM:SS` datetime format.
fn parse_exif_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y:%m:%d %H:%M:%S").ok()?;
    Some(DateTime::from_naive_utc_and_offset(naive, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_exif_datetime() {
        let dt = parse_exif_datetime("2024:06:15 14:30:25").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 25);
    }

    #[test]
    fn test_parse_exif_datetime_rejects_garbage() {
        assert!(parse_exif_datetime("").is_none());
        assert!(parse_exif_datetime("2024-06-15T14:30:25Z").is_none());
        assert!(parse_exif_datetime("0000:00:00 00:00:00").is_none());
    }

    #[test]
    fn test_rows_map_to_photos() {
        let json = r#"[
            {"SourceFile": "/photos/a.jpg", "DateTimeOriginal": "2024:06:15 09:00:00",
             "GPSLatitude": 48.8566, "GPSLongitude": 2.3522},
            {"SourceFile": "/photos/b.jpg"}
        ]"#;
        let rows: Vec<ExiftoolOutput> = serde_json::from_str(json).unwrap();
        let photos: Vec<Photo> = rows
            .into_iter()
            .map(|row| Photo {
                id: row.source_file,
                taken_at: row
                    .date_time_original
                    .as_deref()
                    .and_then(parse_exif_datetime),
                latitude: row.gps_latitude,
                longitude: row.gps_longitude,
                location_name: None,
            })
            .collect();

        assert_eq!(photos.len(), 2);
        assert!(photos[0].taken_at.is_some());
        assert!(photos[0].has_coordinates());
        assert!(photos[1].taken_at.is_none());
        assert!(!photos[1].has_coordinates());
    }
}
