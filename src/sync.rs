use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::{Config, FailurePolicy};
use crate::error::{Result, SyncError};
use crate::fetch::Fetcher;
use crate::letterboxd::{self, DiaryEntry, EnrichedEntry};
use crate::tmdb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Poster,
    NoPoster,
    // Only under FailurePolicy::Isolate.
    Failed,
}

#[derive(Debug, Default)]
pub struct EnrichReport {
    pub films: Vec<EnrichedEntry>,
    pub outcomes: Vec<Outcome>,
}

impl EnrichReport {
    fn push(&mut self, film: EnrichedEntry, outcome: Outcome) {
        self.films.push(film);
        self.outcomes.push(outcome);
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|o| **o == outcome).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub path: PathBuf,
    pub total: usize,
    pub with_poster: usize,
    pub without_poster: usize,
    pub failed: usize,
}

pub async fn run(config: &Config) -> Result<SyncReport> {
    let fetcher = Fetcher::new(config.request_delay)?;

    let entries = letterboxd::fetch_diary(&fetcher, config).await?;
    let report = enrich(&fetcher, config, entries).await?;

    write_artifact(&config.output, &report.films)?;
    info!("JSON written to {}", config.output.display());

    Ok(SyncReport {
        path: config.output.clone(),
        total: report.films.len(),
        with_poster: report.count(Outcome::Poster),
        without_poster: report.count(Outcome::NoPoster),
        failed: report.count(Outcome::Failed),
    })
}

/// One lookup at a time, in order. Under [`FailurePolicy::Abort`] the first
/// failure ends the run and nothing gathered so far is kept.
pub async fn enrich(
    fetcher: &Fetcher,
    config: &Config,
    entries: Vec<DiaryEntry>,
) -> Result<EnrichReport> {
    info!("Enriching {} films with TMDb posters", entries.len());

    let mut report = EnrichReport::default();

    for entry in entries {
        let candidate = match tmdb::resolve(fetcher, config, &entry.title).await {
            Ok(candidate) => candidate,
            Err(e) if config.failure_policy == FailurePolicy::Isolate => {
                warn!("Poster lookup for {:?} failed: {}", entry.title, e);
                report.push(EnrichedEntry::new(entry, None), Outcome::Failed);
                continue;
            }
            Err(e) => return Err(e),
        };

        let poster_url = tmdb::poster_url(&config.image_base, candidate.as_ref());
        let outcome = if poster_url.is_some() {
            Outcome::Poster
        } else {
            Outcome::NoPoster
        };
        debug!("{}: {:?}", entry.title, outcome);

        report.push(EnrichedEntry::new(entry, poster_url), outcome);
    }

    Ok(report)
}

/// Replace `path` with the films as pretty JSON, `null` for missing values.
///
/// Written to a sibling temp file first, then renamed over `path`.
pub fn write_artifact(path: &Path, films: &[EnrichedEntry]) -> Result<()> {
    let io_err = |source| SyncError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut json = serde_json::to_string_pretty(films)?;
    json.push('\n');

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(json.as_bytes()).map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, link: Option<&str>, poster: Option<&str>) -> EnrichedEntry {
        EnrichedEntry {
            title: title.to_string(),
            letterboxd_url: link.map(String::from),
            poster_url: poster.map(String::from),
        }
    }

    #[test]
    fn artifact_uses_camel_case_and_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_artifact(
            &path,
            &[
                film(
                    "Oldboy",
                    Some("https://letterboxd.com/film/oldboy/"),
                    Some("https://image.tmdb.org/t/p/w500/x.jpg"),
                ),
                film("Unknown", None, None),
            ],
        )
        .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let expected = r#"[
  {
    "title": "Oldboy",
    "letterboxdUrl": "https://letterboxd.com/film/oldboy/",
    "posterUrl": "https://image.tmdb.org/t/p/w500/x.jpg"
  },
  {
    "title": "Unknown",
    "letterboxdUrl": null,
    "posterUrl": null
  }
]
"#;
        assert_eq!(written, expected);
    }

    #[test]
    fn empty_artifact_is_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");

        write_artifact(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn creates_missing_parent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("someone-movies.json");

        write_artifact(&path, &[film("First", None, None)]).unwrap();
        write_artifact(&path, &[film("Second", None, None)]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Second"));
        assert!(!written.contains("First"));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_artifact(&blocker.join("out.json"), &[]).unwrap_err();

        assert!(matches!(err, SyncError::Io { .. }));
    }

    #[test]
    fn failed_write_keeps_previous_artifact_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("films.json");
        write_artifact(&path, &[film("Kept", None, None)]).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        // A directory at the target path makes the final rename fail.
        let blocked = dir.path().join("blocked.json");
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("inside"), "x").unwrap();
        let err = write_artifact(&blocked, &[film("New", None, None)]).unwrap_err();

        assert!(matches!(err, SyncError::Io { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["blocked.json", "films.json"]);
    }

}
