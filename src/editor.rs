//! Batch file editing.
//!
//! Each target is read whole, rewritten with [`Rules`], and written back only
//! when the content actually changed. Files are handled one at a time in list
//! order. A missing file is reported and skipped; any other I/O failure aborts
//! the batch, leaving files already written as they are.

use crate::rules::Rules;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Original and rewritten content of one file.
#[derive(Debug, Clone)]
pub struct FileEdit {
    pub path: PathBuf,
    pub original: String,
    pub modified: String,
}

impl FileEdit {
    /// Reads `path` and applies `rules` to its content.
    ///
    /// Line endings and encoding are left untouched so an unmatched file
    /// round-trips byte for byte.
    pub fn load(path: &Path, rules: &Rules) -> Result<Self> {
        let original = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let modified = rules.apply(&original);
        Ok(Self {
            path: path.to_path_buf(),
            original,
            modified,
        })
    }

    pub fn changed(&self) -> bool {
        self.modified != self.original
    }

    /// Overwrites the file with the rewritten content.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.modified)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// Result of processing a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    NotFound,
    Unchanged,
    /// Content changed. Written to disk unless the run is a dry run.
    Updated,
}

/// A processed target and what happened to it.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Per-entry results of a batch run.
#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub entries: Vec<Entry>,
    /// Number of entries whose content changed.
    pub updated: usize,
    /// Whether changed files were written back.
    pub write: bool,
}

impl Summary {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}

/// Processes one file.
///
/// Returns [`Outcome::NotFound`] when nothing exists at `path`. Changed
/// content is written back only if `write` is set.
pub fn process(path: &Path, rules: &Rules, write: bool) -> Result<Outcome> {
    if !path.exists() {
        return Ok(Outcome::NotFound);
    }

    let edit = FileEdit::load(path, rules)?;
    if !edit.changed() {
        return Ok(Outcome::Unchanged);
    }

    if write {
        edit.write()?;
    }
    Ok(Outcome::Updated)
}

/// Processes `paths` in order, calling `on_entry` as soon as each file is done.
///
/// Stops at the first hard I/O error; entries before it have already been
/// reported and, if changed, written.
pub fn run<F>(paths: &[PathBuf], rules: &Rules, write: bool, mut on_entry: F) -> Result<Summary>
where
    F: FnMut(&Entry),
{
    let mut summary = Summary {
        write,
        ..Summary::default()
    };

    for path in paths {
        let outcome = process(path, rules, write)?;
        if outcome == Outcome::Updated {
            summary.updated += 1;
        }

        let entry = Entry {
            path: path.clone(),
            outcome,
        };
        on_entry(&entry);
        summary.entries.push(entry);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = "import Header from '@/components/Header'\nimport Link from 'next/link'\n\nexport default function Page() {\n  return (\n    <>\n      <Header />\n      <main>hi</main>\n    </>\n  )\n}\n";
    const CLEAN: &str = "import Link from 'next/link'\n\nexport default function Page() {\n  return <main>hi</main>\n}\n";

    fn rules() -> Rules {
        Rules::default_header().unwrap()
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn file_edit_tracks_changes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "page.tsx", PAGE);
        let edit = FileEdit::load(&path, &rules()).unwrap();
        assert!(edit.changed());
        assert_eq!(edit.original, PAGE);

        let path = write_file(&dir, "clean.tsx", CLEAN);
        let edit = FileEdit::load(&path, &rules()).unwrap();
        assert!(!edit.changed());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let outcome = process(&dir.path().join("nope.tsx"), &rules(), true).unwrap();
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[test]
    fn updates_file_in_place() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "page.tsx", PAGE);

        assert_eq!(process(&path, &rules(), true).unwrap(), Outcome::Updated);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "import Link from 'next/link'\n\nexport default function Page() {\n  return (\n    <><main>hi</main>\n    </>\n  )\n}\n"
        );
    }

    #[test]
    fn unchanged_file_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let content = "import Link from 'next/link'\r\n\r\n\r\n\r\nconst x = 1;\r\n";
        let path = write_file(&dir, "crlf.tsx", content);

        assert_eq!(process(&path, &rules(), true).unwrap(), Outcome::Unchanged);
        assert_eq!(fs::read(&path).unwrap(), content.as_bytes());
    }

    #[test]
    fn dry_run_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "page.tsx", PAGE);

        assert_eq!(process(&path, &rules(), false).unwrap(), Outcome::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), PAGE);
    }

    #[test]
    fn run_continues_past_missing_files() {
        let dir = TempDir::new().unwrap();
        let first = write_file(&dir, "a.tsx", PAGE);
        let missing = dir.path().join("missing.tsx");
        let last = write_file(&dir, "b.tsx", CLEAN);
        let paths = vec![first.clone(), missing.clone(), last.clone()];

        let mut seen = Vec::new();
        let summary = run(&paths, &rules(), true, |e| seen.push(e.path.clone())).unwrap();

        assert_eq!(seen, paths);
        assert_eq!(summary.updated, 1);
        let outcomes: Vec<_> = summary.entries.iter().map(|e| e.outcome).collect();
        assert_eq!(
            outcomes,
            vec![Outcome::Updated, Outcome::NotFound, Outcome::Unchanged]
        );
        assert_eq!(summary.count(Outcome::NotFound), 1);
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let paths = vec![
            write_file(&dir, "a.tsx", PAGE),
            write_file(&dir, "b.tsx", CLEAN),
        ];

        let first = run(&paths, &rules(), true, |_| {}).unwrap();
        assert_eq!(first.updated, 1);

        let second = run(&paths, &rules(), true, |_| {}).unwrap();
        assert_eq!(second.updated, 0);
        assert_eq!(second.count(Outcome::Unchanged), 2);
    }

    #[test]
    fn read_error_aborts_batch_without_rollback() {
        let dir = TempDir::new().unwrap();
        let first = write_file(&dir, "a.tsx", PAGE);
        let not_a_file = dir.path().join("subdir");
        fs::create_dir(&not_a_file).unwrap();
        let after = write_file(&dir, "c.tsx", PAGE);

        let mut seen = 0;
        let err = run(
            &[first.clone(), not_a_file.clone(), after.clone()],
            &rules(),
            true,
            |_| seen += 1,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Failed to read"));
        assert_eq!(seen, 1);
        assert_ne!(fs::read_to_string(&first).unwrap(), PAGE);
        assert_eq!(fs::read_to_string(&after).unwrap(), PAGE);
    }

    #[test]
    fn invalid_utf8_is_a_hard_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.tsx");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(process(&path, &rules(), true).is_err());
    }
}
