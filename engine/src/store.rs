//! One JSON file per character under a single directory.
//!
//! Records have no id. Operations address a record by its filename, and the
//! interactive flows turn "character #N" into a filename through `list()`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::Character;

pub const DEFAULT_DIR: &str = "saved_characters";
pub const RECORD_EXT: &str = ".json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse character JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Listing row shown in the numbered pick menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub file: String,
    pub name: String,
    pub level: u32,
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_of(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Write `character` to a new file and return its path. Creates the
    /// directory when missing.
    pub fn save(&self, character: &Character) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            action: "create directory",
            path: self.dir.clone(),
            source,
        })?;

        let stem = file_stem(&character.name);
        let mut millis = chrono::Utc::now().timestamp_millis();
        let mut path = self.dir.join(format!("{}_{}{}", stem, millis, RECORD_EXT));
        while path.exists() {
            millis += 1;
            path = self.dir.join(format!("{}_{}{}", stem, millis, RECORD_EXT));
        }

        write_record(&path, character)?;
        info!(path = %path.display(), character = %character.name, "character saved");
        Ok(path)
    }

    /// Record filenames, sorted. A missing directory lists as empty.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    action: "list",
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                action: "list",
                path: self.dir.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(RECORD_EXT) && entry.path().is_file() {
                files.push(name);
            }
        }
        files.sort();
        Ok(files)
    }

    /// `list()` joined with each record's name and level. Files that fail
    /// to load are skipped with a warning.
    pub fn summaries(&self) -> Result<Vec<RecordSummary>, StoreError> {
        let mut rows = Vec::new();
        for file in self.list()? {
            match self.load(&file) {
                Ok(character) => rows.push(RecordSummary {
                    file,
                    name: character.name,
                    level: character.level,
                }),
                Err(e) => warn!(error = %e, "skipping unreadable character file"),
            }
        }
        Ok(rows)
    }

    pub fn load(&self, file: &str) -> Result<Character, StoreError> {
        let path = self.path_of(file);
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            action: "read",
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| StoreError::Json { path, source })
    }

    /// Overwrite an existing record in place.
    pub fn update(&self, file: &str, character: &Character) -> Result<(), StoreError> {
        let path = self.path_of(file);
        write_record(&path, character)?;
        debug!(path = %path.display(), "character updated");
        Ok(())
    }

    pub fn delete(&self, file: &str) -> Result<(), StoreError> {
        let path = self.path_of(file);
        fs::remove_file(&path).map_err(|source| StoreError::Io {
            action: "delete",
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "character deleted");
        Ok(())
    }
}

/// Turn operator input into a 0-based index for a 1-based menu of `len`
/// entries. Non-numeric, zero, and out-of-range input yield `None`.
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    (1..=len).contains(&choice).then(|| choice - 1)
}

/// Name with each whitespace run replaced by `_`.
pub fn file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(c);
            in_space = false;
        }
    }
    stem
}

fn write_record(path: &Path, character: &Character) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(character).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}
