//! Flat-file employee store.
//!
//! # Responsibility
//! - Persist records as one `id,name,salary` line per record, UTF-8,
//!   newline-terminated, no header, no escaping.
//! - Keep file access serialized behind one mutex so a shared store is
//!   safe in a multi-caller context.
//!
//! # Invariants
//! - File order is append order; delete preserves the relative order of
//!   the surviving lines.
//! - Delete replaces the store by renaming a fully written temp file over
//!   it; the original is never removed before the replacement exists.
//! - A missing store file reads as an empty store.

use crate::model::employee::{Employee, EmployeeRow};
use crate::store::{EmployeeStore, StoreError, StoreResult};
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

const FIELDS_PER_LINE: usize = 3;

/// Employee store backed by a single flat text file.
pub struct FileEmployeeStore {
    path: PathBuf,
    // Serializes append/list/delete so interleaved writers cannot corrupt
    // the file. The () payload carries no data; the file is the state.
    lock: Mutex<()>,
}

impl FileEmployeeStore {
    /// Creates a store over `path`. The file is created lazily on the
    /// first append; it is not touched here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the file itself is still the source of truth.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_contents(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { op: "read", source }),
        }
    }
}

impl EmployeeStore for FileEmployeeStore {
    fn append(&self, employee: &Employee) -> StoreResult<()> {
        employee.validate()?;

        let _guard = self.guard();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Io { op: "open", source })?;
        writeln!(file, "{}", employee.to_line())
            .map_err(|source| StoreError::Io { op: "write", source })?;

        debug!(
            "event=record_appended module=store status=ok id={}",
            employee.id
        );
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<EmployeeRow>> {
        let _guard = self.guard();
        let contents = match self.read_contents()? {
            Some(contents) => contents,
            None => return Ok(Vec::new()),
        };

        contents
            .lines()
            .enumerate()
            .map(|(index, line)| parse_line(line, index + 1))
            .collect()
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let _guard = self.guard();
        let contents = match self.read_contents()? {
            Some(contents) => contents,
            None => return Ok(false),
        };

        let mut retained = String::with_capacity(contents.len());
        let mut removed = 0usize;
        for (index, line) in contents.lines().enumerate() {
            // Parse before deciding, so a malformed line aborts the delete
            // while the original file is still untouched.
            let row = parse_line(line, index + 1)?;
            if row.id == id {
                removed += 1;
            } else {
                retained.push_str(line);
                retained.push('\n');
            }
        }

        if removed == 0 {
            return Ok(false);
        }

        let temp_path = sibling_temp_path(&self.path);
        fs::write(&temp_path, retained)
            .map_err(|source| StoreError::Io { op: "write", source })?;
        fs::rename(&temp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            StoreError::Io {
                op: "rename",
                source,
            }
        })?;

        info!(
            "event=records_deleted module=store status=ok id={id} removed={removed}"
        );
        Ok(true)
    }
}

fn parse_line(line: &str, line_number: usize) -> StoreResult<EmployeeRow> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(StoreError::MalformedLine {
            line_number,
            field_count: fields.len(),
        });
    }

    Ok(EmployeeRow {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        salary: fields[2].to_string(),
    })
}

fn sibling_temp_path(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}
