//! Per-file include information
//!
//! A [`FileRecord`] is one node of the include graph. Records are identified
//! by base name only: `src/util.h` and `include/util.h` are the same node.
//! This is a known limitation of name-based include resolution, kept because
//! `#include "util.h"` has to match whichever `util.h` the tree contains.

use crate::extractor::scan_includes;
use log::{debug, warn};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Include information for one source or header file.
///
/// Equality, ordering and hashing only look at [`name`](Self::name).
#[derive(Debug, Clone)]
pub struct FileRecord {
    name: String,
    dir: Option<PathBuf>,
    includes: BTreeSet<String>,
}

impl FileRecord {
    /// Create a record from already extracted includes.
    pub fn new(name: impl Into<String>, dir: Option<PathBuf>, includes: BTreeSet<String>) -> Self {
        Self {
            name: name.into(),
            dir,
            includes,
        }
    }

    /// A record for a name that was included but never found on disk.
    ///
    /// The name is the literal include target, e.g. `sys/types.h`.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, None, BTreeSet::new())
    }

    /// Build a record from in-memory source text.
    pub fn from_source(name: impl Into<String>, dir: Option<PathBuf>, source: &str) -> Self {
        Self::new(name, dir, scan_includes(source.lines()))
    }

    /// Read `path` and record the files it includes.
    ///
    /// A file that can't be read, or is larger than `max_file_size` bytes,
    /// yields a record with no includes.
    pub fn read(path: &Path, max_file_size: u64) -> Self {
        let includes = scan_includes(source_lines(path, max_file_size));
        debug!("{}: {} includes", path.display(), includes.len());
        Self::new(base_name(path), path.parent().map(Path::to_path_buf), includes)
    }

    /// Base name of the file; the record's identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the file was found in, `None` for bare records.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Full path of the file, `None` for bare records.
    pub fn path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(&self.name))
    }

    /// Literal include targets referenced by the file, sorted.
    pub fn includes(&self) -> &BTreeSet<String> {
        &self.includes
    }

    /// Whether this record stands for an include target not found on disk.
    pub fn is_bare(&self) -> bool {
        self.dir.is_none()
    }
}

impl PartialEq for FileRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FileRecord {}

impl Hash for FileRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must hash exactly like the `str` it borrows as
        self.name.as_str().hash(state);
    }
}

impl PartialOrd for FileRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Borrow<str> for FileRecord {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Base name of `path`, falling back to the whole path when it has none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Lines of the file at `path`.
///
/// Yields nothing when the file can't be opened or read, or is larger than
/// `max_file_size` bytes. Invalid UTF-8 is replaced rather than rejected.
pub fn source_lines(path: &Path, max_file_size: u64) -> Vec<String> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > max_file_size => {
            warn!(
                "Skipping {}: {} bytes exceeds limit of {max_file_size}",
                path.display(),
                meta.len()
            );
            return Vec::new();
        }
        Ok(_) => {}
        Err(e) => {
            debug!("Cannot stat {}: {e}", path.display());
            return Vec::new();
        }
    }

    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect(),
        Err(e) => {
            debug!("Cannot read {}: {e}", path.display());
            Vec::new()
        }
    }
}
