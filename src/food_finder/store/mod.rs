//! # Storage Layer
//!
//! Restaurants persist as a flat text file, one record per line. This module
//! splits that into two pieces:
//!
//! - [`LineBackend`]: the raw transport. It only knows how to read every line
//!   and append one line. It knows nothing about restaurants.
//! - [`RecordFile`]: a possibly-unusable binding to one backend. It turns
//!   records into lines on the way in and hands raw lines back on the way out.
//!
//! ## Implementations
//!
//! - [`fs::FsLines`]: production backend over a real file, opened for
//!   read + append. Every append is flushed before returning.
//! - [`memory::MemLines`]: in-memory backend for tests, with write failure
//!   simulation.
//!
//! ## File Format
//!
//! ```text
//! Cafe Masala<TAB>indian<TAB>25
//! Pita Pocket<TAB>mediterranean<TAB>5
//! ```
//!
//! No header, no trailing metadata. Reads always re-read the whole file, so a
//! freshly appended record shows up on the next `read_all` without any cache.

use crate::error::{FinderError, Result};
use crate::model::Restaurant;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Raw line transport behind a [`RecordFile`].
pub trait LineBackend {
    /// All lines in storage order, without line terminators.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Writes `line` as a new trailing line.
    fn append_line(&mut self, line: &str) -> Result<()>;
}

/// The record file bound to a registry. May be unusable, in which case it
/// reads as empty and refuses appends.
pub struct RecordFile<B: LineBackend> {
    path: Option<PathBuf>,
    backend: Option<B>,
}

impl<B: LineBackend> RecordFile<B> {
    pub fn usable(path: impl Into<PathBuf>, backend: B) -> Self {
        Self {
            path: Some(path.into()),
            backend: Some(backend),
        }
    }

    pub fn unusable(path: Option<PathBuf>) -> Self {
        Self {
            path,
            backend: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_usable(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Current lines in file order. Empty when unusable or unreadable.
    pub fn read_all(&self) -> Vec<String> {
        let Some(backend) = &self.backend else {
            return Vec::new();
        };
        match backend.read_lines() {
            Ok(lines) => lines,
            Err(e) => {
                log::warn!("Could not read restaurant file: {}", e);
                Vec::new()
            }
        }
    }

    pub fn append(&mut self, record: &Restaurant) -> Result<()> {
        let backend = self
            .backend
            .as_mut()
            .ok_or_else(|| FinderError::Unusable(describe_path(self.path.as_deref())))?;
        backend.append_line(&record.to_line())
    }
}

pub(crate) fn describe_path(path: Option<&Path>) -> String {
    match path {
        Some(p) if !p.as_os_str().is_empty() => p.display().to_string(),
        _ => "no path given".to_string(),
    }
}
