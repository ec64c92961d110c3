//! # Restaurant Registry
//!
//! The registry binds at most one usable [`RecordFile`] and exposes the three
//! operations the rest of the crate needs: load a file, read every record,
//! save one record.
//!
//! It is an explicit context object. `main` creates it once, hands it by
//! reference to the interpreter, and drops it at exit. Nothing in the crate
//! reaches for a global binding.
//!
//! ## Failure Model
//!
//! Nothing here returns an error to the caller:
//! - An unusable path yields an unbound registry plus one warning message.
//! - An unbound registry reads as empty and refuses every save.
//! - Malformed lines are skipped (and logged) so one bad line never hides the
//!   rest of the file.

use crate::commands::CmdMessage;
use crate::model::Restaurant;
use crate::store::fs::FsLines;
use crate::store::{describe_path, LineBackend, RecordFile};
use crate::text::TextExt;
use std::path::Path;

pub struct Registry<B: LineBackend = FsLines> {
    file: Option<RecordFile<B>>,
}

impl Registry<FsLines> {
    /// Binds the file at `path`, creating it when missing.
    ///
    /// Returns the registry and, when the file is not usable, the diagnostic
    /// to show the user. A usable file produces no message.
    pub fn load(path: Option<&Path>) -> (Self, Option<CmdMessage>) {
        let file = RecordFile::load(path);
        if file.is_usable() {
            log::debug!("Bound restaurant file {}", describe_path(path));
            (Self::bind(file), None)
        } else {
            let message = CmdMessage::warning(format!(
                "Restaurant file not usable: {}",
                describe_path(path)
            ));
            (Self::unbound(), Some(message))
        }
    }
}

impl<B: LineBackend> Registry<B> {
    pub fn unbound() -> Self {
        Self { file: None }
    }

    /// Binds `file` if it is usable; an unusable file leaves the registry unbound.
    pub fn bind(file: RecordFile<B>) -> Self {
        Self {
            file: file.is_usable().then_some(file),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.file.is_some()
    }

    pub fn file(&self) -> Option<&RecordFile<B>> {
        self.file.as_ref()
    }

    /// Every stored record in file order.
    pub fn all(&self) -> Vec<Restaurant> {
        let Some(file) = &self.file else {
            return Vec::new();
        };

        file.read_all()
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_blank())
            .filter_map(|(i, line)| match Restaurant::from_line(line, i + 1) {
                Ok(r) => Some(r),
                Err(e) => {
                    log::warn!("Skipping restaurant record: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Appends `record` to the bound file. False when unbound, when the record
    /// is invalid, or when the write fails.
    pub fn save(&mut self, record: &Restaurant) -> bool {
        let Some(file) = self.file.as_mut() else {
            log::debug!("Not saving {:?}: no restaurant file bound", record.name);
            return false;
        };
        if !record.is_valid() {
            log::debug!("Not saving invalid record {:?}", record);
            return false;
        }
        match file.append(record) {
            Ok(()) => {
                log::debug!("Saved restaurant {:?}", record.name);
                true
            }
            Err(e) => {
                log::warn!("Could not save restaurant {:?}: {}", record.name, e);
                false
            }
        }
    }
}
