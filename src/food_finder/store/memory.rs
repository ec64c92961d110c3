use super::LineBackend;
use crate::error::{FinderError, Result};
use std::cell::RefCell;

/// In-memory line storage for testing. Does NOT persist data.
///
/// Uses `RefCell` for the failure switches so tests can flip them through a
/// shared reference after the backend has been handed to a registry.
#[derive(Default)]
pub struct MemLines {
    lines: Vec<String>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl MemLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl LineBackend for MemLines {
    fn read_lines(&self) -> Result<Vec<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(FinderError::Io(std::io::Error::other("Simulated read error")));
        }
        Ok(self.lines.clone())
    }

    fn append_line(&mut self, line: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(FinderError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        self.lines.push(line.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::registry::Registry;
    use crate::store::RecordFile;

    /// Six restaurants in deliberately unsorted file order. Two share the
    /// price 10, with "Taste of Little Italy" stored before "Hot Tamale".
    pub const RESTAURANT_LINES: [&str; 6] = [
        "Moonstruck Diner\tamerican\t30",
        "Taste of Little Italy\titalian\t10",
        "Cafe Masala\tindian\t25",
        "Pita Pocket\tmediterranean\t5",
        "Hot Tamale\tmexican\t10",
        "Quick Cup\tcoffee\t8",
    ];

    pub fn restaurant_lines() -> MemLines {
        MemLines::with_lines(RESTAURANT_LINES)
    }

    pub fn registry() -> Registry<MemLines> {
        Registry::bind(RecordFile::usable("memory", restaurant_lines()))
    }

    pub fn empty_registry() -> Registry<MemLines> {
        Registry::bind(RecordFile::usable("memory", MemLines::new()))
    }
}
