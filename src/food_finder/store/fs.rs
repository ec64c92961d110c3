use super::{LineBackend, RecordFile};
use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Line storage over a single file on disk.
pub struct FsLines {
    path: PathBuf,
}

impl FsLines {
    /// Opens `path` for reading and appending, creating the file if it does not
    /// exist yet. Fails when the location cannot be opened (missing parent
    /// directory, a directory at `path`, permissions).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordFile<FsLines> {
    /// Opens the record file at `path`. An absent or empty path, or one that
    /// cannot be opened, gives an unusable file.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
            return RecordFile::unusable(None);
        };
        match FsLines::open(path) {
            Ok(lines) => RecordFile::usable(path, lines),
            Err(e) => {
                log::debug!("Cannot open {}: {}", path.display(), e);
                RecordFile::unusable(Some(path.to_path_buf()))
            }
        }
    }
}

impl LineBackend for FsLines {
    /// Lines that are not valid UTF-8 are skipped so the rest still load.
    fn read_lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path)?;
        let mut lines = Vec::new();
        for (i, raw) in BufReader::new(file).split(b'\n').enumerate() {
            let mut raw = raw?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            match String::from_utf8(raw) {
                Ok(line) => lines.push(line),
                Err(e) => log::warn!(
                    "Skipping line {} of {}: {}",
                    i + 1,
                    self.path.display(),
                    e
                ),
            }
        }
        Ok(lines)
    }

    fn append_line(&mut self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)?;
        // Keep the new record on its own line even if the file lacks a final newline.
        if needs_leading_newline(&mut file)? {
            file.write_all(b"\n")?;
        }
        writeln!(file, "{}", line)?;
        file.flush()?;
        Ok(())
    }
}

/// Checks the last byte only. Append mode writes at the end regardless of
/// where the cursor was left.
fn needs_leading_newline(file: &mut File) -> Result<bool> {
    if file.seek(SeekFrom::End(0))? == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
