//! Append-only dataset file.

use super::error::RecordError;
use super::record::{read_records, DatasetRecord};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Default dataset file name.
pub const DEFAULT_DATASET_PATH: &str = "mouse_dataset.jsonl";

/// A JSONL dataset on disk. Writers always open it in append mode; existing
/// lines are never truncated or rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetFile {
    path: PathBuf,
}

impl DatasetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open for appending, creating the file if it does not exist.
    ///
    /// If an earlier write was cut off mid-line, the partial line is
    /// terminated first so new records always start on a fresh line.
    pub fn open_append(&self) -> io::Result<BufWriter<File>> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;
        if ends_mid_line(&mut file)? {
            tracing::warn!(path = %self.path.display(), "terminating partial last line");
            file.write_all(b"\n")?;
        }
        Ok(BufWriter::new(file))
    }

    /// Read back every record. A missing file reads as an empty dataset.
    pub fn read_all(&self) -> Result<Vec<DatasetRecord>, RecordError> {
        match File::open(&self.path) {
            Ok(file) => read_records(BufReader::new(file)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }
}

fn ends_mid_line(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl Default for DatasetFile {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}
