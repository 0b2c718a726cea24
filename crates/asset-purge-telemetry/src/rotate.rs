//! Size-based rotating file writer for the diagnostic log.
//!
//! # Design
//! - Rotate before a write that would push the live file past the threshold,
//!   so every line lands whole in exactly one file.
//! - Keep at most `max_files` historical files named `<file>.1` (newest) to
//!   `<file>.N` (oldest); the oldest is dropped on rotation.
//! - A single mutex serialises writers; the formatter emits one write per event.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

/// Where the diagnostic log lives and when it rotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Live log file.
    pub path: PathBuf,
    /// Size in bytes that triggers rotation.
    pub max_bytes: u64,
    /// Number of historical files retained.
    pub max_files: usize,
}

/// Path of the `index`-th historical file for `path`.
#[must_use]
pub fn rotated_path(path: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

/// `MakeWriter` handing out locked handles to a shared rotating file.
#[derive(Clone, Debug)]
pub struct RotatingFileWriter {
    inner: Arc<Mutex<RotatingFile>>,
}

impl RotatingFileWriter {
    /// Open (or create) the live log file described by `policy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or the file cannot be created.
    pub fn open(policy: RotationPolicy) -> io::Result<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(RotatingFile::open(policy)?)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, RotatingFile> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = RotatingFileHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingFileHandle { file: self.lock() }
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

/// Exclusive handle to the rotating file for a single event.
pub struct RotatingFileHandle<'a> {
    file: MutexGuard<'a, RotatingFile>,
}

impl Write for RotatingFileHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[derive(Debug)]
struct RotatingFile {
    policy: RotationPolicy,
    file: File,
    size: u64,
}

impl RotatingFile {
    fn open(policy: RotationPolicy) -> io::Result<Self> {
        if let Some(parent) = policy.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&policy.path)?;
        let size = file.metadata()?.len();
        Ok(Self { policy, file, size })
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let path = self.policy.path.clone();

        if self.policy.max_files > 0 {
            let oldest = rotated_path(&path, self.policy.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.policy.max_files).rev() {
                let from = rotated_path(&path, index);
                if from.exists() {
                    fs::rename(&from, rotated_path(&path, index + 1))?;
                }
            }
            fs::rename(&path, rotated_path(&path, 1))?;
        }

        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        self.size = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let incoming = u64::try_from(buf.len()).unwrap_or(u64::MAX);
        if self.size > 0 && self.size.saturating_add(incoming) > self.policy.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.size = self.size.saturating_add(incoming);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
