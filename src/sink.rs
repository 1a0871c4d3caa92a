//! Output destinations shared by channels.

use crate::error::LogError;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

/// A cloneable handle to where log lines go.
///
/// Clones share the underlying destination, so every channel bound to the
/// general log writes through the same file handle.
#[derive(Debug, Clone)]
pub enum Sink {
    Stdout,
    File(Arc<File>),
    Memory(Arc<Mutex<Vec<u8>>>),
}

impl Sink {
    /// An empty in-memory buffer
    pub fn memory() -> Self {
        Sink::Memory(Arc::new(Mutex::new(Vec::new())))
    }

    /// Open `path` for appending, creating it owner-readable only if missing.
    pub fn open_append(path: &Path) -> Result<Self, LogError> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        options
            .open(path)
            .map(|file| Sink::File(Arc::new(file)))
            .map_err(|source| LogError::Open {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn is_console(&self) -> bool {
        matches!(self, Sink::Stdout)
    }

    /// Captured text of a memory sink
    pub fn contents(&self) -> Option<String> {
        match self {
            Sink::Memory(buf) => {
                let buf = buf.lock().unwrap_or_else(PoisonError::into_inner);
                Some(String::from_utf8_lossy(&buf).into_owned())
            }
            _ => None,
        }
    }

    /// Write one complete line in a single call. Failures are dropped.
    pub fn write_line(&self, line: &str) {
        let _ = self.clone().write_all(line.as_bytes());
    }
}

impl Write for Sink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout => io::stdout().lock().write(data),
            Sink::File(file) => (&**file).write(data),
            Sink::Memory(buf) => {
                let mut buf = buf.lock().unwrap_or_else(PoisonError::into_inner);
                buf.extend_from_slice(data);
                Ok(data.len())
            }
        }
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        // Hold the stdout lock across the whole line
        match self {
            Sink::Stdout => io::stdout().lock().write_all(data),
            Sink::File(file) => (&**file).write_all(data),
            Sink::Memory(buf) => {
                let mut buf = buf.lock().unwrap_or_else(PoisonError::into_inner);
                buf.extend_from_slice(data);
                Ok(())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().lock().flush(),
            Sink::File(file) => (&**file).flush(),
            Sink::Memory(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shared_between_clones() {
        let sink = Sink::memory();
        let other = sink.clone();
        sink.write_line("one\n");
        other.write_line("two\n");
        assert_eq!(sink.contents().unwrap(), "one\ntwo\n");
        assert!(Sink::Stdout.contents().is_none());
    }

    #[test]
    fn test_open_append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        Sink::open_append(&path).unwrap().write_line("first\n");
        Sink::open_append(&path).unwrap().write_line("second\n");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_open_append_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history");
        Sink::open_append(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
    }

    #[test]
    fn test_open_append_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/app.log");
        match Sink::open_append(&path) {
            Err(LogError::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected open error, got {:?}", other),
        }
    }
}
