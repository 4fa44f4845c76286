//! File logging.
//!
//! The TUI owns stdout, so `tracing` output goes to `{data_dir}/konyhanyelv.log`.
//! The file is trimmed on startup once it grows past [`MAX_LOG_SIZE`].

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rotate once the log is larger than this (4 MB).
pub const MAX_LOG_SIZE: u64 = 4 * 1024 * 1024;
/// Bytes of the newest entries kept after rotation (512 KB).
pub const KEEP_SIZE: u64 = 512 * 1024;

const ROTATION_MARKER: &[u8] = b"--- log rotated ---\n";

/// Trim `log_path` to its last [`KEEP_SIZE`] bytes if it exceeds [`MAX_LOG_SIZE`].
///
/// The cut is moved forward to the next newline so no partial line survives.
pub fn rotate_log_if_needed(log_path: &Path) -> io::Result<bool> {
    rotate_with_limits(log_path, MAX_LOG_SIZE, KEEP_SIZE)
}

fn rotate_with_limits(log_path: &Path, max: u64, keep: u64) -> io::Result<bool> {
    if !log_path.exists() {
        return Ok(false);
    }

    let size = fs::metadata(log_path)?.len();
    if size <= max {
        return Ok(false);
    }

    let mut file = File::open(log_path)?;
    file.seek(SeekFrom::Start(size.saturating_sub(keep)))?;
    let mut tail = Vec::new();
    file.read_to_end(&mut tail)?;
    drop(file);

    let skip = tail
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&tail[skip..])?;
    Ok(true)
}

#[derive(Clone)]
struct SharedFile {
    file: Arc<Mutex<File>>,
}

struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn with_file<T>(&self, f: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        f(&mut guard)
    }
}

impl Write for SharedFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(|file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = SharedFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileWriter {
            file: self.file.clone(),
        }
    }
}

/// Install the global subscriber writing to `{data_dir}/konyhanyelv.log`.
///
/// `RUST_LOG` wins over `filter` when set.
pub fn init_logging(data_dir: &Path, filter: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join("konyhanyelv.log");

    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let writer = SharedFile {
        file: Arc::new(Mutex::new(file)),
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_log_is_not_rotated() {
        let dir = TempDir::new().unwrap();
        assert!(!rotate_log_if_needed(&dir.path().join("none.log")).unwrap());
    }

    #[test]
    fn test_small_log_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("small.log");
        fs::write(&path, "line one\nline two\n").unwrap();
        assert!(!rotate_with_limits(&path, 1024, 10).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_rotation_keeps_whole_tail_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.log");
        let content: String = (0..100).map(|i| format!("entry {:03}\n", i)).collect();
        fs::write(&path, &content).unwrap();

        assert!(rotate_with_limits(&path, 100, 35).unwrap());

        let rotated = fs::read_to_string(&path).unwrap();
        assert!(rotated.starts_with("--- log rotated ---\n"));
        assert!(rotated.ends_with("entry 099\n"));
        for line in rotated.lines().skip(1) {
            assert!(line.starts_with("entry "), "partial line: {:?}", line);
        }
    }
}
