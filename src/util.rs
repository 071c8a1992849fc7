use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::Duration;

static INIT_ONCE: std::sync::Once = std::sync::Once::new();
pub fn init_tracing_once() {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
    });
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))
}

// -------- robust create/replace with backoff (Windows-friendly) --------

/// Return true for transient/retriable I/O errors often seen on Windows when
/// filter drivers (AV/backup), USB/NAS volumes, or sharing violations occur.
/// The codes are Windows ones; elsewhere nothing is retried.
fn is_retriable_io_error(e: &io::Error) -> bool {
    // 5 access denied (AV/share), 32 sharing violation, 33 lock violation,
    // 21 device not ready, 1224 user-mapped section open
    cfg!(windows)
        && matches!(e.raw_os_error(), Some(5) | Some(32) | Some(33) | Some(21) | Some(1224))
}

fn with_backoff<T>(tries: usize, delay_ms: u64, mut op: impl FnMut() -> io::Result<T>) -> io::Result<T> {
    let mut last_err: Option<io::Error> = None;
    for i in 0..tries.max(1) {
        match op() {
            Ok(v) => return Ok(v),
            Err(e) if is_retriable_io_error(&e) => {
                last_err = Some(e);
                sleep(Duration::from_millis(delay_ms.saturating_mul((i + 1) as u64)));
            }
            Err(e) => return Err(e),
        }
    }
    Err(last_err.unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "operation failed after retries")))
}

/// Create (or truncate) a file with retries/backoff for transient errors.
pub fn create_with_backoff(path: &Path, tries: usize, delay_ms: u64) -> io::Result<File> {
    with_backoff(tries, delay_ms, || File::create(path))
}

/// Remove a file with retries/backoff. Succeeds if the file doesn't exist.
pub fn remove_with_backoff(path: &Path, tries: usize, delay_ms: u64) -> Result<()> {
    with_backoff(tries, delay_ms, || match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    })
    .with_context(|| format!("remove {}", path.display()))
}

/// Replace `dest` with `tmp`. If rename fails (e.g., due to sharing), fall back to copy+remove.
pub fn replace_file_atomic_backoff(tmp: &Path, dest: &Path) -> Result<()> {
    let tries = 20usize;
    let delay_ms = 50u64;
    if with_backoff(tries, delay_ms, || fs::rename(tmp, dest)).is_ok() {
        return Ok(());
    }
    with_backoff(tries, delay_ms, || fs::copy(tmp, dest))
        .with_context(|| format!("copy {} -> {}", tmp.display(), dest.display()))?;
    remove_with_backoff(tmp, tries, delay_ms)
}

/// Staging path used while `target` is being written: `<target>.inprogress`.
pub fn staging_path_for(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".inprogress");
    target.with_file_name(name)
}

/// Write `target` through a buffered staging file and promote it only after a clean flush.
/// On any error the staging file is removed and `target` is left untouched.
pub fn write_file_atomic<F>(target: &Path, write_buf: usize, f: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let tmp = staging_path_for(target);
    let res = (|| -> Result<()> {
        let file = create_with_backoff(&tmp, 16, 50)
            .with_context(|| format!("create {}", tmp.display()))?;
        let mut w = BufWriter::with_capacity(write_buf.max(8 * 1024), file);
        f(&mut w)?;
        w.flush().with_context(|| format!("flush {}", tmp.display()))?;
        Ok(())
    })();
    if let Err(e) = res {
        let _ = remove_with_backoff(&tmp, 4, 10);
        return Err(e);
    }
    replace_file_atomic_backoff(&tmp, target)
}
