use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use once_cell::sync::Lazy;
use chrono::Local;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Default log directory: `~/.pickbox/logs`
pub fn default_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pickbox")
        .join("logs")
}

/// Initialize logging to a timestamped file inside `log_dir`
pub fn init(log_dir: &Path) -> std::io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    std::fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join(format!("pickbox_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }

    log("=== pickbox started ===");

    Ok(log_path)
}

/// Log a message with timestamp. Dropped silently before `init`.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Log an input event or state transition
pub fn log_event(event: &str) {
    log(&format!("[EVENT] {}", event));
}

/// Log a selection change reported to the owner
pub fn log_change(value: &str) {
    log(&format!("[CHANGE] {}", value));
}

/// Record panics in the log file before the default hook runs.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log(&format!("[PANIC] {}", info));
        previous(info);
    }));
}
