//! Persistent logging for the launcher.
//!
//! Every `log` record (from this crate and from `launcher-core`) goes to the
//! console through `env_logger` and is appended to a daily file in the app
//! log directory. Files rotate at 5MB and only the newest few are kept. The
//! launcher page writes into the same file through `write_log`.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tauri::{command, AppHandle, Manager};

use parking_lot::Mutex;

/// Maximum log file size before rotation (5MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// Maximum number of log files to keep
const MAX_LOG_FILES: usize = 5;

const LOG_PREFIX: &str = "suiteview";

lazy_static::lazy_static! {
    /// Global log file handle
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
    /// Log directory path
    static ref LOG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Forwards records to `env_logger` and mirrors them into the log file.
struct FileLogger {
    console: env_logger::Logger,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.console.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.console.log(record);
        append_line(record.level(), record.target(), &record.args().to_string());
    }

    fn flush(&self) {
        self.console.flush();
        if let Some(file) = LOG_FILE.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

/// Install the global logger. `RUST_LOG` controls the filter (default `info`).
pub fn install_logger() {
    let console = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .build();
    let max_level = console.filter();

    if log::set_boxed_logger(Box::new(FileLogger { console })).is_ok() {
        log::set_max_level(max_level);
    }
}

/// Open today's log file in the app log directory.
pub fn init_logging(app: &AppHandle) -> Result<(), String> {
    let log_dir = app
        .path()
        .app_log_dir()
        .map_err(|e| format!("Failed to get log directory: {}", e))?;

    fs::create_dir_all(&log_dir).map_err(|e| format!("Failed to create log directory: {}", e))?;

    *LOG_DIR.lock() = Some(log_dir.clone());

    let file = open_log_file(&current_log_path(&log_dir))
        .map_err(|e| format!("Failed to open log file: {}", e))?;
    *LOG_FILE.lock() = Some(file);

    log::info!("[LOGGING] Log directory: {}", log_dir.display());

    cleanup_old_logs(&log_dir);

    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Get the path for the current log file (one per day)
fn current_log_path(log_dir: &Path) -> PathBuf {
    let date = Local::now().format("%Y-%m-%d");
    log_dir.join(format!("{}_{}.log", LOG_PREFIX, date))
}

/// Clean up old log files, keeping only the most recent MAX_LOG_FILES
fn cleanup_old_logs(log_dir: &Path) {
    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };

    let mut log_files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let path = e.path();
            path.extension().map(|ext| ext == "log").unwrap_or(false)
                && path
                    .file_name()
                    .map(|n| n.to_string_lossy().starts_with(LOG_PREFIX))
                    .unwrap_or(false)
        })
        .collect();

    // Newest first
    log_files.sort_by(|a, b| {
        let a_time = a.metadata().and_then(|m| m.modified()).ok();
        let b_time = b.metadata().and_then(|m| m.modified()).ok();
        b_time.cmp(&a_time)
    });

    for file in log_files.into_iter().skip(MAX_LOG_FILES) {
        let _ = fs::remove_file(file.path());
    }
}

/// Rotate the current file once it grows past MAX_LOG_SIZE.
fn check_rotation() {
    let Some(log_dir) = LOG_DIR.lock().clone() else {
        return;
    };

    let current_path = current_log_path(&log_dir);
    let too_big = fs::metadata(&current_path)
        .map(|m| m.len() > MAX_LOG_SIZE)
        .unwrap_or(false);
    if !too_big {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
    let rotated_path = log_dir.join(format!("{}_{}.log", LOG_PREFIX, timestamp));
    let _ = fs::rename(&current_path, &rotated_path);

    if let Ok(file) = open_log_file(&current_path) {
        *LOG_FILE.lock() = Some(file);
    }

    cleanup_old_logs(&log_dir);
}

fn append_line(level: log::Level, source: &str, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let line = format!("[{}] [{}] [{}] {}\n", timestamp, level, source, message);

    {
        let mut log_file = LOG_FILE.lock();
        match log_file.as_mut() {
            Some(file) => {
                let _ = file.write_all(line.as_bytes());
            },
            None => return,
        }
    }

    check_rotation();
}

fn parse_level(level: &str) -> log::Level {
    match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" | "warning" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    }
}

// ============================================================================
// Tauri Commands
// ============================================================================

/// Write a log message from the launcher page
#[command]
pub fn write_log(level: String, source: String, message: String) {
    log::log!(target: source.as_str(), parse_level(&level), "{}", message);
}
