//! File logging bootstrap for catalog tooling.
//!
//! # Responsibility
//! - Initialize rolling file logs exactly once per process.
//! - Keep diagnostic events metadata-only (no photo contents or paths
//!   beyond what callers log themselves).
//!
//! # Invariants
//! - Initialization is idempotent for the same level/directory pair.
//! - Re-initialization with a different configuration is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "robopix";
const ROTATE_AT_BYTES: u64 = 8 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 4;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();

struct ActiveLogging {
    level: LevelFilter,
    directory: PathBuf,
    _handle: LoggerHandle,
}

/// Initializes file logging at `level` into `log_dir`.
///
/// The first successful call wires the process-wide logger; later calls
/// with the same configuration return `Ok(())`, calls with a different
/// one are rejected.
///
/// # Errors
/// - Returns an error when `level` is not one of
///   trace|debug|info|warn|error.
/// - Returns an error when `log_dir` is empty, relative, or cannot be
///   created.
/// - Returns an error when the logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let directory = resolve_directory(log_dir)?;

    let active = ACTIVE.get_or_try_init(|| activate(level, directory.clone()))?;
    if active.level == level && active.directory == directory {
        return Ok(());
    }
    Err(format!(
        "logging already active at level `{}` in `{}`; refusing to switch to `{}` in `{}`",
        level_name(active.level),
        active.directory.display(),
        level_name(level),
        directory.display()
    ))
}

/// Returns `(level, log_dir)` when logging is active, `None` otherwise.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (level_name(active.level), active.directory.clone()))
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn activate(level: LevelFilter, directory: PathBuf) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&directory).map_err(|err| {
        format!(
            "cannot create log directory `{}`: {err}",
            directory.display()
        )
    })?;

    let handle = Logger::try_with_str(level_name(level))
        .map_err(|err| format!("logger rejected level `{}`: {err}", level_name(level)))?
        .log_to_file(
            FileSpec::default()
                .directory(directory.as_path())
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .append()
        .write_mode(WriteMode::Direct)
        .format_for_files(flexi_logger::opt_format)
        .start()
        .map_err(|err| format!("logger failed to start: {err}"))?;

    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        level_name(level),
        directory.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogging {
        level,
        directory,
        _handle: handle,
    })
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}

fn resolve_directory(log_dir: &str) -> Result<PathBuf, String> {
    let raw = log_dir.trim();
    if raw.is_empty() {
        return Err("log directory must not be empty".to_string());
    }
    let path = Path::new(raw);
    if path.is_relative() {
        return Err(format!("log directory must be absolute, got `{raw}`"));
    }
    Ok(path.to_path_buf())
}
