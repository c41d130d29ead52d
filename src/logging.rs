use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use chrono::Local;
use colored::*;

use crate::constants::LOG_DIR_NAME;

struct LogState {
    file: Option<PathBuf>,
    verbose: bool,
}

lazy_static::lazy_static! {
    static ref LOG_STATE: Mutex<LogState> = Mutex::new(LogState { file: None, verbose: false });
}

pub fn init_logging() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(LOG_DIR_NAME)
        .join("logs");

    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("sync-{}.log", Local::now().format("%Y%m%d-%H%M%S")));

    if let Ok(mut state) = LOG_STATE.lock() {
        state.file = Some(log_file.clone());
    }

    log_debug(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

pub fn set_verbose(verbose: bool) {
    if let Ok(mut state) = LOG_STATE.lock() {
        state.verbose = verbose;
    }
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_warn(message: &str) {
    log_with_level("WARN", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

pub fn log_panic_info(info: &std::panic::PanicHookInfo) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!("at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    log_error(&message);

    let backtrace = std::backtrace::Backtrace::capture();
    log_debug(&format!("Backtrace:\n{}", backtrace));
}

fn log_with_level(level: &str, message: &str) {
    let (file, verbose) = match LOG_STATE.lock() {
        Ok(state) => (state.file.clone(), state.verbose),
        Err(_) => (None, false),
    };

    if let Some(log_file) = file {
        if let Ok(mut handle) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
        {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(handle, "[{}] {} - {}", timestamp, level, message);
        }
    }

    if level == "DEBUG" && !verbose {
        return;
    }

    let tag = match level {
        "ERROR" => level.red().bold(),
        "WARN" => level.yellow(),
        "DEBUG" => level.dimmed(),
        _ => level.normal(),
    };
    eprintln!("[{}] {}", tag, message);
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_STATE.lock().ok().and_then(|state| state.file.clone())
}
