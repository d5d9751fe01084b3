use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

/// Whether `vlog!` diagnostics are written to stderr.
static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

pub fn write_log(message: String) {
    eprintln!("{} {message}", "[life]".dimmed());
}

/// Diagnostic output, only shown with `--verbose`.
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            $crate::logging::write_log(format!($($arg)*));
        }
    };
}
