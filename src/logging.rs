//! Logging initialization

use std::path::PathBuf;

/// Initialize logging based on debug flag.
/// Returns the log file path if debug logging is enabled.
///
/// Logs go to a file rather than stderr so the TUI owns the terminal.
pub fn init_logging(debug: bool) -> Option<PathBuf> {
    if !debug {
        // Silent by default
        return None;
    }

    let log_path = tempfile::Builder::new()
        .prefix("fluxdash-")
        .suffix(".log")
        .tempfile()
        .map(|f| {
            let path = f.path().to_path_buf();
            // Keep the file alive for the process lifetime; the OS temp
            // cleaner reclaims it later
            std::mem::forget(f);
            path
        })
        .unwrap_or_else(|_| {
            std::env::temp_dir().join(format!("fluxdash-{}.log", std::process::id()))
        });

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(_) => return None,
    };

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(log_path)
}
