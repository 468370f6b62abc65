use flexi_logger::Logger;

/// Starts stderr logging, level taken from `RUST_LOG` (default `info`).
/// Game output goes to stdout; diagnostics stay on stderr.
pub fn setup_logging() {
    match Logger::try_with_env_or_str("info").and_then(|logger| logger.start()) {
        Ok(handle) => {
            // Keep the handle alive for the lifetime of the process so
            // buffered records are flushed on exit.
            std::mem::forget(handle);
        }
        Err(error) => {
            eprintln!("failed to initialize logging: {error}");
        }
    }
}
