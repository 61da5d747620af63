use log::{debug, info, LevelFilter};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Set up `env_logger` once per process. `RUST_LOG` still wins when set;
/// `verbose` only raises the crate's own default to debug.
pub fn init_logger(verbose: bool) {
    INIT.call_once(|| {
        let own_level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        env_logger::Builder::new()
            .filter_level(LevelFilter::Warn)
            .filter_module("bookscout", own_level)
            .filter_module("bookscout_lib", own_level)
            .parse_env("RUST_LOG")
            .format_timestamp_millis()
            .format_target(false)
            .init();

        debug!("Logger ready (verbose: {})", verbose);
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

/// One-line log records for the events every service emits
pub struct LogContext;

impl LogContext {
    /// Outgoing request, before the response is known
    pub fn request_sent(service: &str, method: &str, endpoint: &str) {
        debug!("{}: {} {}", service, method, endpoint);
    }

    /// Response status and round-trip time
    pub fn response_received(service: &str, endpoint: &str, status: u16, elapsed_ms: u64) {
        info!("{}: {} -> {} in {}ms", service, endpoint, status, elapsed_ms);
    }

    /// Catalog page requested by the search view; `results` is set once it resolved
    pub fn search_page(query: &str, page: u32, results: Option<usize>) {
        match results {
            Some(count) => info!("Search: '{}' page {} -> {} books", query, page, count),
            None => debug!("Search: requesting '{}' page {}", query, page),
        }
    }
}

/// Logs how long a unit of work took when finished
pub struct TimedOperation {
    started: Instant,
    label: &'static str,
}

impl TimedOperation {
    pub fn new(label: &'static str) -> Self {
        Self {
            started: Instant::now(),
            label,
        }
    }

    /// Log the elapsed time with a short outcome note; returns milliseconds
    pub fn finish_with_info(self, outcome: &str) -> u64 {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        debug!("{} took {}ms ({})", self.label, elapsed_ms, outcome);
        elapsed_ms
    }
}
