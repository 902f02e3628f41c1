use log::{debug, error, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("carmarket", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("carmarket_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log calls to the listing store
    pub fn api_call(source: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!("API: {} {} {} in {}ms", source, endpoint, status, duration),
            None => debug!("API: Starting {} {}", source, endpoint),
        }
    }

    /// Log cache activity
    pub fn cache_event(key: &str, event: &str, entries: Option<usize>) {
        match entries {
            Some(n) => debug!("Cache: {} {} ({} listings)", key, event, n),
            None => debug!("Cache: {} {}", key, event),
        }
    }

    /// Log search operations
    pub fn search_operation(query: &str, results: Option<usize>) {
        match results {
            Some(r) => info!("Search: '{}' returned {} results", query, r),
            None => debug!("Search: Starting '{}'", query),
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
