use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `QR_DEBUG` set in the environment turns on `[DEBUG]` lines on stderr.
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

/// `eprintln!` with a `[DEBUG]` prefix, compiled out of release builds and
/// silent unless `QR_DEBUG` is set.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) && $crate::debug::debug_enabled() {
            eprintln!("[DEBUG] {}", format_args!($($arg)*));
        }
    };
}

pub(crate) use debug_log;
