// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Message macros and the global verbosity flag.

use std::sync::atomic::{AtomicBool, Ordering};

// Re-exported so macro expansions resolve without a downstream
// dependency on `colored`.
#[doc(hidden)]
pub use colored;

/// Global verbosity flag.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Macro for verbose messages, printed only when verbosity is enabled.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            println!("{}", format!($($arg)*));
        }
    }
}

/// Macro for warning messages.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use $crate::logging::colored::Colorize;
        eprintln!("{} {}", "WARNING ⚠️".yellow().bold(), format!($($arg)*));
    }}
}
