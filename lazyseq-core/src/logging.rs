// Conditional logging shim: uses `tracing` when enabled, falls back to eprintln!
// for warnings and drops debug output otherwise.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __lazyseq_warn {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
    }};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __lazyseq_debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(not(feature = "tracing"))]
pub use crate::__lazyseq_debug as debug;
#[cfg(not(feature = "tracing"))]
pub use crate::__lazyseq_warn as warn;
