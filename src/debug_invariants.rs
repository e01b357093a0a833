//! Invariant checks compiled into debug builds.
//!
//! Enabled under `debug_assertions` or the `check-invariants` feature. The
//! sorters use them to verify a computed order before applying it.

/// Run a fallible check and panic on error when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
