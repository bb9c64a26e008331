//! Feature-gated developer logging, directly modeled on the teacher's
//! `compiler_dev_logging.rs`: each macro forwards to `saying::say!` when its
//! feature is on and expands to nothing otherwise, so a release build pays
//! zero cost for any of these call sites.

// Binder event logging (event creation, firing, blocked/ready transitions).
#[macro_export]
#[cfg(feature = "show_events")]
macro_rules! event_log {
    ($($arg:tt)*) => {
        saying::say!($($arg)*);
    };
}

#[macro_export]
#[cfg(not(feature = "show_events"))]
macro_rules! event_log {
    ($($arg:tt)*) => {
        // Nothing
    };
}

// Binder scheduler logging (Binding pop/retry/park).
#[macro_export]
#[cfg(feature = "show_bindings")]
macro_rules! binding_log {
    ($($arg:tt)*) => {
        saying::say!($($arg)*);
    };
}

#[macro_export]
#[cfg(not(feature = "show_bindings"))]
macro_rules! binding_log {
    ($($arg:tt)*) => {
        // Nothing
    };
}

// Transformer engine logging (relation code generation).
#[macro_export]
#[cfg(feature = "show_transformers")]
macro_rules! transformer_log {
    ($($arg:tt)*) => {
        saying::say!($($arg)*);
    };
}

#[macro_export]
#[cfg(not(feature = "show_transformers"))]
macro_rules! transformer_log {
    ($($arg:tt)*) => {
        // Nothing
    };
}

// HIR construction/dump logging.
#[macro_export]
#[cfg(feature = "show_hir")]
macro_rules! hir_log {
    ($($arg:tt)*) => {
        saying::say!($($arg)*);
    };
}

#[macro_export]
#[cfg(not(feature = "show_hir"))]
macro_rules! hir_log {
    ($($arg:tt)*) => {
        // Nothing
    };
}

// Extra timer logging around each binder pass.
#[macro_export]
#[cfg(feature = "detailed_timers")]
macro_rules! timer_log {
    ($time:expr, $msg:expr) => {
        saying::say!($msg, Green #$time.elapsed());
    };
}

#[macro_export]
#[cfg(not(feature = "detailed_timers"))]
macro_rules! timer_log {
    ($time:expr, $msg:expr) => {
        // Nothing
    };
}
