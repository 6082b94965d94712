//! Logging macros for ergonomic call sites.
//!
//! Every macro takes the [`Logger`](crate::Logger) as its first argument.
//! The shortcut forms (`alogd!`, `aloge_if!`, `if_alogi!`, ...) use the
//! logger's ambient tag; `alog!` and `log_pri!` take an explicit tag.
//!
//! Building with the `log-ndebug` feature compiles out the verbose path and
//! the debug-only fatal checks:
//!
//! | macro                    | default            | `log-ndebug`            |
//! |--------------------------|--------------------|-------------------------|
//! | `alogv!`                 | logs               | `if false { .. }`       |
//! | `alogv_if!`              | logs if cond       | nothing                 |
//! | `if_alogv!`              | guarded block      | `if false { .. }`       |
//! | `log_fatal!`, `log_fatal_if!`, `alog_assert!` | abort | nothing          |
//!
//! # Examples
//!
//! ```
//! use rust_liblog_system::prelude::*;
//! use rust_liblog_system::{alogi, aloge_if, if_alogd};
//!
//! let logger = Logger::builder()
//!     .tag("netd")
//!     .backend(MemoryBackend::new(16))
//!     .build();
//!
//! let port = 8080;
//! alogi!(logger, "listening on port {}", port);
//! aloge_if!(logger, port == 0, "no port configured");
//!
//! if_alogd!(logger, {
//!     let table = vec![1, 2, 3];
//!     alogi!(logger, "routing table: {:?}", table);
//! });
//! ```

/// Log with an explicit priority and tag, returning the write status.
///
/// ```
/// # use rust_liblog_system::prelude::*;
/// # let logger = Logger::with_backend(MemoryBackend::new(4));
/// use rust_liblog_system::log_pri;
/// let status = log_pri!(logger, LogPriority::Warn, Some("vold"), "{} blocks free", 12);
/// assert!(status.unwrap() > 0);
/// ```
#[macro_export]
macro_rules! log_pri {
    ($logger:expr, $priority:expr, $tag:expr, $($arg:tt)+) => {
        $logger.print($priority, $tag, format_args!($($arg)+))
    };
}

/// Log an already captured message value
#[macro_export]
macro_rules! log_pri_va {
    ($logger:expr, $priority:expr, $tag:expr, $args:expr $(,)?) => {
        $logger.vprint($priority, $tag, $args)
    };
}

/// Basic log macro; a tag of `None` or `Some("")` selects the global tag.
///
/// ```
/// # use rust_liblog_system::prelude::*;
/// # let logger = Logger::with_backend(MemoryBackend::new(4));
/// use rust_liblog_system::alog;
/// let _ = alog!(logger, LogPriority::Warn, None, "Failed with error {}", 5);
/// ```
#[macro_export]
macro_rules! alog {
    ($logger:expr, $priority:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_pri!($logger, $priority, $tag, $($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __alog_ambient {
    ($logger:expr, $priority:expr, $($arg:tt)+) => {{
        let __logger = &$logger;
        let _ = __logger.print($priority, __logger.tag(), format_args!($($arg)+));
    }};
}

/// Log a verbose message with the ambient tag
#[cfg(not(feature = "log-ndebug"))]
#[macro_export]
macro_rules! alogv {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__alog_ambient!($logger, $crate::LogPriority::Verbose, $($arg)+)
    };
}

/// Log a verbose message with the ambient tag (compiled out)
#[cfg(feature = "log-ndebug")]
#[macro_export]
macro_rules! alogv {
    ($logger:expr, $($arg:tt)+) => {
        if false {
            $crate::__alog_ambient!($logger, $crate::LogPriority::Verbose, $($arg)+)
        }
    };
}

/// Log a debug message with the ambient tag
#[macro_export]
macro_rules! alogd {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__alog_ambient!($logger, $crate::LogPriority::Debug, $($arg)+)
    };
}

/// Log an info message with the ambient tag
#[macro_export]
macro_rules! alogi {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__alog_ambient!($logger, $crate::LogPriority::Info, $($arg)+)
    };
}

/// Log a warning with the ambient tag
#[macro_export]
macro_rules! alogw {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__alog_ambient!($logger, $crate::LogPriority::Warn, $($arg)+)
    };
}

/// Log an error with the ambient tag
#[macro_export]
macro_rules! aloge {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__alog_ambient!($logger, $crate::LogPriority::Error, $($arg)+)
    };
}

/// Log a verbose message when `cond` holds
#[cfg(not(feature = "log-ndebug"))]
#[macro_export]
macro_rules! alogv_if {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::alogv!($logger, $($arg)+);
        }
    };
}

/// Log a verbose message when `cond` holds (compiled out)
#[cfg(feature = "log-ndebug")]
#[macro_export]
macro_rules! alogv_if {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        ()
    };
}

/// Log a debug message when `cond` holds.
///
/// The message arguments are not evaluated when `cond` is false.
#[macro_export]
macro_rules! alogd_if {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::alogd!($logger, $($arg)+);
        }
    };
}

/// Log an info message when `cond` holds
#[macro_export]
macro_rules! alogi_if {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::alogi!($logger, $($arg)+);
        }
    };
}

/// Log a warning when `cond` holds
#[macro_export]
macro_rules! alogw_if {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::alogw!($logger, $($arg)+);
        }
    };
}

/// Log an error when `cond` holds
#[macro_export]
macro_rules! aloge_if {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::aloge!($logger, $($arg)+);
        }
    };
}

/// Run `body` only if `priority` is loggable for `tag`.
///
/// ```
/// # use rust_liblog_system::prelude::*;
/// # let logger = Logger::with_backend(MemoryBackend::new(4));
/// use rust_liblog_system::if_alog;
/// if_alog!(logger, LogPriority::Debug, Some("vold"), {
///     let summary = format!("{:?}", (1..4).collect::<Vec<_>>());
///     let _ = logger.write(LogPriority::Debug, Some("vold"), &summary);
/// });
/// ```
#[macro_export]
macro_rules! if_alog {
    ($logger:expr, $priority:expr, $tag:expr, $body:block) => {
        if $logger.test_log($priority, $tag) $body
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __if_alog_ambient {
    ($logger:expr, $priority:expr, $body:block) => {{
        let __logger = &$logger;
        if __logger.test_log($priority, __logger.tag()) $body
    }};
}

/// Run `body` only if verbose logging is enabled for the ambient tag
#[cfg(not(feature = "log-ndebug"))]
#[macro_export]
macro_rules! if_alogv {
    ($logger:expr, $body:block) => {
        $crate::__if_alog_ambient!($logger, $crate::LogPriority::Verbose, $body)
    };
}

/// Run `body` only if verbose logging is enabled (compiled out)
#[cfg(feature = "log-ndebug")]
#[macro_export]
macro_rules! if_alogv {
    ($logger:expr, $body:block) => {
        if false $body
    };
}

/// Run `body` only if debug logging is enabled for the ambient tag
#[macro_export]
macro_rules! if_alogd {
    ($logger:expr, $body:block) => {
        $crate::__if_alog_ambient!($logger, $crate::LogPriority::Debug, $body)
    };
}

/// Run `body` only if info logging is enabled for the ambient tag
#[macro_export]
macro_rules! if_alogi {
    ($logger:expr, $body:block) => {
        $crate::__if_alog_ambient!($logger, $crate::LogPriority::Info, $body)
    };
}

/// Run `body` only if warnings are enabled for the ambient tag
#[macro_export]
macro_rules! if_alogw {
    ($logger:expr, $body:block) => {
        $crate::__if_alog_ambient!($logger, $crate::LogPriority::Warn, $body)
    };
}

/// Run `body` only if errors are enabled for the ambient tag
#[macro_export]
macro_rules! if_aloge {
    ($logger:expr, $body:block) => {
        $crate::__if_alog_ambient!($logger, $crate::LogPriority::Error, $body)
    };
}

/// Abort with a fatal log message if `cond` holds. Never stripped.
///
/// The message is optional; without one the condition text is logged.
/// Note the condition is inverted from `assert!`.
#[macro_export]
macro_rules! log_always_fatal_if {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        if $cond {
            let __logger = &$logger;
            __logger.assert_fail(
                Some(stringify!($cond)),
                __logger.tag(),
                Some(format_args!($($arg)+)),
            )
        }
    };
    ($logger:expr, $cond:expr $(,)?) => {
        if $cond {
            let __logger = &$logger;
            __logger.assert_fail(Some(stringify!($cond)), __logger.tag(), None)
        }
    };
}

/// Abort with a fatal log message. Never stripped.
#[macro_export]
macro_rules! log_always_fatal {
    ($logger:expr, $($arg:tt)+) => {{
        let __logger = &$logger;
        __logger.assert_fail(None, __logger.tag(), Some(format_args!($($arg)+)))
    }};
    ($logger:expr $(,)?) => {{
        let __logger = &$logger;
        __logger.assert_fail(None, __logger.tag(), None)
    }};
}

/// [`log_always_fatal_if!`] that is compiled out with `log-ndebug`
#[cfg(not(feature = "log-ndebug"))]
#[macro_export]
macro_rules! log_fatal_if {
    ($($arg:tt)+) => {
        $crate::log_always_fatal_if!($($arg)+)
    };
}

#[cfg(feature = "log-ndebug")]
#[macro_export]
macro_rules! log_fatal_if {
    ($($arg:tt)+) => {
        ()
    };
}

/// [`log_always_fatal!`] that is compiled out with `log-ndebug`
#[cfg(not(feature = "log-ndebug"))]
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        $crate::log_always_fatal!($($arg)+)
    };
}

#[cfg(feature = "log-ndebug")]
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        ()
    };
}

/// Abort with a fatal log message when `cond` is false.
///
/// Without a message the logged condition reads `!(<cond>)`.
/// Compiled out with `log-ndebug`.
#[cfg(not(feature = "log-ndebug"))]
#[macro_export]
macro_rules! alog_assert {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        if !($cond) {
            let __logger = &$logger;
            __logger.assert_fail(
                Some(concat!("!(", stringify!($cond), ")")),
                __logger.tag(),
                Some(format_args!($($arg)+)),
            )
        }
    };
    ($logger:expr, $cond:expr $(,)?) => {
        if !($cond) {
            let __logger = &$logger;
            __logger.assert_fail(
                Some(concat!("!(", stringify!($cond), ")")),
                __logger.tag(),
                None,
            )
        }
    };
}

#[cfg(feature = "log-ndebug")]
#[macro_export]
macro_rules! alog_assert {
    ($($arg:tt)+) => {
        ()
    };
}
