//! Output macros for user-facing messages.
//!
//! The macros hide the difference between the two output modes of the
//! application:
//!
//! - **Normal mode**: plain `println!`/`eprintln!` with an emoji prefix, so the
//!   interactive menu reads like a regular terminal program.
//! - **Debug mode**: the same text goes through `tracing`, interleaved with the
//!   storage and menu debug events.
//!
//! Debug mode is enabled when either `TASKLIST_DEBUG` or `RUST_LOG` is set.
//! The check is cached on first use.
//!
//! ## Macros
//!
//! - **`msg_print!`**: plain text, no prefix
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_error!`**: ❌ prefix, written to stderr in normal mode
//! - **`msg_warning!`**: ⚠️ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_debug!`**: 🔍 prefix, silent outside debug mode
//!
//! Every macro accepts an optional `true` second argument that surrounds the
//! message with blank lines.
//!
//! ```rust
//! use tasklist::{msg_error, msg_success};
//! use tasklist::libs::messages::Message;
//!
//! msg_success!(Message::TaskAdded("Buy milk".to_string()), true);
//! msg_error!(Message::TaskNotFoundWithId(3), true);
//! ```

use std::sync::OnceLock;

/// Cached result of the debug mode detection.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `TASKLIST_DEBUG` or `RUST_LOG` is present in the environment.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKLIST_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
    ($fmt:literal, $($arg:tt)+) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", format_args!($fmt, $($arg)+));
        }
    };
}
