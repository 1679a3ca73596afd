//! Convenient macros for application messaging and logging.
//!
//! Every macro routes its output depending on the debug mode:
//!
//! ```text
//! msg_info!(Message::X) ──▶ TASKR_DEBUG or RUST_LOG set? ──▶ tracing::info!
//!                                                     └──▶ println!
//! ```
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`** / **`msg_info!`** / **`msg_warning!`**: prefixed notices
//! - **`msg_error!`**: error on stderr
//! - **`msg_bail_anyhow!`**: return early with an `anyhow::Error`
//!
//! ```rust,ignore
//! use taskr::libs::messages::Message;
//! use taskr::{msg_error, msg_success};
//!
//! msg_success!(Message::TaskCreated);
//! msg_error!(Message::LoginFailed);
//! msg_print!(Message::MainMenuHeader, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages should go through `tracing` instead of plain stdout.
///
/// Checked once per process: either `TASKR_DEBUG` or `RUST_LOG` enables it.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKR_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $fmt:literal, $msg:expr) => {{
        let text = format!($fmt, $msg);
        if $crate::libs::messages::macros::is_debug_mode() {
            ::tracing::$level!("{}", text);
        } else {
            $print!("{}", text);
        }
    }};
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n✅ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "\n❌ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(warn, println, "\n⚠️ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\nℹ️ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        ::anyhow::bail!("❌ {}", $msg)
    };
}
