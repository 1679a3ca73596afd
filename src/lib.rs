//! # Taskr
//!
//! A command-line task tracker that keeps users, tasks and progress reports
//! in plain text files.
//!
//! ## Features
//!
//! - **Login**: credential file with a limited number of attempts
//! - **Task Management**: create, reassign, reschedule and finalize tasks
//! - **Report Generation**: overall and per-user completion statistics
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskr::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
