//! Core library modules for the taskr application.
//!
//! - **Record model**: [`task`], [`credential`]
//! - **Statistics**: [`stats`] computes overviews, [`report`] renders and stores them
//! - **Session**: [`session`] handles the login countdown
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`], [`messages`], [`view`]
//!
//! ```rust,no_run
//! use chrono::Local;
//! use taskr::db::{tasks::Tasks, users::Users};
//! use taskr::libs::task::{create_task, parse_date};
//!
//! let users = Users::open("documents/user.txt")?;
//! let store = Tasks::new("documents/tasks.txt");
//! let mut tasks = store.load()?;
//! let due = parse_date("2025-06-30")?;
//! create_task(&mut tasks, &users, "admin", "Quarterly report", "Collect figures", due, Local::now().date_naive())?;
//! store.save(&tasks)?;
//! # Ok::<(), taskr::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod credential;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod report;
pub mod session;
pub mod stats;
pub mod task;
pub mod view;
