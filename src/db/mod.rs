//! Persistence layer for the taskr application.
//!
//! All data lives in plain text files inside the documents directory, one
//! `;`-delimited record per line. Fields containing the delimiter, a quote or
//! a line break are wrapped in double quotes with embedded quotes doubled, so
//! free text round-trips while ordinary records stay readable and editable by
//! hand.
//!
//! ## Stores
//!
//! - **Users** (`user.txt`): `username;password`, appended on registration
//! - **Tasks** (`tasks.txt`): `owner;heading;description;start_date;due_date;status`,
//!   rewritten in full on every save
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskr::db::{tasks::Tasks, users::Users};
//!
//! let users = Users::open("documents/user.txt")?;
//! let store = Tasks::new("documents/tasks.txt");
//! let mut tasks = store.load()?;
//! tasks[0].finalize();
//! store.save(&tasks)?;
//! # Ok::<(), taskr::libs::error::TaskError>(())
//! ```

pub mod store;
pub mod tasks;
pub mod users;
