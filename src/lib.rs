//! # Daytask - daily task manager client
//!
//! A command-line client for a task server that keeps one ordered task list
//! per calendar day.
//!
//! ## Features
//!
//! - **Day Lists**: Browse, create, edit, complete and delete tasks of a day
//! - **Reordering**: Move tasks within a day with immediate local feedback
//!   and concurrent persistence
//! - **Next Focus**: Completing a task points at the next open one
//! - **Statistics**: Completion rates per day, week or month
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daytask::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
