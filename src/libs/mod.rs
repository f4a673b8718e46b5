//! Core library modules for daytask.
//!
//! ## Layout
//!
//! - **Domain**: [`task`], [`statistics`], [`calendar`]
//! - **Algorithms**: [`reorder`], [`focus`]
//! - **Application**: [`usecases`], [`board`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Presentation**: [`view`], [`formatter`]

pub mod board;
pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod focus;
pub mod formatter;
pub mod messages;
pub mod reorder;
pub mod statistics;
pub mod task;
pub mod usecases;
pub mod view;
