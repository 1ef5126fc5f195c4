//! Shared test utilities for the scoped configuration workspace.
//!
//! This crate provides logger doubles and an in-memory writer so suites can
//! observe what a configuration's logger received. It is a dev-dependency
//! only — never published.
//!
//! # Modules
//!
//! - [`logger`] — [`RecordingLogger`] and [`PartialLogger`]
//! - [`buffer`] — [`SharedBuffer`], a cloneable `Write` sink

pub mod buffer;
pub mod logger;

pub use buffer::SharedBuffer;
pub use logger::{PartialLogger, RecordingLogger};
