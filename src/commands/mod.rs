//! # Command Implementations
//!
//! Each submodule handles one CLI command (build, show, taxonomy).

pub mod build;
pub mod show;
pub mod taxonomy;
