//! # User Interface
//!
//! Colored pipeline logging behind a global verbose switch.

pub mod log;

pub use log::{debug, error, header, info, path_link, success, warn, Log};
