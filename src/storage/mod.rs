//! Input catalog and output artifact files

pub mod artifact;
pub mod catalog;

pub use artifact::{load as load_graph, save as save_graph};
pub use catalog::load as load_catalog;
