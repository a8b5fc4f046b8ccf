//! Application configuration and constants

use std::path::PathBuf;

use crate::core::GraphError;

// === Embedding Service ===
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "text-embedding-3-small";
pub const EMBED_BATCH_SIZE: usize = 64;

// === Paths ===
pub const DEFAULT_INPUT: &str = "src/data/resume.json";
pub const DEFAULT_OUTPUT: &str = "public/skill-graph.json";

// === Grouping ===
pub const DEFAULT_CLUSTERS: usize = 6;
pub const KMEANS_MAX_ITERATIONS: usize = 50;
pub const CENTROID_SAMPLE_DIMS: usize = 8;

// === Projection ===
pub const POWER_ITERATIONS: usize = 150;
pub const PROJECTION_DIMENSIONS: [&str; 2] = ["pc1", "pc2"];

// === Labels ===
pub const STOPWORDS: &[&str] = &["and", "the", "of", "in", "for"];
/// Badges never exceed the char length of this string
pub const BADGE_REFERENCE: &str = "Orchestration";

/// Which grouping strategy clusters the skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
	/// K-Means neighborhoods in embedding space
	#[default]
	Kmeans,
	/// Nearest taxonomy entry per area, honoring manual stack overrides
	Taxonomy,
}

/// Everything one `build` run needs, resolved once at the entry point
#[derive(Debug, Clone)]
pub struct Config {
	pub api_key: String,
	pub base_url: String,
	pub model: String,
	pub input: PathBuf,
	pub output: PathBuf,
	pub strategy: Strategy,
	pub clusters: usize,
	pub include_hidden: bool,
	pub seed: Option<u64>,
}

impl Config {
	/// Rejects a missing or blank credential before any network call
	pub fn validate(&self) -> Result<(), GraphError> {
		if self.api_key.trim().is_empty() {
			return Err(GraphError::MissingCredential(API_KEY_ENV));
		}
		if self.strategy == Strategy::Kmeans && self.clusters == 0 {
			return Err(GraphError::NoClusters);
		}
		Ok(())
	}

	pub fn badge_budget() -> usize {
		BADGE_REFERENCE.chars().count()
	}
}
