//! Domain errors for the skill graph pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
	#[error("Missing {0} environment variable (or --api-key)")]
	MissingCredential(&'static str),

	#[error("No skills found to cluster")]
	EmptySkillSet,

	#[error("Embedding request failed ({status}): {body}")]
	EmbeddingService { status: u16, body: String },

	#[error("Embedding service returned {returned} vectors for {expected} inputs")]
	EmbeddingCount { expected: usize, returned: usize },

	#[error("Embedding dimension mismatch: expected {expected}, got {found}")]
	DimensionMismatch { expected: usize, found: usize },

	#[error("Cluster count {requested} cannot exceed number of vectors ({available})")]
	TooManyClusters { requested: usize, available: usize },

	#[error("Cluster count must be at least 1")]
	NoClusters,
}
