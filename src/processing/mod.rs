//! Skill graph pipeline stages

pub mod assemble;
pub mod badge;
pub mod grouping;
pub mod kmeans;
pub mod label;
pub mod normalize;
pub mod projection;
pub mod taxonomy;

use anyhow::{Context, Result};
use rand::RngCore;

use crate::core::{common_dimension, GraphError, SkillGraph};
use crate::embedder::Embedder;
use crate::ui;

pub use assemble::assemble;
pub use grouping::{ByTaxonomy, GroupingStrategy, VectorSpace};
pub use normalize::{normalize, Normalized};
pub use projection::project_2d;

/// Runs embed → group + project → assemble over already normalized records.
///
/// Nothing is written here; the caller persists the graph once this returns.
pub fn build_graph(
	normalized: &Normalized,
	embedder: &dyn Embedder,
	strategy: &dyn GroupingStrategy,
	rng: &mut dyn RngCore,
) -> Result<SkillGraph> {
	ui::info(&format!(
		"Embedding {} skills with {}",
		normalized.skills.len(),
		embedder.model()
	));

	let texts: Vec<String> = normalized.skills.iter().map(|s| s.text.clone()).collect();
	let embeddings = embedder.embed(&texts).context("Failed to embed skills")?;
	if embeddings.len() != texts.len() {
		return Err(GraphError::EmbeddingCount {
			expected: texts.len(),
			returned: embeddings.len(),
		}
		.into());
	}
	let dims = common_dimension(&embeddings)?;
	ui::debug(&format!("Embedding dimension: {}D", dims));

	ui::info(&format!("Grouping skills ({})", strategy.name()));
	let grouping = strategy
		.classify(&normalized.areas, &normalized.skills, &embeddings, rng)
		.context("Grouping failed")?;

	ui::info("Projecting to 2D");
	let coords = project_2d(&embeddings, rng);

	Ok(assemble(
		embedder.model(),
		&normalized.skills,
		&embeddings,
		&grouping,
		&coords,
	))
}
