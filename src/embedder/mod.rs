//! # Embedding Client
//!
//! Turns text into vectors through an external embedding service.

pub mod openai;

pub use openai::OpenAiEmbedder;

use anyhow::Result;

use crate::core::{common_dimension, Embedding, GraphError};

/// Source of embedding vectors. One vector per input, in input order.
pub trait Embedder {
	fn model(&self) -> &str;

	fn embed(&self, texts: &[String]) -> Result<Vec<Embedding>>;
}

/// Splits `texts` into `batch_size` chunks and runs `call` on each in turn.
///
/// The first failing chunk aborts the pass; nothing from earlier chunks is
/// returned. The combined output must match the input count and share one
/// dimension.
pub fn embed_in_batches<F>(texts: &[String], batch_size: usize, mut call: F) -> Result<Vec<Embedding>>
where
	F: FnMut(&[String]) -> Result<Vec<Embedding>>,
{
	let mut embeddings = Vec::with_capacity(texts.len());

	for chunk in texts.chunks(batch_size.max(1)) {
		let batch = call(chunk)?;
		if batch.len() != chunk.len() {
			return Err(GraphError::EmbeddingCount {
				expected: chunk.len(),
				returned: batch.len(),
			}
			.into());
		}
		embeddings.extend(batch);
	}

	common_dimension(&embeddings)?;
	Ok(embeddings)
}
