//! Raw embedding vectors as returned by the embedding service

use crate::core::GraphError;

/// Embedding vectors are kept unnormalized: K-Means and PCA need the raw
/// geometry, and cosine similarity normalizes on the fly.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(pub Vec<f32>);

impl Embedding {
	pub fn new(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	pub fn dot(&self, other: &Self) -> f64 {
		self.0
			.iter()
			.zip(other.0.iter())
			.map(|(a, b)| f64::from(*a) * f64::from(*b))
			.sum()
	}

	pub fn norm(&self) -> f64 {
		self.dot(self).sqrt()
	}

	/// Squared Euclidean distance (same ordering as the plain distance)
	pub fn squared_distance(&self, other: &Self) -> f64 {
		self.0
			.iter()
			.zip(other.0.iter())
			.map(|(a, b)| {
				let diff = f64::from(*a) - f64::from(*b);
				diff * diff
			})
			.sum()
	}

	/// Cosine similarity in [-1.0, 1.0]; zero vectors score 0.0
	pub fn cosine(&self, other: &Self) -> f64 {
		let denom = self.norm() * other.norm();
		if denom > 0.0 {
			self.dot(other) / denom
		} else {
			0.0
		}
	}

	/// Component-wise arithmetic mean. Returns `None` for an empty set.
	pub fn mean<'a, I>(embeddings: I) -> Option<Self>
	where
		I: IntoIterator<Item = &'a Embedding>,
	{
		let mut iter = embeddings.into_iter();
		let first = iter.next()?;
		let mut sum: Vec<f64> = first.0.iter().map(|v| f64::from(*v)).collect();
		let mut count = 1usize;

		for emb in iter {
			for (acc, v) in sum.iter_mut().zip(emb.0.iter()) {
				*acc += f64::from(*v);
			}
			count += 1;
		}

		let n = count as f64;
		Some(Self(sum.into_iter().map(|v| (v / n) as f32).collect()))
	}
}

/// Ensures every vector shares one dimension, returning it (0 for an empty set)
pub fn common_dimension(embeddings: &[Embedding]) -> Result<usize, GraphError> {
	let Some(first) = embeddings.first() else {
		return Ok(0);
	};
	let expected = first.dim();

	for emb in embeddings {
		if emb.dim() != expected {
			return Err(GraphError::DimensionMismatch {
				expected,
				found: emb.dim(),
			});
		}
	}

	Ok(expected)
}
