//! K-Means over skill embeddings

use rand::Rng;

use crate::config::KMEANS_MAX_ITERATIONS;
use crate::core::{Embedding, GraphError};

#[derive(Debug, Clone)]
pub struct KMeansResult {
	/// Cluster index per input vector
	pub assignments: Vec<usize>,
	pub centroids: Vec<Embedding>,
	/// Rounds run, including the final no-change round when converged
	pub iterations: usize,
}

/// Lloyd's algorithm with seeds sampled without replacement from `vectors`.
///
/// Ties on distance go to the lowest centroid index. A centroid with no
/// members keeps its previous position.
pub fn kmeans<R: Rng + ?Sized>(
	vectors: &[Embedding],
	k: usize,
	rng: &mut R,
) -> Result<KMeansResult, GraphError> {
	if k == 0 {
		return Err(GraphError::NoClusters);
	}
	if k > vectors.len() {
		return Err(GraphError::TooManyClusters {
			requested: k,
			available: vectors.len(),
		});
	}

	let mut centroids: Vec<Embedding> = rand::seq::index::sample(rng, vectors.len(), k)
		.iter()
		.map(|idx| vectors[idx].clone())
		.collect();

	let mut assignments: Vec<Option<usize>> = vec![None; vectors.len()];
	let mut iterations = 0;

	while iterations < KMEANS_MAX_ITERATIONS {
		iterations += 1;

		let mut changed = false;
		for (slot, vector) in assignments.iter_mut().zip(vectors) {
			let nearest = nearest_centroid(vector, &centroids);
			if *slot != Some(nearest) {
				*slot = Some(nearest);
				changed = true;
			}
		}

		if !changed {
			break;
		}

		for (cluster, centroid) in centroids.iter_mut().enumerate() {
			let members = vectors
				.iter()
				.zip(&assignments)
				.filter(|(_, a)| **a == Some(cluster))
				.map(|(v, _)| v);
			if let Some(mean) = Embedding::mean(members) {
				*centroid = mean;
			}
		}
	}

	Ok(KMeansResult {
		assignments: assignments.into_iter().map(|a| a.unwrap_or(0)).collect(),
		centroids,
		iterations,
	})
}

fn nearest_centroid(vector: &Embedding, centroids: &[Embedding]) -> usize {
	let mut best = 0;
	let mut best_distance = f64::INFINITY;

	for (idx, centroid) in centroids.iter().enumerate() {
		let distance = vector.squared_distance(centroid);
		if distance < best_distance {
			best = idx;
			best_distance = distance;
		}
	}

	best
}
