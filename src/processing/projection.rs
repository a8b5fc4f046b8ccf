//! 2-D PCA through the Gram matrix and power iteration

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::config::POWER_ITERATIONS;
use crate::core::{Coord, Embedding};

/// One eigen-pair of the Gram matrix
#[derive(Debug, Clone)]
pub struct Component {
	pub value: f64,
	pub vector: Array1<f64>,
}

impl Component {
	fn zero(n: usize) -> Self {
		Self {
			value: 0.0,
			vector: Array1::zeros(n),
		}
	}
}

/// Projects every embedding onto the two dominant principal axes.
///
/// Inputs are mean-centered first, so a constant offset added to every
/// vector does not move the output. Axis signs depend on `rng`.
pub fn project_2d<R: Rng + ?Sized>(embeddings: &[Embedding], rng: &mut R) -> Vec<Coord> {
	let n = embeddings.len();
	let dims = embeddings.first().map(Embedding::dim).unwrap_or(0);
	if n == 0 || dims == 0 {
		return vec![Coord::default(); n];
	}

	let centered = center(embeddings, dims);
	let mut matrix = centered.dot(&centered.t());

	let mut components = Vec::with_capacity(2);
	for _ in 0..n.min(2) {
		let component = power_iteration(&matrix, POWER_ITERATIONS, rng);
		if !component.value.is_finite() {
			break;
		}
		deflate(&mut matrix, &component);
		components.push(component);
	}
	while components.len() < 2 {
		components.push(Component::zero(n));
	}

	let scale_x = components[0].value.max(0.0).sqrt();
	let scale_y = components[1].value.max(0.0).sqrt();

	(0..n)
		.map(|i| Coord {
			x: components[0].vector[i] * scale_x,
			y: components[1].vector[i] * scale_y,
		})
		.collect()
}

/// Row-per-embedding matrix with the column means subtracted
fn center(embeddings: &[Embedding], dims: usize) -> Array2<f64> {
	let mut data = Array2::<f64>::zeros((embeddings.len(), dims));
	for (i, emb) in embeddings.iter().enumerate() {
		for (j, &val) in emb.as_slice().iter().take(dims).enumerate() {
			data[[i, j]] = f64::from(val);
		}
	}

	let n = embeddings.len() as f64;
	let mean = data.sum_axis(ndarray::Axis(0)) / n;
	data - &mean
}

/// Dominant eigen-pair of a symmetric matrix after a fixed number of rounds
pub fn power_iteration<R: Rng + ?Sized>(matrix: &Array2<f64>, iterations: usize, rng: &mut R) -> Component {
	let n = matrix.nrows();
	let mut b: Array1<f64> = (0..n).map(|_| rng.random::<f64>() - 0.5).collect();

	let norm = b.dot(&b).sqrt();
	if norm > 0.0 {
		b /= norm;
	} else if n > 0 {
		b[0] = 1.0;
	}

	let mut value = 0.0;
	for _ in 0..iterations {
		let next = matrix.dot(&b);
		let norm = next.dot(&next).sqrt();
		if norm == 0.0 {
			break;
		}
		b = next / norm;
		value = b.dot(&matrix.dot(&b));
	}

	Component { value, vector: b }
}

/// Removes `value · v vᵀ` so the next power iteration finds the next axis
fn deflate(matrix: &mut Array2<f64>, component: &Component) {
	let v = &component.vector;
	let n = v.len();
	for r in 0..n {
		for c in 0..n {
			matrix[[r, c]] -= component.value * v[r] * v[c];
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn sample() -> Vec<Embedding> {
		vec![
			Embedding::new(vec![0.0, 0.0, 1.0, 0.5]),
			Embedding::new(vec![2.0, 0.5, 0.0, 0.25]),
			Embedding::new(vec![4.0, 1.0, 1.0, 0.0]),
			Embedding::new(vec![1.0, 3.0, 0.5, 0.75]),
			Embedding::new(vec![3.0, 2.5, 0.25, 1.0]),
		]
	}

	fn close(a: &[Coord], b: &[Coord]) -> bool {
		a.iter()
			.zip(b)
			.all(|(p, q)| (p.x - q.x).abs() < 1e-6 && (p.y - q.y).abs() < 1e-6)
	}

	#[test]
	fn fixed_seed_is_deterministic() {
		let first = project_2d(&sample(), &mut StdRng::seed_from_u64(11));
		let second = project_2d(&sample(), &mut StdRng::seed_from_u64(11));
		assert_eq!(first, second);
	}

	#[test]
	fn constant_offset_does_not_move_points() {
		let shifted: Vec<Embedding> = sample()
			.iter()
			.map(|e| Embedding::new(e.as_slice().iter().map(|v| v + 16.0).collect()))
			.collect();

		let base = project_2d(&sample(), &mut StdRng::seed_from_u64(5));
		let moved = project_2d(&shifted, &mut StdRng::seed_from_u64(5));
		assert!(close(&base, &moved), "{:?} vs {:?}", base, moved);
	}

	#[test]
	fn projection_preserves_centered_spread() {
		// Points on a line: all variance on the first axis
		let line: Vec<Embedding> = (0..4)
			.map(|i| Embedding::new(vec![i as f32, 2.0 * i as f32]))
			.collect();
		let coords = project_2d(&line, &mut StdRng::seed_from_u64(9));

		let spread: f64 = coords.iter().map(|c| c.x * c.x).sum();
		// Sum of squared centered norms: (2.25 + 0.25 + 0.25 + 2.25) * 5
		assert!((spread - 25.0).abs() < 1e-6);
		assert!(coords.iter().all(|c| c.y.abs() < 1e-6));
	}

	#[test]
	fn single_point_sits_at_origin() {
		let coords = project_2d(&[Embedding::new(vec![3.0, 4.0])], &mut StdRng::seed_from_u64(1));
		assert_eq!(coords, vec![Coord { x: 0.0, y: 0.0 }]);
	}

	#[test]
	fn empty_input_or_dimension_gives_zeros() {
		assert!(project_2d(&[], &mut StdRng::seed_from_u64(1)).is_empty());
		let coords = project_2d(
			&[Embedding::new(vec![]), Embedding::new(vec![])],
			&mut StdRng::seed_from_u64(1),
		);
		assert_eq!(coords, vec![Coord::default(); 2]);
	}

	#[test]
	fn power_iteration_finds_dominant_eigenvalue() {
		let matrix = ndarray::arr2(&[[4.0, 1.0], [1.0, 3.0]]);
		let component = power_iteration(&matrix, POWER_ITERATIONS, &mut StdRng::seed_from_u64(2));
		let expected = (7.0 + 5.0_f64.sqrt()) / 2.0;
		assert!((component.value - expected).abs() < 1e-9);
	}
}
