//! Skill graph artifact written for the front-end

use serde::{Deserialize, Serialize};

use super::skill::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord {
	pub x: f64,
	pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPoint {
	pub id: String,
	pub area: String,
	pub area_id: String,
	pub category: String,
	pub category_label: String,
	pub stack: Option<String>,
	pub stack_label: Option<String>,
	pub cluster: usize,
	pub name: String,
	pub badge_label: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub level: Option<Scalar>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub years: Option<Scalar>,
	pub tags: Vec<String>,
	pub coord: Coord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterMember {
	pub id: String,
	pub name: String,
	pub area: String,
}

/// A group of skills, either a vector-space neighborhood or a taxonomy area
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
	pub id: usize,
	pub key: String,
	pub label: String,
	pub category: Option<String>,
	pub category_label: Option<String>,
	pub stack: Option<String>,
	pub stack_label: Option<String>,
	pub members: Vec<ClusterMember>,
	/// First dimensions of the mean member embedding, for debugging only
	pub centroid_sample: Vec<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
	pub min: f64,
	pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ranges {
	pub x: Range,
	pub y: Range,
}

impl Ranges {
	/// Axis-aligned bounds of a coordinate set (all zeros when empty)
	pub fn from_coords(coords: &[Coord]) -> Self {
		if coords.is_empty() {
			let zero = Range { min: 0.0, max: 0.0 };
			return Self { x: zero, y: zero };
		}

		let bound = |pick: fn(&Coord) -> f64| {
			coords.iter().map(pick).fold(
				Range { min: f64::INFINITY, max: f64::NEG_INFINITY },
				|acc, v| Range { min: acc.min.min(v), max: acc.max.max(v) },
			)
		};

		Self { x: bound(|c| c.x), y: bound(|c| c.y) }
	}
}

/// Complete skill graph for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGraph {
	pub generated_at: String,
	pub model: String,
	pub cluster_count: usize,
	pub skills: Vec<SkillPoint>,
	pub clusters: Vec<Cluster>,
	pub dimensions: Vec<String>,
	pub ranges: Ranges,
}

impl SkillGraph {
	pub fn cluster(&self, id: usize) -> Option<&Cluster> {
		self.clusters.iter().find(|c| c.id == id)
	}
}
