//! Grouping engine: one interface, two interchangeable strategies

use rand::RngCore;

use crate::core::{AreaRecord, Embedding, GraphError, SkillRecord, StackRef};
use crate::processing::kmeans::kmeans;
use crate::processing::taxonomy::EmbeddedTaxonomy;
use crate::ui;

/// Seed metadata for one emitted cluster
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
	pub key: String,
	/// Fixed label; `None` means the label is derived from member tokens
	pub label: Option<String>,
	pub category: Option<(String, String)>,
	pub stack: Option<StackRef>,
}

#[derive(Debug, Clone)]
pub struct Grouping {
	/// Index into `groups`, one per skill
	pub assignments: Vec<usize>,
	pub groups: Vec<Group>,
	/// Resolved stack per skill (override or inferred)
	pub stacks: Vec<Option<StackRef>>,
}

pub trait GroupingStrategy {
	fn name(&self) -> &'static str;

	fn classify(
		&self,
		areas: &[AreaRecord],
		skills: &[SkillRecord],
		embeddings: &[Embedding],
		rng: &mut dyn RngCore,
	) -> Result<Grouping, GraphError>;
}

/// Vector-space neighborhoods cutting across areas
#[derive(Debug, Clone, Copy)]
pub struct VectorSpace {
	pub clusters: usize,
}

impl GroupingStrategy for VectorSpace {
	fn name(&self) -> &'static str {
		"kmeans"
	}

	fn classify(
		&self,
		_areas: &[AreaRecord],
		skills: &[SkillRecord],
		embeddings: &[Embedding],
		rng: &mut dyn RngCore,
	) -> Result<Grouping, GraphError> {
		let result = kmeans(embeddings, self.clusters, rng)?;
		ui::debug(&format!(
			"K-Means settled after {} rounds (k={})",
			result.iterations, self.clusters
		));

		let groups = (0..self.clusters)
			.map(|id| Group {
				key: format!("cluster-{}", id),
				label: None,
				category: None,
				stack: None,
			})
			.collect();

		Ok(Grouping {
			assignments: result.assignments,
			groups,
			stacks: skills.iter().map(|s| s.stack.clone()).collect(),
		})
	}
}

/// One cluster per area, stacked by override or nearest taxonomy entry
#[derive(Debug, Clone)]
pub struct ByTaxonomy {
	taxonomy: EmbeddedTaxonomy,
}

impl ByTaxonomy {
	pub fn new(taxonomy: EmbeddedTaxonomy) -> Self {
		Self { taxonomy }
	}

	fn area_stack(&self, area: &AreaRecord, embeddings: &[Embedding]) -> Option<StackRef> {
		if let Some(stack) = &area.stack_override {
			ui::debug(&format!("{}: manual stack {}", area.id, stack.id));
			return Some(stack.clone());
		}

		let mean = Embedding::mean(area.skills.iter().map(|&idx| &embeddings[idx]))?;
		let (entry, similarity) = self.taxonomy.nearest(&mean)?;
		ui::debug(&format!(
			"{}: classified as {} ({:.3})",
			area.id, entry.id, similarity
		));
		Some(entry.stack())
	}
}

impl GroupingStrategy for ByTaxonomy {
	fn name(&self) -> &'static str {
		"taxonomy"
	}

	fn classify(
		&self,
		areas: &[AreaRecord],
		skills: &[SkillRecord],
		embeddings: &[Embedding],
		_rng: &mut dyn RngCore,
	) -> Result<Grouping, GraphError> {
		if let (Some(first), Ok(expected)) = (embeddings.first(), self.taxonomy.dimension()) {
			if !self.taxonomy.is_empty() && first.dim() != expected {
				return Err(GraphError::DimensionMismatch {
					expected,
					found: first.dim(),
				});
			}
		}

		let mut assignments = vec![0; skills.len()];
		let mut stacks = vec![None; skills.len()];
		let mut groups = Vec::new();

		for area in areas.iter().filter(|a| !a.skills.is_empty()) {
			let stack = self.area_stack(area, embeddings);
			let cluster = groups.len();

			for &idx in &area.skills {
				assignments[idx] = cluster;
				stacks[idx] = stack.clone();
			}

			groups.push(Group {
				key: area.id.clone(),
				label: Some(area.label.clone()),
				category: Some((area.category.clone(), area.category_label.clone())),
				stack,
			});
		}

		Ok(Grouping { assignments, groups, stacks })
	}
}
