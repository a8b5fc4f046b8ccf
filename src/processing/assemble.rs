//! Output assembly: merges enriched records into one skill graph

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};

use crate::config::{Config, CENTROID_SAMPLE_DIMS, PROJECTION_DIMENSIONS};
use crate::core::{
	Cluster, ClusterMember, Coord, Embedding, Ranges, SkillGraph, SkillPoint, SkillRecord, StackRef,
};
use crate::processing::badge;
use crate::processing::grouping::Grouping;
use crate::processing::label::derive_label;

/// Builds the artifact. Only clusters with members are emitted, in id order.
pub fn assemble(
	model: &str,
	skills: &[SkillRecord],
	embeddings: &[Embedding],
	grouping: &Grouping,
	coords: &[Coord],
) -> SkillGraph {
	let budget = Config::badge_budget();

	let points: Vec<SkillPoint> = skills
		.iter()
		.enumerate()
		.map(|(idx, skill)| {
			let stack = grouping.stacks.get(idx).cloned().flatten();
			SkillPoint {
				id: skill.id.clone(),
				area: skill.area.clone(),
				area_id: skill.area_id.clone(),
				category: skill.category.clone(),
				category_label: skill.category_label.clone(),
				stack: stack.as_ref().map(|s| s.id.clone()),
				stack_label: stack.map(|s| s.label),
				cluster: grouping.assignments[idx],
				name: skill.name.clone(),
				badge_label: badge::shorten(&skill.name, budget),
				level: skill.level.clone(),
				years: skill.years.clone(),
				tags: skill.tags.clone(),
				coord: coords.get(idx).copied().unwrap_or_default(),
			}
		})
		.collect();

	let clusters: Vec<Cluster> = grouping
		.groups
		.iter()
		.enumerate()
		.filter_map(|(id, group)| {
			let members: Vec<usize> = (0..skills.len())
				.filter(|&idx| grouping.assignments[idx] == id)
				.collect();
			if members.is_empty() {
				return None;
			}

			let label = group
				.label
				.clone()
				.unwrap_or_else(|| derive_label(members.iter().map(|&idx| &skills[idx])));

			let (category, category_label) = match &group.category {
				Some((c, l)) => (Some(c.clone()), Some(l.clone())),
				None => dominant(members.iter().map(|&idx| {
					(skills[idx].category.clone(), skills[idx].category_label.clone())
				}))
				.unzip(),
			};

			let stack: Option<StackRef> = group.stack.clone().or_else(|| {
				dominant(members.iter().filter_map(|&idx| points[idx].stack.clone().zip(points[idx].stack_label.clone())))
					.map(|(id, label)| StackRef { id, label })
			});

			let centroid_sample = Embedding::mean(members.iter().map(|&idx| &embeddings[idx]))
				.map(|c| c.as_slice().iter().take(CENTROID_SAMPLE_DIMS).copied().collect())
				.unwrap_or_default();

			Some(Cluster {
				id,
				key: group.key.clone(),
				label,
				category,
				category_label,
				stack: stack.as_ref().map(|s| s.id.clone()),
				stack_label: stack.map(|s| s.label),
				members: members
					.iter()
					.map(|&idx| ClusterMember {
						id: skills[idx].id.clone(),
						name: skills[idx].name.clone(),
						area: skills[idx].area.clone(),
					})
					.collect(),
				centroid_sample,
			})
		})
		.collect();

	let all_coords: Vec<Coord> = points.iter().map(|p| p.coord).collect();

	SkillGraph {
		generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
		model: model.to_string(),
		cluster_count: clusters.len(),
		skills: points,
		clusters,
		dimensions: PROJECTION_DIMENSIONS.iter().map(|d| d.to_string()).collect(),
		ranges: Ranges::from_coords(&all_coords),
	}
}

/// Most frequent value; the first-seen value wins ties
fn dominant<T, I>(values: I) -> Option<T>
where
	T: Clone + Eq + std::hash::Hash,
	I: IntoIterator<Item = T>,
{
	let mut order: Vec<T> = Vec::new();
	let mut counts: HashMap<T, usize> = HashMap::new();

	for value in values {
		let count = counts.entry(value.clone()).or_insert(0);
		if *count == 0 {
			order.push(value);
		}
		*count += 1;
	}

	let mut best: Option<(T, usize)> = None;
	for value in order {
		let count = counts[&value];
		if best.as_ref().map_or(true, |(_, c)| count > *c) {
			best = Some((value, count));
		}
	}
	best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::Scalar;
	use crate::processing::grouping::Group;

	fn skill(id: &str, name: &str, category: &str) -> SkillRecord {
		SkillRecord {
			id: id.to_string(),
			name: name.to_string(),
			area: "Area".into(),
			area_id: "area".into(),
			category: category.to_string(),
			category_label: category.to_uppercase(),
			stack: None,
			level: Some("Expert".into()),
			years: Some(Scalar::Number(4.0)),
			tags: vec!["warehouse".into()],
			text: String::new(),
		}
	}

	fn derived(key: &str) -> Group {
		Group { key: key.to_string(), label: None, category: None, stack: None }
	}

	#[test]
	fn empty_clusters_are_not_emitted() {
		let skills = vec![
			skill("a:SQL", "SQL", "data"),
			skill("a:Snowflake SQL", "Snowflake SQL", "data"),
			skill("a:Heart Failure Quality Metrics", "Heart Failure Quality Metrics", "health"),
		];
		let embeddings = vec![
			Embedding::new((0..10).map(|v| v as f32).collect()),
			Embedding::new((0..10).map(|v| v as f32 + 2.0).collect()),
			Embedding::new(vec![0.0; 10]),
		];
		let grouping = Grouping {
			assignments: vec![0, 0, 2],
			groups: vec![derived("cluster-0"), derived("cluster-1"), derived("cluster-2")],
			stacks: vec![
				Some(StackRef { id: "data".into(), label: "Data Engineering".into() }),
				None,
				None,
			],
		};
		let coords = vec![
			Coord { x: -1.0, y: 0.5 },
			Coord { x: 2.0, y: -0.5 },
			Coord { x: 0.0, y: 3.0 },
		];

		let graph = assemble("test-model", &skills, &embeddings, &grouping, &coords);

		assert_eq!(graph.cluster_count, 2);
		assert_eq!(graph.clusters.iter().map(|c| c.id).collect::<Vec<_>>(), vec![0, 2]);

		let first = graph.cluster(0).unwrap();
		assert_eq!(first.label, "SQL systems");
		assert_eq!(first.category.as_deref(), Some("data"));
		assert_eq!(first.stack.as_deref(), Some("data"));
		assert_eq!(first.centroid_sample, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
		assert_eq!(first.members.len(), 2);

		let third = graph.cluster(2).unwrap();
		assert_eq!(third.stack, None);
		assert_eq!(third.category_label.as_deref(), Some("HEALTH"));
		assert_eq!(graph.skills[2].badge_label, "H. F. Q. M.");

		assert_eq!(graph.ranges.x.min, -1.0);
		assert_eq!(graph.ranges.x.max, 2.0);
		assert_eq!(graph.ranges.y.max, 3.0);
		assert_eq!(graph.dimensions, vec!["pc1", "pc2"]);
	}

	#[test]
	fn generated_at_is_utc_iso8601() {
		let skills = vec![skill("a:Go", "Go", "x")];
		let grouping = Grouping {
			assignments: vec![0],
			groups: vec![derived("cluster-0")],
			stacks: vec![None],
		};
		let graph = assemble("m", &skills, &[Embedding::new(vec![1.0])], &grouping, &[Coord::default()]);
		assert!(graph.generated_at.ends_with('Z'));
		assert!(chrono::DateTime::parse_from_rfc3339(&graph.generated_at).is_ok());
	}

	#[test]
	fn dominant_prefers_first_seen_on_ties() {
		assert_eq!(dominant(vec!["b", "a", "a", "b"]), Some("b"));
		assert_eq!(dominant(vec!["b", "a", "a"]), Some("a"));
		assert_eq!(dominant(Vec::<&str>::new()), None);
	}
}
