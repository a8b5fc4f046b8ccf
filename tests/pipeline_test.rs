// End-to-end pipeline tests against a deterministic embedder

mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use common::{catalog, FakeEmbedder};
use skillgraph::processing::taxonomy::{EmbeddedTaxonomy, CATALOG};
use skillgraph::processing::{build_graph, normalize, ByTaxonomy, Normalized, VectorSpace};

fn visible() -> Normalized {
	normalize(&catalog(), false).unwrap()
}

fn taxonomy_strategy(embedder: &FakeEmbedder) -> ByTaxonomy {
	ByTaxonomy::new(EmbeddedTaxonomy::embed(CATALOG, embedder).unwrap())
}

#[test]
fn taxonomy_graph_has_one_cluster_per_area() {
	let embedder = FakeEmbedder::new();
	let strategy = taxonomy_strategy(&embedder);
	let graph = build_graph(&visible(), &embedder, &strategy, &mut StdRng::seed_from_u64(1)).unwrap();

	assert_eq!(graph.skills.len(), 6);
	assert_eq!(graph.clusters.len(), 3);
	assert_eq!(graph.cluster_count, 3);
	assert_eq!(embedder.calls.get(), 2);

	let keys: Vec<_> = graph.clusters.iter().map(|c| c.key.as_str()).collect();
	assert_eq!(keys, vec!["warehouse", "infra", "ml"]);

	// Overrides are used verbatim
	assert_eq!(graph.clusters[0].stack.as_deref(), Some("data"));
	assert_eq!(graph.clusters[0].stack_label.as_deref(), Some("Data Engineering"));
	assert_eq!(graph.clusters[1].stack.as_deref(), Some("cloud"));
	assert_eq!(graph.clusters[1].category_label.as_deref(), Some("Platform"));
	// The third area is classified into some catalog entry
	let inferred = graph.clusters[2].stack.as_deref().unwrap();
	assert!(CATALOG.iter().any(|e| e.id == inferred));

	assert!(graph.ranges.x.max >= graph.ranges.x.min);
	assert!(graph.ranges.y.max >= graph.ranges.y.min);
	let xs: Vec<f64> = graph.skills.iter().map(|s| s.coord.x).collect();
	assert_eq!(graph.ranges.x.min, xs.iter().cloned().fold(f64::INFINITY, f64::min));
	assert_eq!(graph.ranges.x.max, xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
}

#[test]
fn every_skill_points_at_an_emitted_cluster() {
	let embedder = FakeEmbedder::new();
	let graph = build_graph(
		&visible(),
		&embedder,
		&VectorSpace { clusters: 3 },
		&mut StdRng::seed_from_u64(8),
	)
	.unwrap();

	let emitted: HashSet<usize> = graph.clusters.iter().map(|c| c.id).collect();
	assert!(graph.skills.iter().all(|s| emitted.contains(&s.cluster)));

	let ids: HashSet<&str> = graph.skills.iter().map(|s| s.id.as_str()).collect();
	assert_eq!(ids.len(), graph.skills.len());

	let members: usize = graph.clusters.iter().map(|c| c.members.len()).sum();
	assert_eq!(members, 6);
	assert!(graph.clusters.iter().all(|c| c.centroid_sample.len() == 8));
	assert_eq!(embedder.calls.get(), 1);
}

#[test]
fn hidden_items_appear_only_when_requested() {
	let embedder = FakeEmbedder::new();
	let strategy = VectorSpace { clusters: 2 };

	let default = build_graph(&visible(), &embedder, &strategy, &mut StdRng::seed_from_u64(3)).unwrap();
	assert!(default.skills.iter().all(|s| s.name != "Legacy SSIS"));

	let with_hidden = build_graph(&normalize(&catalog(), true).unwrap(), &embedder, &strategy, &mut StdRng::seed_from_u64(3)).unwrap();
	assert_eq!(with_hidden.skills.len(), 7);
	assert_eq!(
		with_hidden.skills.iter().filter(|s| s.name == "Legacy SSIS").count(),
		1
	);
}

#[test]
fn same_seed_same_graph() {
	let embedder = FakeEmbedder::new();
	let strategy = VectorSpace { clusters: 3 };

	let a = build_graph(&visible(), &embedder, &strategy, &mut StdRng::seed_from_u64(21)).unwrap();
	let b = build_graph(&visible(), &embedder, &strategy, &mut StdRng::seed_from_u64(21)).unwrap();

	let coords = |g: &skillgraph::core::SkillGraph| g.skills.iter().map(|s| (s.coord, s.cluster)).collect::<Vec<_>>();
	assert_eq!(coords(&a), coords(&b));
}

#[test]
fn too_many_clusters_fails_the_run() {
	let embedder = FakeEmbedder::new();
	let err = build_graph(
		&visible(),
		&embedder,
		&VectorSpace { clusters: 7 },
		&mut StdRng::seed_from_u64(0),
	)
	.unwrap_err();
	assert!(format!("{:#}", err).contains("cannot exceed"));
}

#[test]
fn badges_fit_and_short_names_pass_through() {
	let embedder = FakeEmbedder::new();
	let graph = build_graph(&visible(), &embedder, &VectorSpace { clusters: 1 }, &mut StdRng::seed_from_u64(0)).unwrap();

	for skill in &graph.skills {
		assert!(skill.badge_label.chars().count() <= 13, "{}", skill.badge_label);
	}
	let terraform = graph.skills.iter().find(|s| s.name == "Terraform").unwrap();
	assert_eq!(terraform.badge_label, "Terraform");
	let rag = graph.skills.iter().find(|s| s.name.starts_with("Retrieval")).unwrap();
	assert_eq!(rag.badge_label, "RAG");
}

#[test]
fn graph_reuses_the_given_normalized_records() {
	let embedder = FakeEmbedder::new();
	let mut normalized = visible();
	normalized.skills[0].text = "sql warehouse".into();
	let graph = build_graph(&normalized, &embedder, &VectorSpace { clusters: 2 }, &mut StdRng::seed_from_u64(5)).unwrap();

	let ids: Vec<&str> = graph.skills.iter().map(|s| s.id.as_str()).collect();
	let expected: Vec<&str> = normalized.skills.iter().map(|s| s.id.as_str()).collect();
	assert_eq!(ids, expected);
	assert_eq!(embedder.calls.get(), 1);
}
