//! Build command - run the pipeline and write the skill graph

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::config::{Config, Strategy};
use crate::embedder::{Embedder, OpenAiEmbedder};
use crate::processing::taxonomy::{EmbeddedTaxonomy, CATALOG};
use crate::processing::{build_graph, normalize, ByTaxonomy, GroupingStrategy, VectorSpace};
use crate::storage;
use crate::ui;

pub fn run(config: &Config) -> Result<()> {
	config.validate()?;
	let start = Instant::now();

	let catalog = storage::load_catalog(&config.input)?;
	ui::debug(&format!(
		"Loaded {} areas from {}",
		catalog.skills.len(),
		config.input.display()
	));

	// Fails on an empty catalog before any network call
	let normalized = normalize(&catalog, config.include_hidden)?;

	let embedder = OpenAiEmbedder::from_config(config)?;
	let strategy = strategy(config, &embedder)?;

	let seed = config.seed.unwrap_or_else(|| rand::rng().random());
	ui::debug(&format!("Seed: {}", seed));
	let mut rng = StdRng::seed_from_u64(seed);

	let graph = build_graph(
		&normalized,
		&embedder,
		strategy.as_ref(),
		&mut rng,
	)?;

	storage::save_graph(&graph, &config.output)?;

	super::show::print_summary(&graph);
	ui::success(&format!(
		"Skill graph written to {} in {:.1}s",
		ui::path_link(&config.output),
		start.elapsed().as_secs_f32()
	));

	Ok(())
}

fn strategy(config: &Config, embedder: &dyn Embedder) -> Result<Box<dyn GroupingStrategy>> {
	Ok(match config.strategy {
		Strategy::Kmeans => Box::new(VectorSpace {
			clusters: config.clusters,
		}),
		Strategy::Taxonomy => {
			ui::info(&format!("Embedding {} taxonomy descriptors", CATALOG.len()));
			Box::new(ByTaxonomy::new(EmbeddedTaxonomy::embed(CATALOG, embedder)?))
		}
	})
}
