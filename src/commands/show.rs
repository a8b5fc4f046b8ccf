//! Show command - summarize a written skill graph

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::core::SkillGraph;
use crate::storage;
use crate::ui;

const PREVIEW_COUNT: usize = 6;

pub fn run(path: &Path) -> Result<()> {
	let graph = storage::load_graph(path)?;
	ui::debug(&format!("Generated at {}", graph.generated_at));
	print_summary(&graph);
	Ok(())
}

pub fn print_summary(graph: &SkillGraph) {
	ui::header("Skill Graph");
	ui::success(&format!(
		"{} skills, {} clusters ({})",
		graph.skills.len(),
		graph.cluster_count,
		graph.model
	));

	for cluster in &graph.clusters {
		let stack = cluster
			.stack_label
			.as_deref()
			.map(|s| format!(" [{}]", s).dimmed().to_string())
			.unwrap_or_default();

		println!(
			"\n{} {} {}{} ({} skills)",
			"Cluster".bright_white(),
			cluster.id.to_string().bright_cyan(),
			cluster.label.bright_white().bold(),
			stack,
			cluster.members.len()
		);

		for member in cluster.members.iter().take(PREVIEW_COUNT) {
			println!("  {} {}", member.name, format!("({})", member.area).dimmed());
		}

		if cluster.members.len() > PREVIEW_COUNT {
			println!(
				"  {}",
				format!("... and {} more", cluster.members.len() - PREVIEW_COUNT).dimmed()
			);
		}
	}

	println!(
		"\n{} x [{:.3}, {:.3}]  y [{:.3}, {:.3}]",
		"Ranges:".bright_blue(),
		graph.ranges.x.min,
		graph.ranges.x.max,
		graph.ranges.y.min,
		graph.ranges.y.max
	);
}
