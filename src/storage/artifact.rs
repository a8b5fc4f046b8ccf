//! Skill graph artifact I/O

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::SkillGraph;

/// Writes the graph as pretty JSON, creating parent directories.
///
/// Goes through a sibling temp file and a rename so an existing artifact is
/// either fully replaced or left untouched.
pub fn save(graph: &SkillGraph, path: &Path) -> Result<()> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("Failed to create {}", parent.display()))?;
	}

	let json = serde_json::to_string_pretty(graph).context("Failed to serialize skill graph")?;

	let tmp = temp_path(path);
	fs::write(&tmp, json).with_context(|| format!("Failed to write {}", tmp.display()))?;
	fs::rename(&tmp, path).with_context(|| format!("Failed to replace {}", path.display()))?;

	Ok(())
}

pub fn load(path: &Path) -> Result<SkillGraph> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	serde_json::from_slice(&bytes).context("Failed to parse skill graph")
}

fn temp_path(path: &Path) -> PathBuf {
	let name = path
		.file_name()
		.map(|n| n.to_string_lossy().to_string())
		.unwrap_or_else(|| "skill-graph.json".to_string());
	path.with_file_name(format!(".{}.tmp", name))
}
