//! Skill catalog loading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::SkillCatalog;

pub fn load(path: &Path) -> Result<SkillCatalog> {
	let raw = fs::read_to_string(path)
		.with_context(|| format!("Failed to read skill catalog {}", path.display()))?;
	serde_json::from_str(&raw)
		.with_context(|| format!("Failed to parse skill catalog {}", path.display()))
}
