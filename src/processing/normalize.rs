//! Flattens the raw skill catalog into uniform skill and area records

use std::collections::HashMap;

use crate::core::{AreaRecord, GraphError, RawArea, RawItem, SkillCatalog, SkillRecord, StackRef};
use crate::processing::taxonomy;
use crate::ui;

#[derive(Debug, Clone)]
pub struct Normalized {
	pub skills: Vec<SkillRecord>,
	pub areas: Vec<AreaRecord>,
	pub hidden: usize,
}

/// Builds one `SkillRecord` per visible item and one `AreaRecord` per area.
///
/// Items with `display: false` are skipped unless `include_hidden` is set.
pub fn normalize(catalog: &SkillCatalog, include_hidden: bool) -> Result<Normalized, GraphError> {
	let mut skills = Vec::new();
	let mut areas = Vec::with_capacity(catalog.skills.len());
	let mut hidden = 0;
	let mut seen_ids: HashMap<String, usize> = HashMap::new();

	for raw in &catalog.skills {
		let mut area = area_record(raw);

		for item in &raw.items {
			if item.display == Some(false) && !include_hidden {
				hidden += 1;
				continue;
			}

			let id = unique_id(&mut seen_ids, format!("{}:{}", raw.id, item.name));
			area.skills.push(skills.len());
			skills.push(skill_record(id, &area, item));
		}

		areas.push(area);
	}

	if skills.is_empty() {
		return Err(GraphError::EmptySkillSet);
	}

	ui::debug(&format!(
		"Normalized {} skills across {} areas ({} hidden)",
		skills.len(),
		areas.len(),
		hidden
	));

	Ok(Normalized { skills, areas, hidden })
}

fn area_record(raw: &RawArea) -> AreaRecord {
	let stack_override = raw.stack.as_ref().map(|id| {
		let known = taxonomy::lookup(id);
		let label = raw
			.stack_label
			.clone()
			.or_else(|| known.map(|entry| entry.label.to_string()))
			.unwrap_or_else(|| id.clone());
		let id = known.map_or_else(|| id.clone(), |entry| entry.id.to_string());
		StackRef { id, label }
	});

	AreaRecord {
		id: raw.id.clone(),
		label: raw.area.clone(),
		category: raw.category.clone().unwrap_or_else(|| raw.id.clone()),
		category_label: raw.category_label.clone().unwrap_or_else(|| raw.area.clone()),
		stack_override,
		skills: Vec::new(),
	}
}

fn skill_record(id: String, area: &AreaRecord, item: &RawItem) -> SkillRecord {
	SkillRecord {
		text: skill_text(item, &area.label, area.stack_override.as_ref()),
		id,
		name: item.name.clone(),
		area: area.label.clone(),
		area_id: area.id.clone(),
		category: area.category.clone(),
		category_label: area.category_label.clone(),
		stack: area.stack_override.clone(),
		level: item.level.clone(),
		years: item.years.clone(),
		tags: item.tags.clone(),
	}
}

/// Embedding input: name, area, stack, tags, level and years in one line
fn skill_text(item: &RawItem, area: &str, stack: Option<&StackRef>) -> String {
	let mut text = format!("{}. Area: {}.", item.name, area);
	if let Some(stack) = stack {
		text.push_str(&format!(" Stack: {}.", stack.label));
	}

	let na = || "n/a".to_string();
	let level = item.level.as_ref().map(|l| l.to_string()).unwrap_or_else(na);
	let years = item.years.as_ref().map(|y| y.to_string()).unwrap_or_else(na);

	text.push_str(&format!(
		" Tags: {}. Level: {}. Years: {}",
		item.tags.join(", "),
		level,
		years
	));
	text
}

/// Keeps the first id verbatim and suffixes repeats with `-2`, `-3`, ...
fn unique_id(seen: &mut HashMap<String, usize>, id: String) -> String {
	let count = seen.entry(id.clone()).or_insert(0);
	*count += 1;
	if *count == 1 {
		return id;
	}

	let mut n = *count;
	loop {
		let candidate = format!("{}-{}", id, n);
		if !seen.contains_key(&candidate) {
			seen.insert(candidate.clone(), 1);
			return candidate;
		}
		n += 1;
	}
}
