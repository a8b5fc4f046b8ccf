//! Cluster labels from token frequency

use std::collections::HashMap;

use crate::config::STOPWORDS;
use crate::core::SkillRecord;

const NAME_WEIGHT: usize = 2;
const TAG_WEIGHT: usize = 1;

const FRIENDLY: &[(&str, &str)] = &[
	("sql", "SQL systems"),
	("data", "Data modeling"),
	("cloud", "Cloud ops"),
	("snowflake", "Warehouse ops"),
	("modeling", "Modeling"),
	("testing", "Testing"),
	("rag", "AI / RAG"),
	("systems", "Systems"),
	("python", "Python flows"),
];

/// Lower-cased alphanumeric runs, minus stopwords
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| !c.is_ascii_alphanumeric())
		.filter(|t| !t.is_empty() && !STOPWORDS.contains(t))
		.map(str::to_string)
		.collect()
}

/// Picks a label from the most frequent name and tag tokens.
///
/// Names count twice as much as tags. Equal counts keep first-seen order.
pub fn derive_label<'a, I>(skills: I) -> String
where
	I: IntoIterator<Item = &'a SkillRecord>,
{
	let mut order: Vec<(String, usize)> = Vec::new();
	let mut position: HashMap<String, usize> = HashMap::new();

	let mut tally = |token: String, weight: usize| match position.get(&token) {
		Some(&idx) => order[idx].1 += weight,
		None => {
			position.insert(token.clone(), order.len());
			order.push((token, weight));
		}
	};

	for skill in skills {
		for token in tokenize(&skill.name) {
			tally(token, NAME_WEIGHT);
		}
		for tag in &skill.tags {
			for token in tokenize(tag) {
				tally(token, TAG_WEIGHT);
			}
		}
	}

	// Stable sort keeps insertion order among equal counts
	order.sort_by(|a, b| b.1.cmp(&a.1));

	let Some((primary, _)) = order.first() else {
		return "cluster".to_string();
	};

	if let Some((_, friendly)) = FRIENDLY.iter().find(|(token, _)| *token == primary.as_str()) {
		return friendly.to_string();
	}

	match order.get(1) {
		Some((secondary, _)) => format!("{} {}", primary, secondary),
		None => primary.clone(),
	}
}
