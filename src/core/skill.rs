//! Skill catalog input types and normalized records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input document. Only the `skills` array is read; other resume fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillCatalog {
	#[serde(default)]
	pub skills: Vec<RawArea>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArea {
	pub id: String,
	#[serde(alias = "label")]
	pub area: String,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub category_label: Option<String>,
	/// Manual stack override; bypasses taxonomy classification
	#[serde(default)]
	pub stack: Option<String>,
	#[serde(default)]
	pub stack_label: Option<String>,
	#[serde(default)]
	pub items: Vec<RawItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
	pub name: String,
	#[serde(default)]
	pub level: Option<Scalar>,
	#[serde(default)]
	pub years: Option<Scalar>,
	#[serde(default)]
	pub tags: Vec<String>,
	/// Hidden only when explicitly `false`
	#[serde(default)]
	pub display: Option<bool>,
}

/// Free-form `level`/`years` value; resumes write `3`, `"Expert"` or `"5+"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
	Number(f64),
	Text(String),
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Scalar::Number(n) => write!(f, "{}", n),
			Scalar::Text(t) => f.write_str(t),
		}
	}
}

impl From<&str> for Scalar {
	fn from(value: &str) -> Self {
		Scalar::Text(value.to_string())
	}
}

/// Stack classification attached to an area and its skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRef {
	pub id: String,
	pub label: String,
}

#[derive(Debug, Clone)]
pub struct SkillRecord {
	pub id: String,
	pub name: String,
	pub area: String,
	pub area_id: String,
	pub category: String,
	pub category_label: String,
	pub stack: Option<StackRef>,
	pub level: Option<Scalar>,
	pub years: Option<Scalar>,
	pub tags: Vec<String>,
	/// Embedding input
	pub text: String,
}

#[derive(Debug, Clone)]
pub struct AreaRecord {
	pub id: String,
	pub label: String,
	pub category: String,
	pub category_label: String,
	pub stack_override: Option<StackRef>,
	/// Indices into the skill list, in input order
	pub skills: Vec<usize>,
}
