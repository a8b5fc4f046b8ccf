#![allow(dead_code)]

use anyhow::Result;
use serde_json::{json, Value};
use std::cell::Cell;

use skillgraph::core::{Embedding, SkillCatalog};
use skillgraph::embedder::Embedder;

pub const DIMS: usize = 16;

/// Deterministic bag-of-tokens embedder; counts its calls
pub struct FakeEmbedder {
	pub calls: Cell<usize>,
}

impl FakeEmbedder {
	pub fn new() -> Self {
		Self { calls: Cell::new(0) }
	}
}

pub fn fake_vector(text: &str) -> Vec<f32> {
	let mut v = vec![0.0f32; DIMS];
	for token in text
		.to_lowercase()
		.split(|c: char| !c.is_ascii_alphanumeric())
		.filter(|t| !t.is_empty())
	{
		let bucket = token.bytes().map(usize::from).sum::<usize>() % DIMS;
		v[bucket] += 1.0;
	}
	v
}

impl Embedder for FakeEmbedder {
	fn model(&self) -> &str {
		"fake-embedding"
	}

	fn embed(&self, texts: &[String]) -> Result<Vec<Embedding>> {
		self.calls.set(self.calls.get() + 1);
		Ok(texts.iter().map(|t| Embedding::new(fake_vector(t))).collect())
	}
}

/// Three areas with two visible items each, one hidden item, two stack overrides
pub fn resume_json() -> Value {
	json!({
		"header": { "name": "Test Person" },
		"skills": [
			{
				"id": "warehouse",
				"area": "Data Warehousing",
				"stack": "data",
				"items": [
					{ "name": "Snowflake SQL", "level": "Expert", "years": 6, "tags": ["sql", "warehouse"] },
					{ "name": "dbt Modeling", "level": "Advanced", "years": 4, "tags": ["modeling", "sql"] },
					{ "name": "Legacy SSIS", "display": false, "tags": ["etl"] }
				]
			},
			{
				"id": "infra",
				"area": "Infrastructure",
				"stack": "cloud",
				"category": "platform",
				"categoryLabel": "Platform",
				"items": [
					{ "name": "Terraform", "years": 3, "tags": ["cloud", "iac"] },
					{ "name": "Kubernetes Operations", "tags": ["cloud", "containers"] }
				]
			},
			{
				"id": "ml",
				"area": "Applied AI",
				"items": [
					{ "name": "Retrieval-Augmented Generation", "tags": ["rag", "llm"] },
					{ "name": "Model Evaluation", "display": true, "tags": ["testing", "llm"] }
				]
			}
		]
	})
}

pub fn catalog() -> SkillCatalog {
	serde_json::from_value(resume_json()).unwrap()
}
