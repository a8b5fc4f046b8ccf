//! Fixed stack taxonomy and nearest-descriptor classification

use anyhow::Result;

use crate::core::{common_dimension, Embedding, StackRef};
use crate::embedder::Embedder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyEntry {
	pub id: &'static str,
	pub label: &'static str,
	pub descriptor: &'static str,
}

impl TaxonomyEntry {
	pub fn stack(&self) -> StackRef {
		StackRef {
			id: self.id.to_string(),
			label: self.label.to_string(),
		}
	}
}

pub const CATALOG: &[TaxonomyEntry] = &[
	TaxonomyEntry {
		id: "data",
		label: "Data Engineering",
		descriptor: "Data pipelines, ETL and ELT, data warehousing, SQL, dbt, orchestration, data modeling and data quality",
	},
	TaxonomyEntry {
		id: "analytics",
		label: "Analytics & BI",
		descriptor: "Dashboards, reporting, business intelligence, statistics, metrics definitions and data visualization",
	},
	TaxonomyEntry {
		id: "cloud",
		label: "Cloud & Infrastructure",
		descriptor: "Cloud platforms such as AWS, GCP and Azure, containers, Kubernetes, CI/CD, infrastructure as code and operations",
	},
	TaxonomyEntry {
		id: "ai",
		label: "AI & Machine Learning",
		descriptor: "Machine learning, large language models, retrieval augmented generation, embeddings, evaluation and MLOps",
	},
	TaxonomyEntry {
		id: "software",
		label: "Software Engineering",
		descriptor: "Application development, APIs, automated testing, Python, TypeScript, web frameworks and version control",
	},
	TaxonomyEntry {
		id: "leadership",
		label: "Domain & Leadership",
		descriptor: "Healthcare quality metrics, stakeholder communication, project leadership, mentoring and documentation",
	},
];

pub fn lookup(id: &str) -> Option<&'static TaxonomyEntry> {
	CATALOG.iter().find(|entry| entry.id.eq_ignore_ascii_case(id))
}

/// Catalog entries paired with their descriptor embeddings
#[derive(Debug, Clone)]
pub struct EmbeddedTaxonomy {
	entries: Vec<(TaxonomyEntry, Embedding)>,
}

impl EmbeddedTaxonomy {
	/// Embeds every descriptor in one pass
	pub fn embed(entries: &[TaxonomyEntry], embedder: &dyn Embedder) -> Result<Self> {
		let texts: Vec<String> = entries.iter().map(|e| e.descriptor.to_string()).collect();
		let embeddings = embedder.embed(&texts)?;
		Ok(Self::from_parts(entries.iter().copied().zip(embeddings).collect()))
	}

	pub fn from_parts(entries: Vec<(TaxonomyEntry, Embedding)>) -> Self {
		Self { entries }
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn dimension(&self) -> Result<usize> {
		let embeddings: Vec<Embedding> = self.entries.iter().map(|(_, e)| e.clone()).collect();
		Ok(common_dimension(&embeddings)?)
	}

	/// Entry with the strictly greatest cosine similarity; the first-listed
	/// entry wins exact ties.
	pub fn nearest(&self, embedding: &Embedding) -> Option<(&TaxonomyEntry, f64)> {
		let mut best: Option<(&TaxonomyEntry, f64)> = None;

		for (entry, descriptor) in &self.entries {
			let similarity = embedding.cosine(descriptor);
			match best {
				Some((_, score)) if similarity <= score => {}
				_ => best = Some((entry, similarity)),
			}
		}

		best
	}
}
