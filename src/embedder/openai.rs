//! OpenAI-compatible embeddings client

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{embed_in_batches, Embedder};
use crate::config::{Config, EMBED_BATCH_SIZE};
use crate::core::{Embedding, GraphError};
use crate::ui;

/// Blocking client; one request in flight at a time, no retries, no timeout.
pub struct OpenAiEmbedder {
	client: Client,
	endpoint: String,
	model: String,
	batch_size: usize,
}

impl OpenAiEmbedder {
	pub fn new(api_key: &str, base_url: &str, model: &str) -> Result<Self> {
		if api_key.trim().is_empty() {
			return Err(GraphError::MissingCredential(crate::config::API_KEY_ENV).into());
		}
		anyhow::ensure!(!model.trim().is_empty(), "missing embedding model name");

		let mut headers = reqwest::header::HeaderMap::new();
		let auth = format!("Bearer {}", api_key.trim());
		headers.insert(
			AUTHORIZATION,
			HeaderValue::from_str(&auth).context("invalid API key")?,
		);
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

		let client = Client::builder()
			.timeout(None::<Duration>)
			.default_headers(headers)
			.build()
			.context("failed to build embedding HTTP client")?;

		Ok(Self {
			client,
			endpoint: format!("{}/embeddings", base_url.trim_end_matches('/')),
			model: model.to_string(),
			batch_size: EMBED_BATCH_SIZE,
		})
	}

	pub fn from_config(config: &Config) -> Result<Self> {
		Self::new(&config.api_key, &config.base_url, &config.model)
	}

	fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Embedding>> {
		ui::debug(&format!("POST {} ({} inputs)", self.endpoint, inputs.len()));

		let request = EmbeddingRequest {
			model: &self.model,
			input: inputs,
		};
		let resp = self
			.client
			.post(&self.endpoint)
			.json(&request)
			.send()
			.with_context(|| format!("embedding request to {} failed", self.endpoint))?;

		let status = resp.status();
		if !status.is_success() {
			let body = resp
				.text()
				.unwrap_or_else(|_| "<body unavailable>".to_string());
			return Err(GraphError::EmbeddingService {
				status: status.as_u16(),
				body,
			}
			.into());
		}

		let mut parsed: EmbeddingResponse = resp
			.json()
			.context("failed to parse embedding response")?;
		parsed.data.sort_by_key(|entry| entry.index);

		Ok(parsed
			.data
			.into_iter()
			.map(|entry| Embedding::new(entry.embedding))
			.collect())
	}
}

impl Embedder for OpenAiEmbedder {
	fn model(&self) -> &str {
		&self.model
	}

	fn embed(&self, texts: &[String]) -> Result<Vec<Embedding>> {
		embed_in_batches(texts, self.batch_size, |chunk| self.embed_batch(chunk))
	}
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
	model: &'a str,
	input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
	data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
	embedding: Vec<f32>,
	#[serde(default)]
	index: usize,
}
