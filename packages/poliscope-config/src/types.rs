use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub data: Data,
	pub embedding: Embedding,
	pub report: Report,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Data {
	/// Directory holding one JSON array file per table.
	pub dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Embedding {
	/// Optional. When unset, the dimensionality is learned from the first
	/// decoded embedding of each scoring call.
	pub dimensions: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct Report {
	#[serde(default = "default_top_k")]
	pub top_k: u32,
}

fn default_top_k() -> u32 {
	10
}
