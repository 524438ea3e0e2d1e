pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read table file at {path:?}.")]
	ReadTable { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse table file at {path:?}.")]
	ParseTable { path: std::path::PathBuf, source: serde_json::Error },
	#[error("{message}")]
	Validation { message: String },
}
