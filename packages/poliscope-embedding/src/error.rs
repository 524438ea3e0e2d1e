pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Embedding text contains a non-numeric token {token:?}.")]
	MalformedVector { token: String },
	#[error("Embedding has {actual} dimensions where {expected} were expected.")]
	DimensionMismatch { expected: usize, actual: usize },
	#[error("Embedding text contains no numeric tokens.")]
	EmptyVector,
}
