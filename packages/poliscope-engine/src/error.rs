pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Transaction {uuid} has no decodable embedding.")]
	MissingQueryEmbedding { uuid: uuid::Uuid, source: poliscope_embedding::Error },
}
