pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0}")]
	Message(String),
	#[error(transparent)]
	Config(#[from] poliscope_config::Error),
	#[error(transparent)]
	Engine(#[from] poliscope_engine::Error),
	#[error(transparent)]
	Repository(#[from] poliscope_repository::Error),
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
}
