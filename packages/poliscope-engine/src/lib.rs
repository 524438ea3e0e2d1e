mod error;
mod positions;
mod relevance;

pub use error::{Error, Result};
pub use positions::{PortfolioPosition, compute_positions, current_holdings};
pub use relevance::{
	CategoryOutcome, RelevanceReport, ScoredRecord, score_relevance, score_relevance_with,
};
