mod error;

pub use error::{Error, Result};

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use poliscope_embedding::VectorDecoder;
use poliscope_engine::CategoryOutcome;
use poliscope_repository::DataSet;

#[derive(Debug, Parser)]
#[command(
	version = poliscope_cli::VERSION,
	rename_all = "kebab",
	styles = poliscope_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Print a legislator's per-ticker cumulative position series.
	Positions {
		#[arg(long, value_name = "MEMBER_ID")]
		member: String,
		#[arg(long, value_name = "TICKER")]
		ticker: Option<String>,
	},
	/// Score one disclosed transaction against the legislator's
	/// congressional activity.
	Relevance {
		#[arg(long, value_name = "UUID")]
		transaction: Uuid,
	},
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = poliscope_config::load(&args.config)?;

	init_tracing(&config);

	let data = poliscope_repository::load_dir(&config.data.dir)?;

	tracing::info!(
		transactions = data.transactions.len(),
		dir = %config.data.dir.display(),
		"Loaded tables."
	);

	match args.command {
		Command::Positions { member, ticker } => positions(&data, &member, ticker.as_deref())?,
		Command::Relevance { transaction } => relevance(&config, &data, transaction)?,
	}

	Ok(())
}

fn init_tracing(config: &poliscope_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn positions(data: &DataSet, member: &str, ticker: Option<&str>) -> Result<()> {
	let mut series = poliscope_engine::compute_positions(&data.transactions, member);

	if series.is_empty() {
		return Err(Error::Message(format!(
			"No purchase or sale rows disclosed by member {member}."
		)));
	}
	if let Some(ticker) = ticker {
		series.retain(|key, _| key.as_str() == ticker);

		if series.is_empty() {
			return Err(Error::Message(format!(
				"Member {member} disclosed no purchase or sale rows for ticker {ticker}."
			)));
		}
	}

	let holdings = poliscope_engine::current_holdings(&series);
	let payload = json!({
		"member_id": member,
		"positions": series,
		"current_holdings": holdings,
	});

	println!("{}", serde_json::to_string_pretty(&payload)?);

	Ok(())
}

fn relevance(config: &poliscope_config::Config, data: &DataSet, uuid: Uuid) -> Result<()> {
	let Some(transaction) = data.transactions.iter().find(|tx| tx.uuid == uuid) else {
		return Err(Error::Message(format!("Transaction {uuid} was not found.")));
	};
	let decoder = match config.embedding.dimensions {
		Some(dimensions) => VectorDecoder::with_dimensions(dimensions as usize),
		None => VectorDecoder::new(),
	};
	let mut report = poliscope_engine::score_relevance_with(
		transaction,
		&transaction.member_id,
		transaction.congress,
		&data.activities,
		decoder,
	)?;
	let top_k = config.report.top_k as usize;

	truncate(&mut report.committee_assignments, top_k);
	truncate(&mut report.subcommittee_assignments, top_k);
	truncate(&mut report.hearings, top_k);
	truncate(&mut report.bills, top_k);
	truncate(&mut report.related_bills, top_k);
	truncate(&mut report.travel, top_k);
	truncate(&mut report.statements, top_k);

	let payload = json!({
		"transaction": transaction,
		"report": report,
	});

	println!("{}", serde_json::to_string_pretty(&payload)?);

	Ok(())
}

fn truncate<R>(outcome: &mut CategoryOutcome<R>, top_k: usize) {
	if let CategoryOutcome::Ranked { records, .. } = outcome {
		records.truncate(top_k);
	}
}
