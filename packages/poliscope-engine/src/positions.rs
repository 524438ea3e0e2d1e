use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;

use poliscope_domain::Transaction;

/// One row of a per-ticker cumulative series: the legislator's running
/// signed position in the ticker as of the disclosed transaction date.
#[derive(Clone, Debug, Serialize)]
pub struct PortfolioPosition {
	pub member_id: String,
	pub ticker: String,
	#[serde(with = "poliscope_domain::date_serde")]
	pub date: Date,
	pub cumulative_amount: f64,
}

/// Rebuilds the legislator's position series from their disclosed
/// purchases and sales. Exchanges are dropped entirely. Rows are sorted
/// ascending by date with a stable sort, so same-day rows keep the order
/// in which they were disclosed.
///
/// No matching rows is an empty map, never an error.
pub fn compute_positions(
	transactions: &[Transaction],
	member_id: &str,
) -> BTreeMap<String, Vec<PortfolioPosition>> {
	let mut rows = transactions
		.iter()
		.filter(|tx| tx.member_id == member_id && tx.signed_amount().is_some())
		.collect::<Vec<_>>();

	rows.sort_by_key(|tx| tx.date);

	let mut series = BTreeMap::<String, Vec<PortfolioPosition>>::new();

	for tx in rows {
		let Some(signed) = tx.signed_amount() else {
			continue;
		};
		let points = series.entry(tx.ticker.clone()).or_default();
		let running = points.last().map(|point| point.cumulative_amount).unwrap_or(0.0);

		points.push(PortfolioPosition {
			member_id: tx.member_id.clone(),
			ticker: tx.ticker.clone(),
			date: tx.date,
			cumulative_amount: running + signed,
		});
	}

	series
}

/// The last row of each ticker series: holdings as of the latest disclosed
/// transaction. Trade-to-disclosure delay is not modeled, so this is an
/// approximation of current holdings, not a statement of them.
pub fn current_holdings(
	positions: &BTreeMap<String, Vec<PortfolioPosition>>,
) -> BTreeMap<String, f64> {
	positions
		.iter()
		.filter_map(|(ticker, points)| {
			points.last().map(|point| (ticker.clone(), point.cumulative_amount))
		})
		.collect()
}
