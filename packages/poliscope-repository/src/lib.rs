mod error;

pub use error::{Error, Result};

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use poliscope_domain::{
	Bill, CommitteeAssignment, Hearing, RelatedBill, Statement, SubcommitteeAssignment,
	Transaction, TravelRecord,
};

pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const COMMITTEE_ASSIGNMENTS_FILE: &str = "committee_assignments.json";
pub const SUBCOMMITTEE_ASSIGNMENTS_FILE: &str = "subcommittee_assignments.json";
pub const HEARINGS_FILE: &str = "hearings.json";
pub const BILLS_FILE: &str = "bills.json";
pub const RELATED_BILLS_FILE: &str = "related_bills.json";
pub const TRAVEL_FILE: &str = "travel.json";
pub const STATEMENTS_FILE: &str = "statements.json";

/// The in-memory activity tables. Read-only after load; the scoring engine
/// borrows it and never mutates it.
#[derive(Clone, Debug, Default)]
pub struct ActivityRepository {
	pub committee_assignments: Vec<CommitteeAssignment>,
	pub subcommittee_assignments: Vec<SubcommitteeAssignment>,
	pub hearings: Vec<Hearing>,
	pub bills: Vec<Bill>,
	pub related_bills: Vec<RelatedBill>,
	pub travel: Vec<TravelRecord>,
	pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, Default)]
pub struct DataSet {
	pub transactions: Vec<Transaction>,
	pub activities: ActivityRepository,
}

/// Loads every table from `dir`, one JSON array per file, and validates the
/// typed rows once at the boundary.
pub fn load_dir(dir: &Path) -> Result<DataSet> {
	let data = DataSet {
		transactions: read_table(dir, TRANSACTIONS_FILE)?,
		activities: ActivityRepository {
			committee_assignments: read_table(dir, COMMITTEE_ASSIGNMENTS_FILE)?,
			subcommittee_assignments: read_table(dir, SUBCOMMITTEE_ASSIGNMENTS_FILE)?,
			hearings: read_table(dir, HEARINGS_FILE)?,
			bills: read_table(dir, BILLS_FILE)?,
			related_bills: read_table(dir, RELATED_BILLS_FILE)?,
			travel: read_table(dir, TRAVEL_FILE)?,
			statements: read_table(dir, STATEMENTS_FILE)?,
		},
	};

	validate(&data)?;

	Ok(data)
}

fn read_table<T>(dir: &Path, file: &str) -> Result<Vec<T>>
where
	T: DeserializeOwned,
{
	let path = dir.join(file);
	let raw = fs::read_to_string(&path)
		.map_err(|err| Error::ReadTable { path: path.clone(), source: err })?;

	serde_json::from_str(&raw).map_err(|err| Error::ParseTable { path, source: err })
}

pub fn validate(data: &DataSet) -> Result<()> {
	for (row, tx) in data.transactions.iter().enumerate() {
		non_blank("transactions", row, "member_id", &tx.member_id)?;
		non_blank("transactions", row, "ticker", &tx.ticker)?;
		non_blank("transactions", row, "embedding", &tx.embedding)?;

		if !tx.amount.is_finite() {
			return Err(Error::Validation {
				message: format!("transactions[{row}].amount must be a finite number."),
			});
		}
		if tx.amount < 0.0 {
			return Err(Error::Validation {
				message: format!("transactions[{row}].amount must be zero or greater."),
			});
		}
	}

	for (row, assignment) in data.activities.committee_assignments.iter().enumerate() {
		non_blank("committee_assignments", row, "member_id", &assignment.member_id)?;
		non_blank("committee_assignments", row, "committee_id", &assignment.committee_id)?;
		non_blank("committee_assignments", row, "embedding", &assignment.embedding)?;
	}

	for (row, assignment) in data.activities.subcommittee_assignments.iter().enumerate() {
		non_blank("subcommittee_assignments", row, "member_id", &assignment.member_id)?;
		non_blank("subcommittee_assignments", row, "subcommittee_id", &assignment.subcommittee_id)?;
		non_blank("subcommittee_assignments", row, "embedding", &assignment.embedding)?;
	}

	for (row, hearing) in data.activities.hearings.iter().enumerate() {
		non_blank("hearings", row, "committee_id", &hearing.committee_id)?;
		non_blank("hearings", row, "embedding", &hearing.embedding)?;
	}

	for (row, bill) in data.activities.bills.iter().enumerate() {
		non_blank("bills", row, "member_id", &bill.member_id)?;
		non_blank("bills", row, "bill_id", &bill.bill_id)?;
		non_blank("bills", row, "embedding", &bill.embedding)?;
	}

	for (row, related) in data.activities.related_bills.iter().enumerate() {
		non_blank("related_bills", row, "member_id", &related.member_id)?;
		non_blank("related_bills", row, "related_bill_id", &related.related_bill_id)?;
		non_blank("related_bills", row, "embedding", &related.embedding)?;
	}

	for (row, trip) in data.activities.travel.iter().enumerate() {
		non_blank("travel", row, "member_id", &trip.member_id)?;
		non_blank("travel", row, "embedding", &trip.embedding)?;
	}

	for (row, statement) in data.activities.statements.iter().enumerate() {
		non_blank("statements", row, "member_id", &statement.member_id)?;
		non_blank("statements", row, "embedding", &statement.embedding)?;
	}

	Ok(())
}

fn non_blank(table: &str, row: usize, field: &str, value: &str) -> Result<()> {
	if value.trim().is_empty() {
		return Err(Error::Validation {
			message: format!("{table}[{row}].{field} must be non-empty."),
		});
	}

	Ok(())
}
