use std::{cmp::Ordering, collections::HashSet};

use serde::Serialize;
use time::Date;

use poliscope_domain::{
	ActivityRecord, Bill, CommitteeAssignment, Hearing, RelatedBill, Statement,
	SubcommitteeAssignment, Transaction, TravelRecord,
};
use poliscope_embedding::{VectorDecoder, cosine_similarity};
use poliscope_repository::ActivityRepository;

use crate::error::{Error, Result};

#[derive(Clone, Debug, Serialize)]
pub struct ScoredRecord<R> {
	pub record: R,
	pub similarity: f32,
}

/// Outcome of ranking one category. An empty qualifying set is a
/// first-class signal, not an error: "this legislator had no such activity
/// before the trade" is itself a screening result.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CategoryOutcome<R> {
	Ranked { records: Vec<ScoredRecord<R>>, skipped_rows: usize },
	NoQualifyingRecords,
}
impl<R> CategoryOutcome<R> {
	pub fn records(&self) -> Option<&[ScoredRecord<R>]> {
		match self {
			Self::Ranked { records, .. } => Some(records),
			Self::NoQualifyingRecords => None,
		}
	}

	pub fn skipped_rows(&self) -> usize {
		match self {
			Self::Ranked { skipped_rows, .. } => *skipped_rows,
			Self::NoQualifyingRecords => 0,
		}
	}
}

/// Per-category rankings for one transaction. Derived per call, never
/// persisted.
#[derive(Clone, Debug, Serialize)]
pub struct RelevanceReport {
	pub committee_assignments: CategoryOutcome<CommitteeAssignment>,
	pub subcommittee_assignments: CategoryOutcome<SubcommitteeAssignment>,
	pub hearings: CategoryOutcome<Hearing>,
	pub bills: CategoryOutcome<Bill>,
	pub related_bills: CategoryOutcome<RelatedBill>,
	pub travel: CategoryOutcome<TravelRecord>,
	pub statements: CategoryOutcome<Statement>,
}

pub fn score_relevance(
	transaction: &Transaction,
	member_id: &str,
	congress: u16,
	repository: &ActivityRepository,
) -> Result<RelevanceReport> {
	score_relevance_with(transaction, member_id, congress, repository, VectorDecoder::new())
}

/// Scores one transaction against every activity category. The decoder
/// carries the corpus dimensionality; the query embedding is decoded first
/// and a failure there aborts the whole call.
pub fn score_relevance_with(
	transaction: &Transaction,
	member_id: &str,
	congress: u16,
	repository: &ActivityRepository,
	mut decoder: VectorDecoder,
) -> Result<RelevanceReport> {
	let query = decoder
		.decode(&transaction.embedding)
		.map_err(|err| Error::MissingQueryEmbedding { uuid: transaction.uuid, source: err })?;
	let cutoff = transaction.date;
	// Hearings carry no member id; membership is resolved through the
	// legislator's committee assignments for the session.
	let member_committees = repository
		.committee_assignments
		.iter()
		.filter(|assignment| assignment.member_id == member_id && assignment.congress == congress)
		.map(|assignment| assignment.committee_id.as_str())
		.collect::<HashSet<_>>();

	Ok(RelevanceReport {
		committee_assignments: rank_category(
			&repository.committee_assignments,
			|assignment| assignment.member_id == member_id && assignment.congress == congress,
			cutoff,
			&query,
			&mut decoder,
		),
		subcommittee_assignments: rank_category(
			&repository.subcommittee_assignments,
			|assignment| assignment.member_id == member_id && assignment.congress == congress,
			cutoff,
			&query,
			&mut decoder,
		),
		hearings: rank_category(
			&repository.hearings,
			|hearing| {
				member_committees.contains(hearing.committee_id.as_str())
					&& hearing.congress == congress
			},
			cutoff,
			&query,
			&mut decoder,
		),
		bills: rank_category(
			&repository.bills,
			|bill| bill.member_id == member_id && bill.congress == congress,
			cutoff,
			&query,
			&mut decoder,
		),
		related_bills: rank_category(
			&repository.related_bills,
			|related| related.member_id == member_id && related.congress == congress,
			cutoff,
			&query,
			&mut decoder,
		),
		travel: rank_category(
			&repository.travel,
			|trip| trip.member_id == member_id && trip.congress == congress,
			cutoff,
			&query,
			&mut decoder,
		),
		statements: rank_category(
			&repository.statements,
			|statement| statement.member_id == member_id && statement.congress == congress,
			cutoff,
			&query,
			&mut decoder,
		),
	})
}

/// The one filter/score/sort path every category goes through. `keep`
/// carries the category-specific identity test; the date cutoff is uniform.
/// A row whose embedding fails to decode is skipped and counted, never
/// fatal for the category.
fn rank_category<R, F>(
	records: &[R],
	keep: F,
	cutoff: Date,
	query: &[f32],
	decoder: &mut VectorDecoder,
) -> CategoryOutcome<R>
where
	R: ActivityRecord + Clone,
	F: Fn(&R) -> bool,
{
	let qualifying = records
		.iter()
		.enumerate()
		.filter(|(_, record)| keep(record) && record.date() <= cutoff)
		.collect::<Vec<_>>();

	if qualifying.is_empty() {
		return CategoryOutcome::NoQualifyingRecords;
	}

	let mut skipped_rows = 0;
	let mut scored = Vec::with_capacity(qualifying.len());

	for (row, record) in qualifying {
		let vector = match decoder.decode(record.embedding()) {
			Ok(vector) => vector,
			Err(err) => {
				tracing::warn!(
					category = R::CATEGORY.as_str(),
					row,
					error = %err,
					"Skipping a record with an undecodable embedding."
				);

				skipped_rows += 1;

				continue;
			},
		};

		scored.push((
			row,
			ScoredRecord { record: record.clone(), similarity: cosine_similarity(query, &vector) },
		));
	}

	// Descending by similarity; ties fall back to table order so reruns
	// over the same data rank identically.
	scored.sort_by(|(lhs_row, lhs), (rhs_row, rhs)| {
		match rhs.similarity.partial_cmp(&lhs.similarity).unwrap_or(Ordering::Equal) {
			Ordering::Equal => lhs_row.cmp(rhs_row),
			other => other,
		}
	});

	CategoryOutcome::Ranked {
		records: scored.into_iter().map(|(_, record)| record).collect(),
		skipped_rows,
	}
}
