use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
	CommitteeAssignments,
	SubcommitteeAssignments,
	Hearings,
	Bills,
	RelatedBills,
	Travel,
	Statements,
}
impl ActivityCategory {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::CommitteeAssignments => "committee_assignments",
			Self::SubcommitteeAssignments => "subcommittee_assignments",
			Self::Hearings => "hearings",
			Self::Bills => "bills",
			Self::RelatedBills => "related_bills",
			Self::Travel => "travel",
			Self::Statements => "statements",
		}
	}
}

/// Shared surface of the seven activity tables. Identity filtering stays
/// category-specific (hearings are keyed by committee, not member), so it is
/// not part of this trait.
pub trait ActivityRecord {
	const CATEGORY: ActivityCategory;

	fn date(&self) -> Date;
	fn congress(&self) -> u16;
	fn embedding(&self) -> &str;
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommitteeAssignment {
	pub member_id: String,
	pub congress: u16,
	pub committee_id: String,
	pub committee_name: String,
	pub chamber: String,
	#[serde(with = "crate::date_serde")]
	pub start_date: Date,
	pub embedding: String,
}
impl ActivityRecord for CommitteeAssignment {
	const CATEGORY: ActivityCategory = ActivityCategory::CommitteeAssignments;

	fn date(&self) -> Date {
		self.start_date
	}

	fn congress(&self) -> u16 {
		self.congress
	}

	fn embedding(&self) -> &str {
		&self.embedding
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SubcommitteeAssignment {
	pub member_id: String,
	pub congress: u16,
	pub subcommittee_id: String,
	pub subcommittee_name: String,
	pub parent_committee_id: String,
	#[serde(with = "crate::date_serde")]
	pub start_date: Date,
	pub embedding: String,
}
impl ActivityRecord for SubcommitteeAssignment {
	const CATEGORY: ActivityCategory = ActivityCategory::SubcommitteeAssignments;

	fn date(&self) -> Date {
		self.start_date
	}

	fn congress(&self) -> u16 {
		self.congress
	}

	fn embedding(&self) -> &str {
		&self.embedding
	}
}

/// Keyed by committee rather than member; a member's hearings are the
/// hearings of the committees they sit on.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Hearing {
	pub committee_id: String,
	pub congress: u16,
	pub title: String,
	#[serde(with = "crate::date_serde")]
	pub date: Date,
	pub embedding: String,
}
impl ActivityRecord for Hearing {
	const CATEGORY: ActivityCategory = ActivityCategory::Hearings;

	fn date(&self) -> Date {
		self.date
	}

	fn congress(&self) -> u16 {
		self.congress
	}

	fn embedding(&self) -> &str {
		&self.embedding
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Bill {
	pub member_id: String,
	pub congress: u16,
	pub bill_id: String,
	pub title: String,
	pub summary: String,
	#[serde(with = "crate::date_serde")]
	pub introduced_date: Date,
	pub embedding: String,
}
impl ActivityRecord for Bill {
	const CATEGORY: ActivityCategory = ActivityCategory::Bills;

	fn date(&self) -> Date {
		self.introduced_date
	}

	fn congress(&self) -> u16 {
		self.congress
	}

	fn embedding(&self) -> &str {
		&self.embedding
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RelatedBill {
	pub member_id: String,
	pub congress: u16,
	pub bill_id: String,
	pub related_bill_id: String,
	pub title: String,
	#[serde(with = "crate::date_serde")]
	pub date: Date,
	pub embedding: String,
}
impl ActivityRecord for RelatedBill {
	const CATEGORY: ActivityCategory = ActivityCategory::RelatedBills;

	fn date(&self) -> Date {
		self.date
	}

	fn congress(&self) -> u16 {
		self.congress
	}

	fn embedding(&self) -> &str {
		&self.embedding
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TravelRecord {
	pub member_id: String,
	pub congress: u16,
	pub destination: String,
	pub sponsor: String,
	#[serde(with = "crate::date_serde")]
	pub departure_date: Date,
	pub embedding: String,
}
impl ActivityRecord for TravelRecord {
	const CATEGORY: ActivityCategory = ActivityCategory::Travel;

	fn date(&self) -> Date {
		self.departure_date
	}

	fn congress(&self) -> u16 {
		self.congress
	}

	fn embedding(&self) -> &str {
		&self.embedding
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Statement {
	pub member_id: String,
	pub congress: u16,
	pub title: String,
	pub statement_kind: String,
	#[serde(with = "crate::date_serde")]
	pub date: Date,
	pub embedding: String,
}
impl ActivityRecord for Statement {
	const CATEGORY: ActivityCategory = ActivityCategory::Statements;

	fn date(&self) -> Date {
		self.date
	}

	fn congress(&self) -> u16 {
		self.congress
	}

	fn embedding(&self) -> &str {
		&self.embedding
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn category_labels_are_stable() {
		assert_eq!(ActivityCategory::CommitteeAssignments.as_str(), "committee_assignments");
		assert_eq!(ActivityCategory::RelatedBills.as_str(), "related_bills");
	}

	#[test]
	fn hearing_rows_parse_without_member_id() {
		let hearing: Hearing = serde_json::from_str(
			r#"{
				"committee_id": "HSAG",
				"congress": 118,
				"title": "Farm bill oversight",
				"date": "2023-05-02",
				"embedding": "0.1 0.2 0.3"
			}"#,
		)
		.expect("Failed to parse hearing row.");

		assert_eq!(hearing.committee_id, "HSAG");
		assert_eq!(hearing.congress(), 118);
	}
}
