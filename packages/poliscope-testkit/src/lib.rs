//! Fixture builders for package tests. Every builder returns a fully
//! populated row with a decodable three-dimensional embedding; tests tweak
//! the fields they care about.

use time::Date;
use uuid::Uuid;

use poliscope_domain::{
	Bill, CommitteeAssignment, Hearing, RelatedBill, Statement, SubcommitteeAssignment,
	TradeKind, Transaction, TravelRecord,
};

pub const DEFAULT_CONGRESS: u16 = 118;
pub const DEFAULT_EMBEDDING: &str = "1 0 0";

pub fn embedding(values: &[f32]) -> String {
	values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(" ")
}

pub fn transaction(
	member_id: &str,
	ticker: &str,
	kind: TradeKind,
	amount: f64,
	date: Date,
) -> Transaction {
	Transaction {
		uuid: Uuid::new_v4(),
		member_id: member_id.to_string(),
		congress: DEFAULT_CONGRESS,
		ticker: ticker.to_string(),
		kind,
		amount,
		date,
		embedding: DEFAULT_EMBEDDING.to_string(),
	}
}

pub fn committee_assignment(
	member_id: &str,
	congress: u16,
	committee_id: &str,
	start_date: Date,
) -> CommitteeAssignment {
	CommitteeAssignment {
		member_id: member_id.to_string(),
		congress,
		committee_id: committee_id.to_string(),
		committee_name: format!("Committee {committee_id}"),
		chamber: "house".to_string(),
		start_date,
		embedding: DEFAULT_EMBEDDING.to_string(),
	}
}

pub fn subcommittee_assignment(
	member_id: &str,
	congress: u16,
	subcommittee_id: &str,
	start_date: Date,
) -> SubcommitteeAssignment {
	SubcommitteeAssignment {
		member_id: member_id.to_string(),
		congress,
		subcommittee_id: subcommittee_id.to_string(),
		subcommittee_name: format!("Subcommittee {subcommittee_id}"),
		parent_committee_id: "HSAG".to_string(),
		start_date,
		embedding: DEFAULT_EMBEDDING.to_string(),
	}
}

pub fn hearing(committee_id: &str, congress: u16, date: Date) -> Hearing {
	Hearing {
		committee_id: committee_id.to_string(),
		congress,
		title: format!("Hearing of {committee_id}"),
		date,
		embedding: DEFAULT_EMBEDDING.to_string(),
	}
}

pub fn bill(member_id: &str, congress: u16, bill_id: &str, introduced_date: Date) -> Bill {
	Bill {
		member_id: member_id.to_string(),
		congress,
		bill_id: bill_id.to_string(),
		title: format!("Bill {bill_id}"),
		summary: String::new(),
		introduced_date,
		embedding: DEFAULT_EMBEDDING.to_string(),
	}
}

pub fn related_bill(member_id: &str, congress: u16, related_bill_id: &str, date: Date) -> RelatedBill {
	RelatedBill {
		member_id: member_id.to_string(),
		congress,
		bill_id: "hr-1".to_string(),
		related_bill_id: related_bill_id.to_string(),
		title: format!("Related bill {related_bill_id}"),
		date,
		embedding: DEFAULT_EMBEDDING.to_string(),
	}
}

pub fn travel(member_id: &str, congress: u16, departure_date: Date) -> TravelRecord {
	TravelRecord {
		member_id: member_id.to_string(),
		congress,
		destination: "Geneva".to_string(),
		sponsor: "Example Foundation".to_string(),
		departure_date,
		embedding: DEFAULT_EMBEDDING.to_string(),
	}
}

pub fn statement(member_id: &str, congress: u16, date: Date) -> Statement {
	Statement {
		member_id: member_id.to_string(),
		congress,
		title: "Floor statement".to_string(),
		statement_kind: "floor".to_string(),
		date,
		embedding: DEFAULT_EMBEDDING.to_string(),
	}
}
