mod activity;
mod transaction;

pub mod date_serde;

pub use activity::{
	ActivityCategory, ActivityRecord, Bill, CommitteeAssignment, Hearing, RelatedBill, Statement,
	SubcommitteeAssignment, TravelRecord,
};
pub use transaction::{TradeKind, Transaction};
