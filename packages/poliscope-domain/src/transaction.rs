use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeKind {
	Purchase,
	Sale,
	Exchange,
}
impl TradeKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Purchase => "purchase",
			Self::Sale => "sale",
			Self::Exchange => "exchange",
		}
	}
}

/// One disclosed securities transaction. The embedding column is the raw
/// vector text as published; it is decoded on demand, never at load.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Transaction {
	pub uuid: Uuid,
	pub member_id: String,
	pub congress: u16,
	pub ticker: String,
	pub kind: TradeKind,
	pub amount: f64,
	#[serde(with = "crate::date_serde")]
	pub date: Date,
	pub embedding: String,
}
impl Transaction {
	/// Purchases add, sales subtract. Exchanges carry no usable sign or
	/// magnitude and are excluded from position arithmetic.
	pub fn signed_amount(&self) -> Option<f64> {
		match self.kind {
			TradeKind::Purchase => Some(self.amount),
			TradeKind::Sale => Some(-self.amount),
			TradeKind::Exchange => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use time::macros::date;
	use uuid::Uuid;

	use super::*;

	fn transaction(kind: TradeKind, amount: f64) -> Transaction {
		Transaction {
			uuid: Uuid::new_v4(),
			member_id: "M000001".to_string(),
			congress: 118,
			ticker: "ACME".to_string(),
			kind,
			amount,
			date: date!(2023 - 01 - 10),
			embedding: "0.1 0.2".to_string(),
		}
	}

	#[test]
	fn signed_amount_follows_trade_kind() {
		assert_eq!(transaction(TradeKind::Purchase, 100.0).signed_amount(), Some(100.0));
		assert_eq!(transaction(TradeKind::Sale, 40.0).signed_amount(), Some(-40.0));
		assert_eq!(transaction(TradeKind::Exchange, 500.0).signed_amount(), None);
	}

	#[test]
	fn trade_kind_uses_snake_case() {
		let parsed: TradeKind =
			serde_json::from_str("\"purchase\"").expect("Failed to parse trade kind.");

		assert_eq!(parsed, TradeKind::Purchase);
		assert_eq!(serde_json::to_string(&TradeKind::Sale).unwrap(), "\"sale\"");
	}

	#[test]
	fn transaction_date_round_trips() {
		let tx = transaction(TradeKind::Purchase, 1.0);
		let json = serde_json::to_string(&tx).expect("Failed to serialize transaction.");

		assert!(json.contains("\"2023-01-10\""), "Unexpected payload: {json}");

		let parsed: Transaction =
			serde_json::from_str(&json).expect("Failed to parse transaction.");

		assert_eq!(parsed.date, tx.date);
	}
}
