mod error;

pub use error::{Error, Result};

/// Decodes free-form embedding text into fixed-length vectors.
///
/// Published disclosure dumps render vectors inconsistently: plain
/// whitespace-separated numbers, comma-separated lists, with or without
/// surrounding brackets. The decoder accepts all of those. The first
/// successful decode pins the corpus dimensionality unless one was
/// configured up front.
#[derive(Clone, Debug, Default)]
pub struct VectorDecoder {
	dimensions: Option<usize>,
}
impl VectorDecoder {
	pub fn new() -> Self {
		Self { dimensions: None }
	}

	pub fn with_dimensions(dimensions: usize) -> Self {
		Self { dimensions: Some(dimensions) }
	}

	pub fn dimensions(&self) -> Option<usize> {
		self.dimensions
	}

	pub fn decode(&mut self, text: &str) -> Result<Vec<f32>> {
		let mut values = Vec::new();

		for token in text.split(|c: char| c.is_whitespace() || c == ',') {
			let token = token.trim_matches(|c| c == '[' || c == ']');

			if token.is_empty() {
				continue;
			}

			let value = token
				.parse::<f32>()
				.map_err(|_| Error::MalformedVector { token: token.to_string() })?;

			values.push(value);
		}

		if values.is_empty() {
			return Err(Error::EmptyVector);
		}

		match self.dimensions {
			Some(expected) if expected != values.len() =>
				Err(Error::DimensionMismatch { expected, actual: values.len() }),
			Some(_) => Ok(values),
			None => {
				self.dimensions = Some(values.len());

				Ok(values)
			},
		}
	}
}

pub fn cosine_similarity(lhs: &[f32], rhs: &[f32]) -> f32 {
	if lhs.is_empty() || lhs.len() != rhs.len() {
		return 0.0;
	}

	let mut dot = 0.0_f32;
	let mut lhs_norm = 0.0_f32;
	let mut rhs_norm = 0.0_f32;

	for (l, r) in lhs.iter().zip(rhs.iter()) {
		dot += l * r;
		lhs_norm += l * l;
		rhs_norm += r * r;
	}

	if lhs_norm <= f32::EPSILON || rhs_norm <= f32::EPSILON {
		return 0.0;
	}

	(dot / (lhs_norm.sqrt() * rhs_norm.sqrt())).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_whitespace_separated_text() {
		let mut decoder = VectorDecoder::new();
		let vector = decoder.decode("0.1 0.2 -0.3").expect("Failed to decode vector.");

		assert_eq!(vector, vec![0.1, 0.2, -0.3]);
		assert_eq!(decoder.dimensions(), Some(3));
	}

	#[test]
	fn decodes_bracketed_and_comma_separated_text() {
		let mut decoder = VectorDecoder::new();
		let vector =
			decoder.decode("[ 0.5,\n -1.25e-1, 2.0 ]").expect("Failed to decode vector.");

		assert_eq!(vector, vec![0.5, -0.125, 2.0]);
	}

	#[test]
	fn rejects_non_numeric_tokens() {
		let mut decoder = VectorDecoder::new();
		let err = decoder.decode("0.1abc 0.2").expect_err("Expected a malformed vector error.");

		assert!(
			matches!(&err, Error::MalformedVector { token } if token == "0.1abc"),
			"Unexpected error: {err}"
		);
	}

	#[test]
	fn rejects_text_without_numeric_tokens() {
		let mut decoder = VectorDecoder::new();

		assert!(matches!(decoder.decode("  [] "), Err(Error::EmptyVector)));
	}

	#[test]
	fn first_decode_pins_corpus_dimensionality() {
		let mut decoder = VectorDecoder::new();

		decoder.decode("0.1 0.2 0.3").expect("Failed to decode vector.");

		let err = decoder.decode("0.1 0.2").expect_err("Expected a dimension mismatch error.");

		assert!(
			matches!(err, Error::DimensionMismatch { expected: 3, actual: 2 }),
			"Unexpected error: {err}"
		);
	}

	#[test]
	fn configured_dimensionality_is_enforced() {
		let mut decoder = VectorDecoder::with_dimensions(2);

		assert!(decoder.decode("1.0 2.0").is_ok());
		assert!(matches!(
			decoder.decode("1.0 2.0 3.0"),
			Err(Error::DimensionMismatch { expected: 2, actual: 3 })
		));
	}

	#[test]
	fn self_similarity_is_one() {
		let vector = [0.3_f32, -0.7, 0.2];

		assert!((cosine_similarity(&vector, &vector) - 1.0).abs() < 1e-6);
	}

	#[test]
	fn zero_norm_vectors_score_zero() {
		assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.5, 0.5]), 0.0);
		assert_eq!(cosine_similarity(&[0.5, 0.5], &[0.0, 0.0]), 0.0);
	}

	#[test]
	fn mismatched_lengths_score_zero() {
		assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]), 0.0);
	}

	#[test]
	fn opposite_vectors_score_negative_one() {
		assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-6);
	}
}
