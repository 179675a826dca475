use rand::TryRngCore;

use crate::error::GenerateError;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Draws a uniform index in `[0, bound)` from a fallible entropy source.
///
/// Rejection sampling over a power-of-two mask keeps the draw unbiased.
/// A failing source is reported as `GenerateError::RandomSource` and left
/// to the caller; the process keeps running.
///
/// # Notes
/// - `bound` must be positive.
/// - A single-candidate range consumes no entropy.
pub(crate) fn random_range<R: TryRngCore>(rng: &mut R, bound: usize) -> Result<usize, GenerateError> {
	debug_assert!(bound > 0, "random_range needs a non-empty range");
	if bound <= 1 {
		return Ok(0);
	}

	let mask = (bound as u64).next_power_of_two() - 1;
	loop {
		let value = rng
			.try_next_u64()
			.map_err(|e| GenerateError::RandomSource(e.to_string()))?
			& mask;
		if (value as usize) < bound {
			return Ok(value as usize);
		}
	}
}

/// Picks a uniform element of a non-empty slice.
///
/// Every element is a candidate, the last one included.
pub(crate) fn random_choice<'a, R: TryRngCore, T>(
	rng: &mut R,
	items: &'a [T],
) -> Result<&'a T, GenerateError> {
	Ok(&items[random_range(rng, items.len())?])
}

/// Draws one decimal digit character, uniform over `0..=9`.
pub(crate) fn random_digit<R: TryRngCore>(rng: &mut R) -> Result<char, GenerateError> {
	Ok(*random_choice(rng, &DIGITS)?)
}


#[cfg(test)]
mod tests {
	use super::testing::{FailRng, ScriptRng};
	use super::*;

	#[test]
	fn rejects_masked_values_outside_the_range() {
		// Mask for bound 11 is 15: 15 is rejected, 3 is kept.
		let mut rng = ScriptRng::new(vec![15, 3]);
		assert_eq!(random_range(&mut rng, 11).unwrap(), 3);
	}

	#[test]
	fn single_candidate_consumes_no_entropy() {
		let mut rng = ScriptRng::new(vec![]);
		assert_eq!(random_range(&mut rng, 1).unwrap(), 0);
	}

	#[test]
	fn last_element_is_reachable() {
		let mut rng = ScriptRng::new(vec![3]);
		assert_eq!(*random_choice(&mut rng, &[10, 20, 30, 40]).unwrap(), 40);
	}

	#[test]
	fn digits_cover_zero_to_nine() {
		let mut rng = ScriptRng::new(vec![0]);
		assert_eq!(random_digit(&mut rng).unwrap(), '0');
		let mut rng = ScriptRng::new(vec![9]);
		assert_eq!(random_digit(&mut rng).unwrap(), '9');
	}

	#[test]
	fn source_failures_are_propagated() {
		let mut rng = FailRng;
		assert!(matches!(
			random_range(&mut rng, 11),
			Err(GenerateError::RandomSource(_))
		));
	}
}
