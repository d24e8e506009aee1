//! Repetition notations.
//!
//! - Multiplier `N*M`: `M` repetitions for each of `N` sets, `3*10` is `10/10/10`.
//! - Enumeration `N/N/N`: one count per set, a trailing `/` is allowed.
//!
//! The multiplier is tried first. Text in neither notation yields no reps.
//! The whole text has to match, so `5//5` and `3*10*2` are rejected rather
//! than read as `5/5` or `3*10`.

use crate::error::interpreter::InterpretErrorType;

/// Upper bound on the multiplier of `N*M`.
pub const MAX_SETS: u32 = 1000;

/// Parse the concatenated text of a reps clause. `None` leaves the reps of the
/// current exercise untouched.
pub(crate) fn parse_reps(text: &str, problems: &mut Vec<InterpretErrorType>) -> Option<Vec<u32>> {
	if let Some((sets, count)) = multiplier_format(text) {
		multiplier(sets, count, problems)
	} else if is_enumeration_format(text) {
		Some(enumeration(text, problems))
	} else {
		problems.push(InterpretErrorType::UnrecognizedReps(text.to_string()));
		None
	}
}

fn is_digits(s: &str) -> bool { !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) }

/// Split `N*M` into its digit runs.
fn multiplier_format(text: &str) -> Option<(&str, &str)> {
	text.split_once('*').filter(|(sets, count)| is_digits(sets) && is_digits(count))
}

fn is_enumeration_format(text: &str) -> bool {
	let text = text.strip_suffix('/').unwrap_or(text);
	text.split('/').all(is_digits)
}

fn multiplier(sets: &str, count: &str, problems: &mut Vec<InterpretErrorType>) -> Option<Vec<u32>> {
	let sets = parse_field(sets, problems)?;
	let count = parse_field(count, problems)?;
	if sets > MAX_SETS {
		problems.push(InterpretErrorType::TooManySets(sets));
		return None;
	}
	Some(vec![count; sets as usize])
}

fn enumeration(text: &str, problems: &mut Vec<InterpretErrorType>) -> Vec<u32> {
	text.split('/').filter(|field| !field.is_empty()).filter_map(|field| parse_field(field, problems)).collect()
}

fn parse_field(field: &str, problems: &mut Vec<InterpretErrorType>) -> Option<u32> {
	field.parse().map_err(|_| problems.push(InterpretErrorType::InvalidRepField(field.to_string()))).ok()
}
