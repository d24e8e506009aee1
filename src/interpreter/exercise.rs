use std::{fmt::Display, str::FromStr};

use crate::GymlogError;

/// Weight unit, no conversion between the two is ever done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
	#[default]
	Metric,
	Imperial,
}

impl Unit {
	pub fn as_str(&self) -> &'static str {
		match self {
			Unit::Metric => "kg",
			Unit::Imperial => "lbs",
		}
	}
}

impl Display for Unit {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Unit {
	type Err = GymlogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"kg" => Ok(Unit::Metric),
			"lbs" => Ok(Unit::Imperial),
			_ => Err(GymlogError::InvalidUnit(s.to_string())),
		}
	}
}

/// Load of an exercise. A value of `0` means no weight was given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Weight {
	pub value: f64,
	pub unit:  Unit,
}

impl Weight {
	pub fn new(value: f64, unit: Unit) -> Self { Self { value, unit } }

	pub fn is_unset(&self) -> bool { self.value == 0.0 }
}

impl Display for Weight {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}{}", self.value, self.unit) }
}

/// One exercise at one weight. The same name appears once per weight clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
	pub name:   String,
	pub weight: Weight,
	/// Repetitions per set, empty when none were given.
	pub reps:   Vec<u32>,
}

impl Exercise {
	pub fn new(name: impl Into<String>, weight: Weight, reps: Vec<u32>) -> Self {
		Self { name: name.into(), weight, reps }
	}
}

impl Display for Exercise {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name)?;
		if !self.weight.is_unset() {
			write!(f, " {}", self.weight)?;
		}
		if !self.reps.is_empty() {
			let reps = self.reps.iter().map(u32::to_string).collect::<Vec<_>>().join("/");
			write!(f, " {reps}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unit_names() {
		assert_eq!("kg".parse::<Unit>().ok(), Some(Unit::Metric));
		assert_eq!("lbs".parse::<Unit>().ok(), Some(Unit::Imperial));
		assert!(matches!("KG".parse::<Unit>(), Err(GymlogError::InvalidUnit(s)) if s == "KG"));
		assert!("".parse::<Unit>().is_err());
		assert_eq!(Unit::default(), Unit::Metric);
	}

	#[test]
	fn display_exercise() {
		let bench = Exercise::new("Bench Press", Weight::new(87.5, Unit::Imperial), vec![5, 5, 5]);
		assert_eq!(bench.to_string(), "Bench Press 87.5lbs 5/5/5");

		let plank = Exercise::new("Plank", Weight::default(), vec![]);
		assert_eq!(plank.to_string(), "Plank");

		let dips = Exercise::new("Dips", Weight::default(), vec![12, 10]);
		assert_eq!(dips.to_string(), "Dips 12/10");

		assert_eq!(Weight::new(90.0, Unit::Metric).to_string(), "90kg");
	}
}
