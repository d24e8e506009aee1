use crate::{GymlogError, Unit};

/// Settings applied while interpreting a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
	/// Unit of a weight written without `kg` or `lbs`.
	pub default_weight_unit: Unit,
}

impl Config {
	pub fn new(default_weight_unit: Unit) -> Self { Self { default_weight_unit } }

	/// Build from a unit name, anything but `kg` or `lbs` is rejected.
	pub fn from_unit_name(name: &str) -> Result<Self, GymlogError> { Ok(Self::new(name.parse()?)) }

	pub fn with_weight_unit(mut self, unit: Unit) -> Self {
		self.default_weight_unit = unit;
		self
	}
}
