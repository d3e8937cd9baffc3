//! Reusable value validators for config variables

use crate::prelude::*;

use super::types::ConfigValue;

/// Lower bound for integer variables
pub fn min_value(min: i64) -> impl Fn(&ConfigValue) -> PlResult<()> + Send + Sync + 'static {
	move |value| match value {
		ConfigValue::Int(i) if *i >= min => Ok(()),
		ConfigValue::Int(i) => {
			Err(Error::ValidationError(format!("Value must be at least {}, got {}", min, i)))
		}
		v => Err(Error::ValidationError(format!("Expected an integer, got {}", v.type_name()))),
	}
}

/// Restrict a string variable to a fixed set of accepted values
pub fn one_of(
	allowed: &'static [&'static str],
) -> impl Fn(&ConfigValue) -> PlResult<()> + Send + Sync + 'static {
	move |value| match value {
		ConfigValue::String(s) if allowed.contains(&s.as_str()) => Ok(()),
		ConfigValue::String(s) => Err(Error::ValidationError(format!(
			"'{}' is not one of: {}",
			s,
			allowed.join(", ")
		))),
		v => Err(Error::ValidationError(format!("Expected a string, got {}", v.type_name()))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn min_value_accepts_boundary() {
		let validator = min_value(40);
		assert!(validator(&ConfigValue::Int(40)).is_ok());
		assert!(validator(&ConfigValue::Int(90)).is_ok());
	}

	#[test]
	fn min_value_rejects_below_boundary() {
		let validator = min_value(0);
		assert!(matches!(validator(&ConfigValue::Int(-1)), Err(Error::ValidationError(_))));
	}

	#[test]
	fn min_value_rejects_non_integers() {
		let validator = min_value(1);
		assert!(matches!(
			validator(&ConfigValue::String("8".into())),
			Err(Error::ValidationError(_))
		));
	}

	#[test]
	fn one_of_accepts_listed_values() {
		let validator = one_of(&["simple_majority", "two_thirds"]);
		assert!(validator(&ConfigValue::String("two_thirds".into())).is_ok());
	}

	#[test]
	fn one_of_rejects_unlisted_values() {
		let validator = one_of(&["simple_majority"]);
		assert!(matches!(
			validator(&ConfigValue::String("plurality".into())),
			Err(Error::ValidationError(_))
		));
	}
}

// vim: ts=4
