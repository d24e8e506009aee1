#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use gymlog::{Config, Exercise, Gymlog, GymlogError, TokenKind, Unit, Weight};
	use pretty_assertions::assert_eq;

	fn fixture(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name) }

	fn exercise(name: &str, value: f64, unit: Unit, reps: &[u32]) -> Exercise {
		Exercise::new(name, Weight::new(value, unit), reps.to_vec())
	}

	#[test]
	fn test_workout_file() {
		let gymlog = Gymlog::new(Config::new(Unit::Imperial));
		let workout = gymlog.run_file(fixture("workout.log")).unwrap();
		assert_eq!(workout.exercises, vec![
			exercise("Bench Press", 90.0, Unit::Metric, &[5, 5, 5]),
			exercise("Squats", 100.0, Unit::Metric, &[10, 10, 10]),
			exercise("Squats", 140.0, Unit::Imperial, &[10]),
			exercise("Dumbbell-Rows", 20.0, Unit::Imperial, &[8, 8]),
			exercise("Overhead Press", 42.5, Unit::Imperial, &[5, 5, 4]),
			exercise("Pull Ups", 0.0, Unit::Metric, &[10, 8, 6]),
		]);
		assert!(workout.diagnostics.is_empty());
	}

	#[test]
	fn test_missing_file() {
		let result = Gymlog::default().run_file(fixture("missing.log"));
		assert!(matches!(result, Err(GymlogError::InternalError(_))));
	}

	#[test]
	fn test_tokens_of_file() {
		assert!(Gymlog::default().print_tokens(fixture("workout.log")).is_ok());

		let source = std::fs::read_to_string(fixture("workout.log")).unwrap();
		let (tokens, errors) = gymlog::tokenize(&source);
		assert!(errors.is_empty());
		let count = |kind: TokenKind| tokens.iter().filter(|t| t.kind == kind).count();
		assert_eq!(count(TokenKind::Asperand), 5);
		assert_eq!(count(TokenKind::WeightUnit), 3);
		assert_eq!(count(TokenKind::Newline), 5);
		assert_eq!(count(TokenKind::Asterisk), 1);
		assert_eq!(count(TokenKind::ForwardSlash), 8);
		assert_eq!(tokens.last().map(|t| (t.kind, t.line)), Some((TokenKind::EndOfInput, 6)));
		assert_eq!(tokens.iter().map(|t| t.lexeme).collect::<String>(), source);
	}

	#[test]
	fn test_parse_text() {
		let source = "Bench Press @90kg 5/5/5 \n Squats @100kg 3*10 @140lbs 10 \n Dumbbell-Rows @20 8/8/";
		let exercises = gymlog::parse_strict(source, Config::default()).unwrap();
		let lines: Vec<String> = exercises.iter().map(ToString::to_string).collect();
		assert_eq!(lines, vec![
			"Bench Press 90kg 5/5/5",
			"Squats 100kg 10/10/10",
			"Squats 140lbs 10",
			"Dumbbell-Rows 20kg 8/8",
		]);
	}
}
