use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{Config, GymlogError, Workout, parse, tokenize};

/// Gymlog runs the parser over files or lines typed at a prompt and prints
/// what it finds.
#[derive(Debug, Default)]
pub struct Gymlog {
	config: Config,
}

impl Gymlog {
	pub fn new(config: Config) -> Self { Self { config } }

	/// Parse a log file, printing one line per exercise.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<Workout, GymlogError> {
		let source = read_source(path.as_ref())?;
		self.run(&source)
	}

	/// Print the tokens of a log file, scan errors go to stderr.
	pub fn print_tokens<P: AsRef<Path>>(&self, path: P) -> Result<(), GymlogError> {
		let source = read_source(path.as_ref())?;
		let (tokens, errors) = tokenize(&source);
		for token in &tokens {
			println!("{token}");
		}
		for error in &errors {
			eprintln!("{error}");
		}
		Ok(())
	}

	/// Run the REPL prompt, one workout line per entry.
	pub fn run_prompt(&self) {
		let stdin = std::io::stdin();
		let mut line = String::new();
		let mut total = 0;
		loop {
			line.clear();
			print!("gymlog> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut line) {
				Ok(0) => break,
				Ok(_) if line.trim().is_empty() => continue,
				Ok(_) => match self.run(line.trim()) {
					Ok(workout) => {
						total += workout.exercises.len();
						println!("-- {} exercises, {} problems", workout.exercises.len(), workout.diagnostics.len());
					}
					Err(e) => eprintln!("Failed parse line: {e}"),
				},
				Err(e) => eprintln!("Failed read line: {e}"),
			}
		}
		println!("\nLogged {total} exercises");
	}
}

impl Gymlog {
	/// Parse the given source, printing exercises to stdout and diagnostics to
	/// stderr.
	fn run(&self, source: &str) -> Result<Workout, GymlogError> {
		let workout = parse(source, self.config)?;
		for exercise in &workout.exercises {
			println!("{exercise}");
		}
		for diagnostic in &workout.diagnostics {
			eprintln!("{diagnostic}");
		}
		Ok(workout)
	}
}

fn read_source(path: &Path) -> Result<String, GymlogError> {
	log::debug!("reading {}", path.display());
	Ok(read_to_string(path).with_context(|| format!("Failed open log file {}", path.display()))?)
}
