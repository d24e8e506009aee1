use gymlog::{Config, Gymlog, cli::*};
use palc::Parser;

fn main() {
	env_logger::init();
	let cli = Cli::parse();

	let config = match cli.unit_name() {
		Some(name) => match Config::from_unit_name(&name) {
			Ok(config) => config,
			Err(e) => {
				eprintln!("{e}");
				std::process::exit(2);
			}
		},
		None => Config::default(),
	};
	let gymlog = Gymlog::new(config);

	match cli.mode {
		Mode::File { path } => {
			if let Err(e) = gymlog.run_file(&path) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Tokens { path } => {
			if let Err(e) = gymlog.print_tokens(&path) {
				eprintln!("Failed print tokens: {e}");
			}
		}
		Mode::Repl => gymlog.run_prompt(),
	}
}
