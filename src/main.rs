use std::path::PathBuf;

use asciify::cli::{self, Args, Command, CommandError};
use asciify::logger;
use clap::Parser;

/// Environment variable naming a config file when `--config` is absent.
const CONFIG_ENV: &str = "ASCIIFY_CONFIG";

/// Load .env file without overriding existing environment variables.
fn load_env() {
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();
}

fn run(args: Args) -> Result<(), CommandError> {
    let config_path = args
        .config
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let config_path = config_path.as_deref();

    match args.command {
        Command::Generate {
            source,
            random,
            inverted,
            settings,
            output,
        } => {
            let service = cli::build_service(config_path)?;
            let rt = tokio::runtime::Runtime::new().map_err(CommandError::Runtime)?;
            rt.block_on(cli::generate(
                &service,
                source,
                random,
                inverted,
                &settings,
                output.as_deref(),
            ))
        }
        Command::Settings { settings } => {
            let service = cli::build_service(config_path)?;
            cli::show_settings(&service, &settings)
        }
        Command::Examples => {
            cli::list_examples();
            Ok(())
        }
        Command::Config { action } => cli::handle_config_action(action, config_path),
    }
}

fn main() {
    load_env();

    let args = Args::parse();
    if let Err(e) = logger::init(args.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
