use ascii_edge::cli::{self, Args, Command, ConvertRequest};
use ascii_edge::config::{default_path, Config};
use clap::Parser;

/// Initialise `env_logger`; `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: Args) -> Result<(), cli::CommandError> {
    let config_path = args.config.clone().unwrap_or_else(default_path);

    match args.command {
        Command::Config {
            action: cli::ConfigAction::Init,
        } => cli::handle_config_action(cli::ConfigAction::Init, &config_path, &Config::default()),
        Command::Config { action } => {
            let config = Config::load(Some(&config_path))?;
            cli::handle_config_action(action, &config_path, &config)
        }
        Command::Convert {
            input,
            width,
            mode,
            threshold,
            output,
        } => {
            let config = Config::load(Some(&config_path))?;
            let request = ConvertRequest {
                input,
                width,
                mode,
                threshold,
                output,
            };
            cli::run_convert(&config, &request)
        }
        Command::Serve { bind } => {
            let config = Config::load(Some(&config_path))?;
            cli::run_serve(&config, bind)
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
