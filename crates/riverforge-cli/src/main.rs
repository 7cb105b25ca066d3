use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "River/thicket map layout tuner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the simulated-annealing tuner on a mask
    Tune(cmd::tune::TuneArgs),
    /// Parse and validate a mask file without optimizing
    Check(cmd::check::CheckArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let outcome = match cli.command {
        Commands::Tune(args) => {
            // Sub-matches drive the variant-preset merge: only flags the
            // user actually passed override the preset.
            let sub = matches
                .subcommand_matches("tune")
                .expect("tune subcommand matched");
            cmd::tune::run(args, sub)
        }
        Commands::Check(args) => cmd::check::run(args),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
