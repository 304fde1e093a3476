use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use frappe_core::config::WeightConfig;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyboard layout ergonomics scorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/keyboards.json")]
    keyboards: String,

    /// Optional JSON weights file; explicit --weight-* flags override it.
    #[arg(global = true, long)]
    weights: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract n-gram frequencies from a corpus
    Ngrams(cmd::ngrams::NgramsArgs),
    /// Score one layout against a corpus
    Score(cmd::score::ScoreArgs),
    /// Score every layout in the keyboards file and rank them
    Compare(cmd::compare::CompareArgs),
}

fn main() {
    // Logs go to stderr so --json output stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Raw matches are kept around so file-loaded weights can be overridden
    // only by flags the user actually passed.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let result = match &cli.command {
        Commands::Ngrams(args) => cmd::ngrams::run(args),
        Commands::Score(args) => {
            let weights = resolve_weights(
                cli.weights.as_deref(),
                &args.weights,
                matches.subcommand_matches("score").unwrap(),
            );
            cmd::score::run(args, &cli.keyboards, weights)
        }
        Commands::Compare(args) => {
            let weights = resolve_weights(
                cli.weights.as_deref(),
                &args.weights,
                matches.subcommand_matches("compare").unwrap(),
            );
            cmd::compare::run(args, &cli.keyboards, weights)
        }
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

fn resolve_weights(
    path: Option<&str>,
    cli_weights: &WeightConfig,
    sub_matches: &ArgMatches,
) -> WeightConfig {
    match path {
        Some(path) => {
            info!("loading weights from {path}");
            let mut weights = WeightConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("{e}");
                process::exit(1);
            });
            weights.merge_from_cli(cli_weights, sub_matches);
            weights
        }
        None => cli_weights.clone(),
    }
}
