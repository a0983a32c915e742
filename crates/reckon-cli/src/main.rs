use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod io;
mod utils;

use commands::ShowFormat;
use config::Config;
use error::{convert_io_error, CliError};

#[derive(Parser, Debug)]
#[command(name = "reckon")]
#[command(about = "Recursive-descent arithmetic evaluator", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity,

    /// Configuration file (defaults to the nearest reckon.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Evaluate an expression
    Eval {
        /// Expression to evaluate, e.g. "(2+8*5)-3"
        #[arg(value_name = "EXPR", allow_hyphen_values = true)]
        expression: String,
    },

    /// Evaluate every non-empty line of a file
    Run {
        /// File with one expression per line
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print an intermediate stage of the pipeline
    Show {
        /// Expression to inspect
        #[arg(value_name = "EXPR", allow_hyphen_values = true)]
        expression: String,
        /// What to display
        #[arg(value_enum, default_value_t = ShowFormat::Tree)]
        format: ShowFormat,
    },
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    run(args).map_err(Into::into)
}

fn run(args: Args) -> Result<(), CliError> {
    let cwd = std::env::current_dir()
        .map_err(|e| convert_io_error(e, PathBuf::from("."), "read the working directory"))?;
    let config = Config::load(args.config.as_deref(), &cwd)?;

    match args.command {
        Command::Eval { expression } => commands::handle_eval(&expression, &config.output),
        Command::Run { file } => commands::handle_run(&file, &config.output),
        Command::Show { expression, format } => commands::handle_show(&expression, format),
    }
}
