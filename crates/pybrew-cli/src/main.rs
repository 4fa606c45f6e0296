mod check;
mod compare;
mod config;
mod list;
mod show;

use config::PybrewConfig;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pybrew")]
#[command(about = "Compare and order Python release versions")]
#[command(version)]
struct Args {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two versions and print <, = or >
    Compare(compare::CompareArgs),

    /// Sort versions in ascending order
    Sort(list::SortArgs),

    /// Print the greatest of the given versions
    Latest(list::LatestArgs),

    /// Exit with 0 if a version meets the minimum, 1 otherwise
    Check(check::CheckArgs),

    /// Show the components of a version
    Show(show::ShowArgs),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Compare(args) => compare::execute(args),
        Commands::Sort(args) => list::sort(args),
        Commands::Latest(args) => list::latest(args),
        Commands::Check(args) => {
            let config = PybrewConfig::load_from_cwd()?;
            check::execute(args, config.as_ref())
        }
        Commands::Show(args) => {
            let config = PybrewConfig::load_from_cwd()?;
            show::execute(args, config.as_ref())
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(2)
        }
    }
}
