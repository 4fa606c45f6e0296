//! Check command - verify a version meets a minimum.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use pybrew_version::Version;

use crate::config::PybrewConfig;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Version to check
    pub version: String,

    /// Minimum required version (defaults to python.minimum from pybrew.toml)
    #[arg(long)]
    pub min: Option<String>,
}

pub fn execute(args: CheckArgs, config: Option<&PybrewConfig>) -> Result<i32> {
    let version = Version::parse(&args.version)
        .with_context(|| format!("Cannot check {:?}", args.version))?;
    let minimum = resolve_minimum(args.min.as_deref(), config)?;

    if version >= minimum {
        log::debug!("{} satisfies minimum {}", version, minimum);
        Ok(0)
    } else {
        eprintln!(
            "{} {} is older than the required minimum {}",
            style("✗").red(),
            version,
            minimum
        );
        Ok(1)
    }
}

/// The command line flag wins over the config file
fn resolve_minimum(flag: Option<&str>, config: Option<&PybrewConfig>) -> Result<Version> {
    if let Some(min) = flag {
        return Version::parse(min).with_context(|| format!("Invalid --min {:?}", min));
    }

    match config {
        Some(cfg) => cfg.minimum_version()?.with_context(|| {
            "No minimum version given: pass --min or set python.minimum in pybrew.toml"
        }),
        None => anyhow::bail!("No minimum version given: pass --min or create a pybrew.toml"),
    }
}
