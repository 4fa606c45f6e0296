//! Sort and latest commands - order a list of versions.

use anyhow::{bail, Result};
use clap::Args;
use pybrew_version::{versions, Version};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,

    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct LatestArgs {
    /// Candidate versions
    #[arg(required = true)]
    pub versions: Vec<String>,
}

fn warn_invalid(inputs: &[String]) {
    for input in inputs {
        if let Err(e) = Version::parse(input) {
            log::warn!("Ignoring {:?}: {}", input, e);
        }
    }
}

pub fn sort(args: SortArgs) -> Result<i32> {
    warn_invalid(&args.versions);

    let inputs: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let sorted = if args.reverse {
        versions::rsort(&inputs)
    } else {
        versions::sort(&inputs)
    };

    for v in sorted {
        println!("{}", v);
    }
    Ok(0)
}

pub fn latest(args: LatestArgs) -> Result<i32> {
    warn_invalid(&args.versions);

    let inputs: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    match versions::latest(&inputs) {
        Some(v) => {
            println!("{}", v);
            Ok(0)
        }
        None => bail!("None of the given versions could be parsed"),
    }
}
