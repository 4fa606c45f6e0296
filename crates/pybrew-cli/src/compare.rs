//! Compare command - order two versions.

use anyhow::{Context, Result};
use clap::Args;
use pybrew_version::{compare, Version};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let left = Version::parse(&args.left)
        .with_context(|| format!("Cannot compare {:?}", args.left))?;
    let right = Version::parse(&args.right)
        .with_context(|| format!("Cannot compare {:?}", args.right))?;

    println!("{}", symbol(&left, &right));
    Ok(0)
}

fn symbol(left: &Version, right: &Version) -> &'static str {
    match compare(left, right) {
        -1 => "<",
        0 => "=",
        _ => ">",
    }
}
