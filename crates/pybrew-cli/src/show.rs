//! Show command - print the parsed components of a version.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use pybrew_version::Version;

use crate::config::PybrewConfig;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Version to inspect (defaults to python.version from pybrew.toml)
    pub version: Option<String>,
}

pub fn execute(args: ShowArgs, config: Option<&PybrewConfig>) -> Result<i32> {
    let version = match args.version {
        Some(raw) => Version::parse(&raw).with_context(|| format!("Cannot show {:?}", raw))?,
        None => config
            .map(PybrewConfig::preferred_version)
            .transpose()?
            .flatten()
            .context("No version given: pass one or set python.version in pybrew.toml")?,
    };

    print!("{}", describe(&version));
    Ok(0)
}

fn describe(version: &Version) -> String {
    let patch = version
        .patch()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{} {}\n{} {}\n{} {}\n{} {}\n{} {:?}\n",
        style("version:").bold(),
        version,
        style("major:  ").bold(),
        version.major(),
        style("minor:  ").bold(),
        version.minor(),
        style("patch:  ").bold(),
        patch,
        style("suffix: ").bold(),
        version.suffix(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        console::set_colors_enabled(false);
        let out = describe(&Version::from_literal("3.12.0rc1-dev"));
        assert!(out.contains("version: 3.12.0rc1-dev"));
        assert!(out.contains("major:   3"));
        assert!(out.contains("minor:   12"));
        assert!(out.contains("patch:   0"));
        assert!(out.contains("suffix:  \"rc1-dev\""));
    }

    #[test]
    fn test_describe_without_patch() {
        console::set_colors_enabled(false);
        let out = describe(&Version::from_literal("2.7"));
        assert!(out.contains("patch:   -"));
    }

    #[test]
    fn test_show_uses_config() {
        let cfg: PybrewConfig = toml::from_str("[python]\nversion = \"3.11\"\n").unwrap();
        assert_eq!(execute(ShowArgs { version: None }, Some(&cfg)).unwrap(), 0);
        assert!(execute(ShowArgs { version: None }, None).is_err());
    }
}
