//! Helpers over lists of version strings
//!
//! Inputs that do not parse are skipped rather than failing the whole call;
//! each skipped input is logged at debug level.

use crate::Version;

fn parse_all<'a>(versions: &[&'a str]) -> Vec<(Version, &'a str)> {
    versions
        .iter()
        .filter_map(|raw| match Version::parse(raw) {
            Ok(v) => Some((v, *raw)),
            Err(e) => {
                log::debug!("Skipping version {:?}: {}", raw, e);
                None
            }
        })
        .collect()
}

/// Sort versions in ascending order
pub fn sort(versions: &[&str]) -> Vec<String> {
    usort(versions, true)
}

/// Sort versions in descending order (reverse sort)
pub fn rsort(versions: &[&str]) -> Vec<String> {
    usort(versions, false)
}

fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
    let mut parsed = parse_all(versions);

    // Stable, so equal versions keep their input order in both directions
    parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

    parsed.into_iter().map(|(_, raw)| raw.to_string()).collect()
}

/// The greatest version; the first one wins on ties.
pub fn latest(versions: &[&str]) -> Option<String> {
    parse_all(versions)
        .into_iter()
        .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best })
        .map(|(_, raw)| raw.to_string())
}

/// All versions `>= minimum`, in input order
pub fn at_least(versions: &[&str], minimum: &Version) -> Vec<String> {
    parse_all(versions)
        .into_iter()
        .filter(|(v, _)| v >= minimum)
        .map(|(_, raw)| raw.to_string())
        .collect()
}

/// Whether both versions belong to the same `major.minor` release series
pub fn same_series(a: &Version, b: &Version) -> bool {
    a.major() == b.major() && a.minor() == b.minor()
}
