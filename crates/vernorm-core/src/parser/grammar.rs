//! Compiled grammars shared by every rule
//!
//! Compiled once on first use and never mutated, so any number of threads
//! may match against them concurrently. Digit classes are spelled `[0-9]`
//! because `\d` would also accept non-ASCII decimal digits.

use once_cell::sync::Lazy;
use regex::Regex;

/// Stability suffix shared by the classic and date grammars.
///
/// Capture order: stability word, increment, trailing dev marker.
pub(crate) const MODIFIER: &str =
    r"[._-]?(?:(stable|beta|b|RC|alpha|a|patch|pl|p)(?:[.-]?([0-9]+))?)?([.-]?dev)?";

/// `<left> as <right>`, neither side containing commas or whitespace
pub(crate) static ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^,\t\n\x0C\r ]+) +as +([^,\t\n\x0C\r ]+)$").unwrap());

/// Branches that always sort above every numbered release; matched
/// against the lower-cased specifier
pub(crate) static MASTER_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:dev-)?(?:master|trunk|default)$").unwrap());

/// `major[.minor[.patch[.build]]]` plus modifier
pub(crate) static CLASSIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^v?([0-9]{{1,3}})(\.[0-9]+)?(\.[0-9]+)?(\.[0-9]+)?{MODIFIER}$"
    ))
    .unwrap()
});

/// Year followed by up to six two-digit groups and an optional short tail
pub(crate) static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^v?([0-9]{{4}}(?:[.:-]?[0-9]{{2}}){{1,6}}(?:[.:-]?[0-9]{{1,3}})?){MODIFIER}$"
    ))
    .unwrap()
});

/// Anything ending in a `dev` marker; the name is the shortest prefix
pub(crate) static DEV_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.*?)[.-]?dev$").unwrap());

/// Numeric branch names with optional `x` / `*` wildcards
pub(crate) static BRANCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^v?([0-9]+)(\.(?:[0-9]+|[x*]))?(\.(?:[0-9]+|[x*]))?(\.(?:[0-9]+|[x*]))?$")
        .unwrap()
});
