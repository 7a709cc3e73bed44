//! vernorm parser - ordered grammar rules over raw specifiers
//!
//! Each rule either declines (`None`) or returns a capture record borrowing
//! from its input. Rules do not know about each other; the order in which
//! they are tried lives in [`crate::normalizer::normalize`].

pub mod captures;
pub(crate) mod grammar;

use regex::Captures;

pub use captures::{BranchMatch, ClassicMatch, DateMatch, ModifierMatch, WILDCARD_SENTINEL};

fn group<'a>(caps: &Captures<'a>, index: usize) -> Option<&'a str> {
    caps.get(index).map(|m| m.as_str()).filter(|s| !s.is_empty())
}

fn modifier_at<'a>(caps: &Captures<'a>, first: usize) -> ModifierMatch<'a> {
    ModifierMatch {
        stability: group(caps, first),
        increment: group(caps, first + 1),
        dev: group(caps, first + 2).is_some(),
    }
}

/// The real specifier of an `X as Y` alias, if `input` is one
pub fn strip_alias(input: &str) -> Option<&str> {
    grammar::ALIAS
        .captures(input)
        .and_then(|caps| group(&caps, 1))
}

/// `master`, `trunk` or `default`, optionally `dev-` prefixed, any case
pub fn is_master_like(input: &str) -> bool {
    grammar::MASTER_LIKE.is_match(&input.to_lowercase())
}

/// The branch name after a case-insensitive `dev-` prefix, original case kept
pub fn dev_prefixed(input: &str) -> Option<&str> {
    match input.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("dev-") => Some(&input[4..]),
        _ => None,
    }
}

/// `major[.minor[.patch[.build]]][modifier]`
pub fn parse_classic(input: &str) -> Option<ClassicMatch<'_>> {
    let caps = grammar::CLASSIC.captures(input)?;
    Some(ClassicMatch {
        major: group(&caps, 1)?,
        minor: group(&caps, 2),
        patch: group(&caps, 3),
        build: group(&caps, 4),
        modifier: modifier_at(&caps, 5),
    })
}

/// Date-keyed release with the same modifier as classic versions
pub fn parse_date(input: &str) -> Option<DateMatch<'_>> {
    let caps = grammar::DATE.captures(input)?;
    Some(DateMatch {
        date: group(&caps, 1)?,
        modifier: modifier_at(&caps, 2),
    })
}

/// The name in front of a trailing `dev` marker (`.dev`, `-dev` or `dev`)
pub fn strip_dev_suffix(input: &str) -> Option<&str> {
    grammar::DEV_SUFFIX
        .captures(input)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

/// Numeric or wildcard branch name such as `2.x` or `v1.0.*`
pub fn parse_branch(name: &str) -> Option<BranchMatch<'_>> {
    let caps = grammar::BRANCH.captures(name)?;
    Some(BranchMatch {
        segments: [
            group(&caps, 1),
            group(&caps, 2),
            group(&caps, 3),
            group(&caps, 4),
        ],
    })
}
