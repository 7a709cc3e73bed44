//! Structured capture records produced by the grammar rules
//!
//! Every record borrows from the specifier it was matched against, so the
//! rule chain never allocates until it builds the canonical string.

use crate::stability::expand_stability;

/// Sentinel used wherever a branch stands for "unbounded"
pub const WILDCARD_SENTINEL: &str = "9999999";

/// Stability suffix of a classic or date version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierMatch<'a> {
    /// Stability word as written, possibly abbreviated (`b`, `pl`, `RC`)
    pub stability: Option<&'a str>,
    /// Numeric increment attached to the stability word
    pub increment: Option<&'a str>,
    /// Whether a trailing `dev` marker was present
    pub dev: bool,
}

impl<'a> ModifierMatch<'a> {
    /// An explicit `stable` suffix discards increment and dev marker alike.
    pub fn is_stable(&self) -> bool {
        self.stability
            .map_or(false, |s| s.eq_ignore_ascii_case("stable"))
    }

    /// Append `-<stability>[<n>][-dev]` to a numeric or date core.
    pub fn render_onto(&self, mut core: String) -> String {
        if self.is_stable() {
            return core;
        }

        if let Some(stability) = self.stability {
            core.push('-');
            core.push_str(&expand_stability(stability));
            if let Some(increment) = self.increment {
                core.push_str(increment);
            }
        }

        if self.dev {
            core.push_str("-dev");
        }

        core
    }
}

/// `major[.minor[.patch[.build]]]` with its modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicMatch<'a> {
    pub major: &'a str,
    /// Trailing segments including their leading `.`
    pub minor: Option<&'a str>,
    pub patch: Option<&'a str>,
    pub build: Option<&'a str>,
    pub modifier: ModifierMatch<'a>,
}

impl ClassicMatch<'_> {
    /// Four dotted segments, missing ones padded with `.0`
    pub fn numeric_core(&self) -> String {
        let mut core = String::from(self.major);
        for segment in [self.minor, self.patch, self.build] {
            core.push_str(segment.unwrap_or(".0"));
        }
        core
    }
}

/// Date-keyed release such as `2021.01.01` or `20100102-203040`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch<'a> {
    pub date: &'a str,
    pub modifier: ModifierMatch<'a>,
}

impl DateMatch<'_> {
    /// The date token with every non-digit replaced by `-`
    pub fn dashed(&self) -> String {
        self.date
            .chars()
            .map(|c| if c.is_ascii_digit() { c } else { '-' })
            .collect()
    }
}

/// Numeric branch name; segments after the first keep their leading `.`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchMatch<'a> {
    pub segments: [Option<&'a str>; 4],
}

impl BranchMatch<'_> {
    /// Lowercase `x` and `*` become the sentinel, absent segments pad with `.9999999`
    pub fn expanded(&self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            match segment {
                Some(s) => out.push_str(&s.replace(&['x', '*'][..], WILDCARD_SENTINEL)),
                None => {
                    out.push('.');
                    out.push_str(WILDCARD_SENTINEL);
                }
            }
        }
        out
    }
}
