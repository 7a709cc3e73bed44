//! Stability labels - how mature a release claims to be
//!
//! Classification works on the raw specifier, not on its canonical form,
//! and shares the classic grammar with the normalizer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parser;
use crate::{Error, Result};

/// Release maturity, ordered `dev < alpha < beta < RC < stable`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Stability {
    #[serde(rename = "dev")]
    Dev,
    #[serde(rename = "alpha")]
    Alpha,
    #[serde(rename = "beta")]
    Beta,
    #[serde(rename = "RC")]
    Rc,
    #[serde(rename = "stable")]
    Stable,
}

impl Stability {
    /// All labels, least mature first
    pub const ALL: [Stability; 5] = [
        Stability::Dev,
        Stability::Alpha,
        Stability::Beta,
        Stability::Rc,
        Stability::Stable,
    ];

    /// Canonical label as it appears in normalized versions
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Dev => "dev",
            Stability::Alpha => "alpha",
            Stability::Beta => "beta",
            Stability::Rc => "RC",
            Stability::Stable => "stable",
        }
    }

    /// Position in the maturity order, `dev` = 0
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dev" => Ok(Stability::Dev),
            "alpha" | "a" => Ok(Stability::Alpha),
            "beta" | "b" => Ok(Stability::Beta),
            "rc" => Ok(Stability::Rc),
            "stable" => Ok(Stability::Stable),
            _ => Err(Error::UnknownStability(s.to_string())),
        }
    }
}

/// Expand an abbreviated stability word to its canonical spelling.
///
/// `a` → `alpha`, `b` → `beta`, `p`/`pl` → `patch`, `rc` → `RC`; anything
/// else comes back lower-cased.
pub fn expand_stability(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "a" => "alpha".to_string(),
        "b" => "beta".to_string(),
        "p" | "pl" => "patch".to_string(),
        "rc" => "RC".to_string(),
        _ => lower,
    }
}

/// Derive the stability of a raw specifier.
///
/// Anything from the first `#` on is a comment. `dev-` prefixes, `-dev`
/// suffixes and classic versions carrying a dev marker are `dev`; otherwise
/// the stability word of a classic version decides, and everything else,
/// including input no grammar recognizes, is `stable`.
pub fn classify_stability(specifier: &str) -> Stability {
    let uncommented = specifier.split('#').next().unwrap_or_default();
    let version = uncommented.to_lowercase();

    if version.starts_with("dev-") || version.ends_with("-dev") {
        return Stability::Dev;
    }

    let Some(classic) = parser::parse_classic(&version) else {
        return Stability::Stable;
    };

    // a dev marker is captured past the stability/increment pair
    if classic.modifier.dev {
        return Stability::Dev;
    }

    match classic.modifier.stability {
        Some("beta" | "b") => Stability::Beta,
        Some("alpha" | "a") => Stability::Alpha,
        Some("rc") => Stability::Rc,
        _ => Stability::Stable,
    }
}
