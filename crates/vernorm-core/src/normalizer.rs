//! Canonical normalizer - reduces version specifiers to comparable strings
//!
//! # Rule order
//!
//! 1. Alias: `X as Y` keeps `X`
//! 2. Master-like branch: `master`, `trunk`, `default` → `9999999-dev`
//! 3. `dev-` prefix: kept as `dev-<name>`, original case
//! 4. Classic: `major[.minor[.patch[.build]]]` padded with `.0`
//! 5. Date: digit groups joined by `-`
//! 6. Trailing `dev`: handed to the branch normalizer
//!
//! The first rule that matches produces the result. Anything no rule
//! recognizes passes through unchanged.
//!
//! # Guarantees
//!
//! - **Total**: never fails, never panics
//! - **Idempotent** on canonical numeric forms
//! - **Many-to-one**: `1`, `1.0`, `v1.0.0` and `1.0.0-stable` all give `1.0.0.0`

use tracing::trace;

use crate::parser;

/// Canonical form of every master-like branch
pub const MASTER_SENTINEL: &str = "9999999-dev";

// ── Public API ─────────────────────────────────────────────

/// Normalize a version specifier to its canonical form.
///
/// ```
/// use vernorm_core::normalize;
///
/// assert_eq!(normalize("v1.2"), "1.2.0.0");
/// assert_eq!(normalize("1.0.0RC1"), "1.0.0.0-RC1");
/// assert_eq!(normalize("2021.01.01"), "2021-01-01");
/// assert_eq!(normalize("dev-master"), "9999999-dev");
/// assert_eq!(normalize("feature-foo-dev"), "dev-feature-foo");
/// ```
pub fn normalize(specifier: &str) -> String {
    let version = match parser::strip_alias(specifier) {
        Some(real) => {
            trace!(rule = "alias", input = specifier, real, "alias stripped");
            real
        }
        None => specifier,
    };

    if let Some(sentinel) = master_branch(version) {
        return sentinel;
    }

    if let Some(name) = parser::dev_prefixed(version) {
        trace!(rule = "dev-prefix", input = version, "explicit dev branch");
        return format!("dev-{}", name);
    }

    if let Some(classic) = parser::parse_classic(version) {
        let canonical = classic.modifier.render_onto(classic.numeric_core());
        trace!(rule = "classic", input = version, %canonical, "matched");
        return canonical;
    }

    if let Some(date) = parser::parse_date(version) {
        let canonical = date.modifier.render_onto(date.dashed());
        trace!(rule = "date", input = version, %canonical, "matched");
        return canonical;
    }

    if let Some(name) = parser::strip_dev_suffix(version) {
        return normalize_branch(name);
    }

    trace!(rule = "passthrough", input = version, "no grammar matched");
    version.to_string()
}

/// Normalize a branch name (without its `dev` marker).
///
/// Numeric names expand wildcards and pad toward the highest possible
/// version: `2.x` → `2.9999999.9999999.9999999-dev`. Other names become
/// opaque `dev-<name>` branches.
pub fn normalize_branch(name: &str) -> String {
    let name = name.trim();

    // Literal master-like names re-enter only the master rule, which always
    // matches them, so this never recurses back here.
    if matches!(name, "master" | "trunk" | "default") {
        if let Some(sentinel) = master_branch(name) {
            return sentinel;
        }
    }

    if let Some(branch) = parser::parse_branch(name) {
        let canonical = format!("{}-dev", branch.expanded());
        trace!(rule = "branch", name, %canonical, "numeric branch");
        return canonical;
    }

    trace!(rule = "branch", name, "opaque branch");
    format!("dev-{}", name)
}

// ── Rules ──────────────────────────────────────────────────

fn master_branch(version: &str) -> Option<String> {
    if parser::is_master_like(version) {
        trace!(rule = "master", input = version, "master-like branch");
        Some(MASTER_SENTINEL.to_string())
    } else {
        None
    }
}
