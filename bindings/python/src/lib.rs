//! Python bindings for vernorm
//!
//! Thin wrapper around `vernorm-core`. No normalization logic lives here.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use vernorm_core::Stability;

/// Normalize a version specifier to its canonical form.
///
/// Never fails: unrecognized input comes back as an opaque `dev-<name>`
/// branch or unchanged.
///
/// Args:
///     specifier: raw version string, e.g. "v1.2", "2.x-dev", "dev-master"
///
/// Returns:
///     Canonical version string, e.g. "1.2.0.0"
#[pyfunction]
fn normalize(specifier: &str) -> String {
    vernorm_core::normalize(specifier)
}

/// Classify the stability of a raw version specifier.
///
/// Returns:
///     One of "dev", "alpha", "beta", "RC", "stable"
#[pyfunction]
fn classify_stability(specifier: &str) -> &'static str {
    vernorm_core::classify_stability(specifier).as_str()
}

/// Expand an abbreviated stability word ("b" -> "beta", "rc" -> "RC").
#[pyfunction]
fn expand_stability(token: &str) -> String {
    vernorm_core::expand_stability(token)
}

/// Position of a stability label in the order dev < alpha < beta < RC < stable.
///
/// Raises:
///     ValueError: If the label is not a known stability
#[pyfunction]
fn stability_rank(label: &str) -> PyResult<u8> {
    label
        .parse::<Stability>()
        .map(|s| s.rank())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// vernorm Python module - canonical package version strings
#[pymodule]
fn vernorm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(classify_stability, m)?)?;
    m.add_function(wrap_pyfunction!(expand_stability, m)?)?;
    m.add_function(wrap_pyfunction!(stability_rank, m)?)?;
    m.add("MASTER_SENTINEL", vernorm_core::MASTER_SENTINEL)?;
    Ok(())
}
