//! vernorm core - canonical version strings for package tooling
//!
//! Reduces every version specifier a package author might write (dotted
//! releases, date releases, branch names, aliases, stability suffixes) to
//! one canonical string, and derives a stability label from a raw
//! specifier. Comparison and constraint solving live elsewhere; this crate
//! only produces the values they compare.
//!
//! # Architecture
//!
//! ```text
//! specifier → alias → master branch → dev- prefix → classic → date → branch fallback
//!                                                                       ↓
//!                                                               branch normalizer
//! ```
//!
//! # Guarantees
//!
//! - **Total**: every input yields exactly one output, never an error
//! - **Deterministic**: same input always produces identical output
//! - **Idempotent**: canonical numeric forms normalize to themselves
//! - **Shareable**: patterns compile once and are read-only afterwards

pub mod error;
pub mod normalizer;
pub mod parser;
pub mod stability;

pub use error::{Error, Result};
pub use normalizer::{normalize, normalize_branch, MASTER_SENTINEL};
pub use stability::{classify_stability, expand_stability, Stability};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_examples() {
        assert_eq!(normalize("1.0.0b2"), "1.0.0.0-beta2");
        assert_eq!(normalize("2.x-dev"), "2.9999999.9999999.9999999-dev");
        assert_eq!(classify_stability("1.0.0-beta1"), Stability::Beta);
        assert_eq!(classify_stability("dev-master"), Stability::Dev);
    }

    #[test]
    fn test_determinism_100_iterations() {
        let inputs = ["1.0.0RC1", "dev-feature", "2021.01.01", "1.x-dev", "foo"];
        for input in inputs {
            let first = normalize(input);
            let first_stability = classify_stability(input);
            for i in 0..100 {
                assert_eq!(first, normalize(input), "Non-determinism at iteration {}", i);
                assert_eq!(first_stability, classify_stability(input));
            }
        }
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..200)
                        .map(|i| normalize(&format!("1.{}.0-beta{}", i, i % 3)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            assert_eq!(result, &results[0]);
        }
        assert_eq!(results[0][5], "1.5.0.0-beta2");
    }
}
