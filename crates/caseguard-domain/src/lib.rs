//! Pure policy evaluation (no IO).
//!
//! Input: a subject, an action, and an optional case snapshot constructed by
//! the caller. Output: a decision. Nothing is fetched, cached, or mutated;
//! every call re-evaluates from the given snapshot and the same inputs always
//! produce the same decision.

#![forbid(unsafe_code)]

pub mod capabilities;
pub mod fingerprint;
pub mod rules;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;

pub use capabilities::capability_matrix;
pub use engine::{evaluate, evaluate_tag};
pub use fingerprint::fingerprint_for_decision;
