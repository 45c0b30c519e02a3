//! Reference models for precision comparison.
//!
//! A reference model supplies the mathematically exact answer for each
//! input. It is consumed in two places:
//! 1. **Engine:** Eager per-record error computation while a sweep runs.
//! 2. **Precision Analyzer:** Post-hoc analysis of transcripts captured in timing-only mode.
//!
//! Reference values are used only for comparison and are never transmitted
//! on the wire.

/// Source of exact expected values for the unit under test.
pub trait ReferenceModel {
    /// Returns the mathematically exact result for `input`.
    fn expected(&self, input: u16) -> f64;
}

/// Exact square-root reference for the square-root unit.
///
/// Defined over the whole input domain, including zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct SqrtReference;

impl ReferenceModel for SqrtReference {
    fn expected(&self, input: u16) -> f64 {
        f64::from(input).sqrt()
    }
}
