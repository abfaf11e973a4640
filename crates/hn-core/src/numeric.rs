use crate::HnError;

/// Absolute plus relative comparison tolerances. The defaults suit the
/// distances and flows real networks produce; tighten `abs` when comparing
/// values near zero.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Approximate equality under `tol`: absolute check first, then a relative
/// check scaled by the larger magnitude.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities at input boundaries, naming the offending
/// field in the error.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, HnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HnError::NonFinite { what, value: v })
    }
}
