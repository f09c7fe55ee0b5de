use crate::{CoreError, CoreResult};

/// Floating point type used for real-valued weights.
pub type Real = f64;

/// Pass `v` through if it is finite, naming the offending quantity otherwise.
pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}
