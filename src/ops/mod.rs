pub mod arith;
pub mod convert;
pub mod trig;

pub use arith::{
    abs_square_root, add, divide, exponential, factorial, logarithm, multiply, power, remainder,
    subtract,
};
pub use convert::{bin_to_dec, bin_to_hex, dec_to_bin, dec_to_hex, hex_to_bin, hex_to_dec};
pub use trig::{cosine_deg, cotangent_deg, hypotenuse, sine_deg, tangent_deg};

use crate::error::DomainError;

/// Rejects NaN and infinities so only finite values leave the library.
pub fn ensure_finite(value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_rejects_nan_and_infinity() {
        assert_eq!(ensure_finite(2.5), Ok(2.5));
        assert_eq!(ensure_finite(f64::NAN), Err(DomainError::NonFinite));
        assert_eq!(ensure_finite(f64::INFINITY), Err(DomainError::NonFinite));
        assert_eq!(ensure_finite(f64::NEG_INFINITY), Err(DomainError::NonFinite));
    }
}
