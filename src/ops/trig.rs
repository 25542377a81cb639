//! Trigonometry over angles given in degrees.

use crate::error::DomainError;

const ASYMPTOTE_EPSILON: f64 = 1e-9;

pub fn sine_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

pub fn cosine_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

pub fn tangent_deg(deg: f64) -> Result<f64, DomainError> {
    let rad = deg.to_radians();
    if rad.cos().abs() < ASYMPTOTE_EPSILON {
        return Err(DomainError::TangentUndefined);
    }
    Ok(rad.tan())
}

/// Undefined where the sine vanishes (which also covers a vanishing tangent);
/// zero where the tangent has an asymptote.
pub fn cotangent_deg(deg: f64) -> Result<f64, DomainError> {
    if sine_deg(deg).abs() < ASYMPTOTE_EPSILON {
        return Err(DomainError::CotangentUndefined);
    }
    match tangent_deg(deg) {
        Ok(tan) => Ok(1.0 / tan),
        Err(_) => Ok(0.0),
    }
}

pub fn hypotenuse(a: f64, b: f64) -> f64 {
    a.hypot(b)
}
