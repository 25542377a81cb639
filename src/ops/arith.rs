use crate::error::DomainError;

const MAX_FACTORIAL_INPUT: i64 = 20;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, DomainError> {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}

/// Truncating integer remainder; the sign follows the dividend.
pub fn remainder(a: i64, b: i64) -> Result<i64, DomainError> {
    if b == 0 {
        return Err(DomainError::ModuloByZero);
    }
    // i64::MIN % -1 overflows the quotient but the remainder is 0.
    Ok(a.wrapping_rem(b))
}

pub fn exponential(x: f64) -> f64 {
    x.exp()
}

/// Natural logarithm.
pub fn logarithm(x: f64) -> Result<f64, DomainError> {
    if x <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm);
    }
    Ok(x.ln())
}

/// `sqrt(x^2)`, which is `|x|` for every input including negatives.
pub fn abs_square_root(x: f64) -> f64 {
    x.abs()
}

pub fn power(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

/// Exact factorial for `0..=20`; 21! no longer fits in a u64.
pub fn factorial(n: i64) -> Result<u64, DomainError> {
    if n < 0 {
        return Err(DomainError::NegativeFactorial);
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(DomainError::FactorialTooLarge);
    }
    Ok((1..=n as u64).product())
}
