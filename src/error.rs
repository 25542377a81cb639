use thiserror::Error;

/// Domain failures raised by the numeric operation library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Division by zero!")]
    DivisionByZero,
    #[error("Modulo by zero!")]
    ModuloByZero,
    #[error("Logarithm input must be positive.")]
    NonPositiveLogarithm,
    #[error("Factorial is undefined for negative numbers.")]
    NegativeFactorial,
    #[error("Input too large for factorial (max 20).")]
    FactorialTooLarge,
    #[error("Tangent is undefined near 90 or 270 degrees.")]
    TangentUndefined,
    #[error("Cotangent is undefined near 0 or 180 degrees.")]
    CotangentUndefined,
    #[error("Result is not a finite number.")]
    NonFinite,
    #[error("No digits to convert.")]
    EmptyDigits,
    #[error("Invalid binary digit '{0}'.")]
    InvalidBinaryDigit(char),
    #[error("Invalid hexadecimal digit '{0}'.")]
    InvalidHexDigit(char),
    #[error("Value does not fit in a 64-bit integer.")]
    ConversionOverflow,
}

/// Why an operation or operand request produced no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoValue {
    #[error("returned to previous menu")]
    Back,
    #[error("invalid menu choice")]
    InvalidChoice,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("maximum nesting depth ({limit}) reached")]
    DepthExceeded { limit: usize },
    #[error("end of input")]
    EndOfInput,
    #[error("output stream closed")]
    OutputClosed,
}

impl NoValue {
    /// Nested failures are retried by the resolver unless the console is gone.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, NoValue::EndOfInput | NoValue::OutputClosed)
    }
}

pub type OperationResult = Result<f64, NoValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_converts_into_no_value() {
        let no_value: NoValue = DomainError::DivisionByZero.into();
        assert_eq!(no_value, NoValue::Domain(DomainError::DivisionByZero));
        assert_eq!(no_value.to_string(), "Division by zero!");
    }

    #[test]
    fn test_only_a_dead_console_stops_retries() {
        assert!(NoValue::Back.is_retryable());
        assert!(NoValue::DepthExceeded { limit: 3 }.is_retryable());
        assert!(NoValue::InvalidInput(String::new()).is_retryable());
        assert!(!NoValue::EndOfInput.is_retryable());
        assert!(!NoValue::OutputClosed.is_retryable());
    }
}
