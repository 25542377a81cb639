//! Base conversions between signed 64-bit decimals and binary/hex digit strings.
//!
//! Binary text is sign-magnitude (`-101`). Hex text is the two's-complement bit
//! pattern, so `-1` renders as `FFFFFFFFFFFFFFFF` and parses back to `-1`.

use crate::error::DomainError;

pub fn dec_to_bin(dec: i64) -> String {
    let magnitude = format!("{:b}", dec.unsigned_abs());
    if dec < 0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

pub fn bin_to_dec(bin: &str) -> Result<i64, DomainError> {
    let (negative, digits) = split_sign(bin.trim());
    if digits.is_empty() {
        return Err(DomainError::EmptyDigits);
    }

    let mut magnitude: u64 = 0;
    for ch in digits.chars() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            other => return Err(DomainError::InvalidBinaryDigit(other)),
        };
        magnitude = magnitude
            .checked_mul(2)
            .and_then(|m| m.checked_add(bit))
            .ok_or(DomainError::ConversionOverflow)?;
    }

    apply_sign(negative, magnitude)
}

pub fn dec_to_hex(dec: i64) -> String {
    format!("{:X}", dec as u64)
}

pub fn hex_to_dec(hex: &str) -> Result<i64, DomainError> {
    let (negative, rest) = split_sign(hex.trim());
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);
    if digits.is_empty() {
        return Err(DomainError::EmptyDigits);
    }

    let mut bits: u64 = 0;
    for ch in digits.chars() {
        let nibble = ch.to_digit(16).ok_or(DomainError::InvalidHexDigit(ch))?;
        bits = bits
            .checked_mul(16)
            .and_then(|b| b.checked_add(u64::from(nibble)))
            .ok_or(DomainError::ConversionOverflow)?;
    }

    let value = bits as i64;
    Ok(if negative { value.wrapping_neg() } else { value })
}

/// Returns the intermediate decimal alongside the binary digits.
pub fn hex_to_bin(hex: &str) -> Result<(i64, String), DomainError> {
    let dec = hex_to_dec(hex)?;
    Ok((dec, dec_to_bin(dec)))
}

/// Returns the intermediate decimal alongside the hex digits.
pub fn bin_to_hex(bin: &str) -> Result<(i64, String), DomainError> {
    let dec = bin_to_dec(bin)?;
    Ok((dec, dec_to_hex(dec)))
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn apply_sign(negative: bool, magnitude: u64) -> Result<i64, DomainError> {
    if negative {
        // i64::MIN has no positive counterpart, so compare magnitudes first.
        if magnitude > i64::MIN.unsigned_abs() {
            return Err(DomainError::ConversionOverflow);
        }
        Ok((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).map_err(|_| DomainError::ConversionOverflow)
    }
}
