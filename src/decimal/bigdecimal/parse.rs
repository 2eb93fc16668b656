//! Numeric string normalization.
//!
//! Accepted grammar:
//!
//! ```text
//! number   := sign? body exponent?
//! body     := digits ('.' digits?)? | '.' digits
//! sign     := '+' | '-'
//! exponent := [eE] sign? digits
//! digits   := [0-9](['_' ' ' ','] | [0-9])*
//! ```
//!
//! Separators (`_`, space, `,`) are ignored inside digit runs. The
//! normalizer yields coefficient digits, a signed scale (positive for
//! fractional digits, negative when a positive exponent appends zeros),
//! and the sign; the `FromStr` impl folds a negative scale into the
//! coefficient so stored scales are always non-negative.

use std::str::FromStr;

use super::core::{BigDecimal, MAX_SCALE};
use crate::error::Error;
use crate::integer::{BigInt, BigUint};

/// Normalized parts of a numeric string.
pub(crate) struct Parsed {
    pub digits: Vec<u8>,
    pub scale: i64,
    pub negative: bool,
}

fn invalid(input: &str, reason: &'static str) -> Error {
    Error::InvalidString {
        input: input.to_string(),
        reason,
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == ' ' || c == ','
}

/// Scans a numeric string into digits, signed scale, and sign.
pub(crate) fn normalize(input: &str) -> Result<Parsed, Error> {
    let mut chars = input.chars().peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut digits = Vec::new();
    let mut frac_digits = 0i64;
    let mut seen_digit = false;
    let mut seen_point = false;
    let mut exponent = 0i64;

    while let Some(&c) = chars.peek() {
        match c {
            '0'..='9' => {
                digits.push(c as u8 - b'0');
                if seen_point {
                    frac_digits += 1;
                }
                seen_digit = true;
                chars.next();
            }
            '.' => {
                if seen_point {
                    return Err(invalid(input, "repeated decimal point"));
                }
                seen_point = true;
                chars.next();
            }
            c if is_separator(c) => {
                if !seen_digit {
                    return Err(invalid(input, "separator before any digit"));
                }
                chars.next();
            }
            'e' | 'E' => {
                chars.next();
                let exp_negative = match chars.peek() {
                    Some('-') => {
                        chars.next();
                        true
                    }
                    Some('+') => {
                        chars.next();
                        false
                    }
                    _ => false,
                };
                let mut seen_exp_digit = false;
                let mut exp: i64 = 0;
                while let Some(&ec) = chars.peek() {
                    match ec {
                        '0'..='9' => {
                            exp = exp
                                .checked_mul(10)
                                .and_then(|v| v.checked_add((ec as u8 - b'0') as i64))
                                .ok_or_else(|| invalid(input, "exponent out of range"))?;
                            seen_exp_digit = true;
                            chars.next();
                        }
                        ec if is_separator(ec) => {
                            if !seen_exp_digit {
                                return Err(invalid(input, "separator before any digit"));
                            }
                            chars.next();
                        }
                        _ => return Err(invalid(input, "unexpected character in exponent")),
                    }
                }
                if !seen_exp_digit {
                    return Err(invalid(input, "empty exponent"));
                }
                exponent = if exp_negative { -exp } else { exp };
                break;
            }
            _ => return Err(invalid(input, "unexpected character")),
        }
    }
    if chars.peek().is_some() {
        return Err(invalid(input, "unexpected character"));
    }
    if !seen_digit {
        return Err(invalid(input, "no digits"));
    }

    let scale = frac_digits
        .checked_sub(exponent)
        .ok_or_else(|| invalid(input, "exponent out of range"))?;

    Ok(Parsed {
        digits,
        scale,
        negative,
    })
}

impl FromStr for BigDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = normalize(s)?;
        if parsed.scale.unsigned_abs() > MAX_SCALE as u64 {
            return Err(invalid(s, "exponent out of range"));
        }
        let magnitude = BigUint::from_digits(&parsed.digits);
        let coefficient = BigInt::new(magnitude, parsed.negative);
        if parsed.scale < 0 {
            // positive exponent beyond the fraction: fold into the
            // coefficient so the stored scale stays non-negative
            let scaled = BigInt::new(
                coefficient.magnitude() * &BigUint::power_of_ten((-parsed.scale) as usize),
                coefficient.is_negative(),
            );
            Ok(BigDecimal::new(scaled, 0))
        } else {
            Ok(BigDecimal::new(coefficient, parsed.scale as u32))
        }
    }
}
