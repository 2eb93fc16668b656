//! Decimal formatting.
//!
//! Plain form splices a decimal point `scale` digits from the right,
//! padding with zeros when the coefficient is shorter than the scale.
//! Scientific form is `d.dddE±k` over the adjusted exponent; for
//! integer-valued inputs (scale zero) trailing zeros of the mantissa are
//! absorbed into the exponent, while a non-zero scale marks them as
//! significant and they stay. `Display` picks plain form while the
//! adjusted exponent lies in [-6, 20] and scientific outside.

use std::fmt::{Display, Formatter};

use super::core::BigDecimal;

fn digits_string(d: &BigDecimal) -> String {
    d.coefficient
        .magnitude()
        .to_digits()
        .iter()
        .map(|&v| (v + b'0') as char)
        .collect()
}

impl BigDecimal {
    /// Plain positional form, `[-]integer[.fraction]`.
    pub fn to_plain_string(&self) -> String {
        let digits = digits_string(self);
        let scale = self.scale as usize;
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        if scale == 0 {
            out.push_str(&digits);
        } else if digits.len() > scale {
            let split = digits.len() - scale;
            out.push_str(&digits[..split]);
            out.push('.');
            out.push_str(&digits[split..]);
        } else {
            out.push_str("0.");
            for _ in 0..scale - digits.len() {
                out.push('0');
            }
            out.push_str(&digits);
        }
        out
    }

    /// Scientific form, `[-]d[.digits]E[±]exponent`.
    pub fn to_scientific_string(&self) -> String {
        if self.is_zero() {
            return String::from("0E+0");
        }
        let mut digits = digits_string(self);
        if self.scale == 0 {
            while digits.len() > 1 && digits.ends_with('0') {
                digits.pop();
            }
        }
        let exponent = self.adjusted_exponent();
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        if exponent < 0 {
            out.push_str(&format!("E-{}", -exponent));
        } else {
            out.push_str(&format!("E+{exponent}"));
        }
        out
    }
}

impl Display for BigDecimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "{}", self.to_plain_string());
        }
        let exponent = self.adjusted_exponent();
        if (-6..=20).contains(&exponent) {
            write!(f, "{}", self.to_plain_string())
        } else {
            write!(f, "{}", self.to_scientific_string())
        }
    }
}
