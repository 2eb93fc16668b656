//! Signed arbitrary-precision integer over the base-10⁹ magnitude.
//!
//! `BigInt` pairs a [`BigUint`] magnitude with a sign flag and dispatches
//! arithmetic to the magnitude kernels. The sign flag is true only for
//! strictly negative values; zero is always non-negative, so there is no
//! negative zero anywhere in the crate.
//!
//! Both truncating and flooring division are provided. Truncation gives
//! the quotient its operands' XOR sign and the remainder the dividend's
//! sign; flooring shifts the quotient down by one when the operand signs
//! differ and the remainder is non-zero, which makes the remainder take
//! the divisor's sign.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use super::super::biguint::core::{cmp_words, decimal_len};
use super::super::biguint::BigUint;
use crate::error::Error;

/// Signed arbitrary-precision integer in base 10⁹.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    pub(crate) magnitude: BigUint,
    pub(crate) negative: bool,
}

impl BigInt {
    /// The value zero.
    pub fn zero() -> Self {
        BigInt {
            magnitude: BigUint::zero(),
            negative: false,
        }
    }

    /// The value one.
    pub fn one() -> Self {
        BigInt {
            magnitude: BigUint::one(),
            negative: false,
        }
    }

    /// Builds a value from a magnitude and a sign, normalizing `-0` to
    /// `+0`.
    pub fn new(magnitude: BigUint, negative: bool) -> Self {
        let negative = negative && !magnitude.is_zero();
        BigInt {
            magnitude,
            negative,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_one(&self) -> bool {
        !self.negative && self.magnitude.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_even(&self) -> bool {
        self.magnitude.words()[0] % 2 == 0
    }

    /// -1, 0, or 1.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Borrow of the unsigned magnitude.
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    /// Number of decimal digits of the magnitude.
    pub fn digit_count(&self) -> usize {
        self.magnitude.digit_count()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        BigInt {
            magnitude: self.magnitude.clone(),
            negative: false,
        }
    }

    /// Signed addition by magnitude comparison.
    pub(crate) fn add_ref(&self, rhs: &Self) -> Self {
        if self.negative == rhs.negative {
            return BigInt {
                magnitude: &self.magnitude + &rhs.magnitude,
                negative: self.negative,
            };
        }
        match cmp_words(&self.magnitude.0, &rhs.magnitude.0) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt {
                magnitude: &self.magnitude - &rhs.magnitude,
                negative: self.negative,
            },
            Ordering::Less => BigInt {
                magnitude: &rhs.magnitude - &self.magnitude,
                negative: rhs.negative,
            },
        }
    }

    pub(crate) fn sub_ref(&self, rhs: &Self) -> Self {
        self.add_ref(&BigInt {
            magnitude: rhs.magnitude.clone(),
            negative: !rhs.negative && !rhs.is_zero(),
        })
    }

    pub(crate) fn mul_ref(&self, rhs: &Self) -> Self {
        BigInt::new(&self.magnitude * &rhs.magnitude, self.negative != rhs.negative)
    }

    /// Truncating division, quotient and remainder at once.
    ///
    /// `self == q * rhs + r` with `|r| < |rhs|` and `r` carrying the
    /// dividend's sign.
    pub fn divmod(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "divmod",
            });
        }
        Ok(self.divmod_nonzero(rhs))
    }

    /// Truncating divmod for internal call sites that have already ruled
    /// out a zero divisor.
    pub(crate) fn divmod_nonzero(&self, rhs: &Self) -> (Self, Self) {
        let (q, r) = self
            .magnitude
            .divmod(&rhs.magnitude)
            .unwrap_or_else(|_| unreachable!("divisor checked non-zero"));
        (
            BigInt::new(q, self.negative != rhs.negative),
            BigInt::new(r, self.negative),
        )
    }

    /// Flooring division, quotient and remainder at once.
    ///
    /// `self == q * rhs + r` with `0 <= r < rhs` for positive divisors
    /// and the mirrored range for negative ones, so the remainder carries
    /// the divisor's sign whenever it is non-zero.
    pub fn divmod_floor(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        let (q, r) = self.divmod(rhs)?;
        if self.negative != rhs.negative && !r.is_zero() {
            Ok((q.sub_ref(&BigInt::one()), r.add_ref(rhs)))
        } else {
            Ok((q, r))
        }
    }

    /// Truncating quotient.
    pub fn div_trunc(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self.divmod(rhs)?.0)
    }

    /// Truncating remainder, signed like the dividend.
    pub fn rem_trunc(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self.divmod(rhs)?.1)
    }

    /// Flooring quotient.
    pub fn div_floor(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self.divmod_floor(rhs)?.0)
    }

    /// Flooring remainder, signed like the divisor.
    pub fn mod_floor(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self.divmod_floor(rhs)?.1)
    }

    /// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
    pub fn gcd(&self, rhs: &Self) -> Self {
        let mut a = self.magnitude.clone();
        let mut b = rhs.magnitude.clone();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        BigInt::new(a, false)
    }

    /// Least common multiple, always non-negative.
    pub fn lcm(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        let g = self.gcd(rhs);
        let reduced = &self.magnitude / &g.magnitude;
        BigInt::new(&reduced * &rhs.magnitude, false)
    }

    /// Integer power by binary exponentiation. Negative exponents are
    /// rejected, since the result would not be an integer.
    pub fn pow(&self, exponent: i64) -> Result<Self, Error> {
        if exponent < 0 {
            return Err(Error::NegativeExponent {
                exponent,
            });
        }
        let mut e = exponent as u64;
        let mut base = self.clone();
        let mut acc = BigInt::one();
        while e > 0 {
            if e & 1 == 1 {
                acc = acc.mul_ref(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul_ref(&base);
            }
        }
        Ok(acc)
    }

    /// Modular exponentiation, `self^exponent mod modulus`, with the
    /// result reduced into the flooring-remainder range of `modulus`.
    ///
    /// Negative exponents are resolved through [`BigInt::mod_inverse`],
    /// so they require the base and modulus to be coprime.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "mod_pow",
            });
        }
        if exponent.negative {
            let inv = self.mod_inverse(modulus)?;
            return inv.mod_pow(&exponent.abs(), modulus);
        }
        let base = self.mod_floor(modulus)?;
        let mut acc = BigInt::one();
        let bits = crate::integer::binary::radix::biguint_to_binary(&exponent.magnitude);
        let mut started = false;
        for i in (0..bits.len()).rev() {
            for bit in (0..32).rev() {
                let set = (bits[i] >> bit) & 1 == 1;
                if !started {
                    if !set {
                        continue;
                    }
                    started = true;
                    acc = base.clone();
                    continue;
                }
                acc = acc.mul_ref(&acc).mod_floor(modulus)?;
                if set {
                    acc = acc.mul_ref(&base).mod_floor(modulus)?;
                }
            }
        }
        if !started {
            // exponent was zero
            acc = BigInt::one().mod_floor(modulus)?;
        }
        Ok(acc)
    }

    /// Modular multiplicative inverse in `[0, |modulus|)`.
    pub fn mod_inverse(&self, modulus: &Self) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "mod_inverse",
            });
        }
        let m = modulus.abs();
        let a = self.mod_floor(&m)?;
        let (g, x, _) = extended_gcd(&a, &m);
        if !g.is_one() {
            return Err(Error::InvalidDomain {
                operation: "mod_inverse",
                reason: "arguments are not coprime",
            });
        }
        x.mod_floor(&m)
    }
}

/// Iterative extended Euclid: returns `(g, x, y)` with
/// `a*x + b*y == g == gcd(a, b)`.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (q, rem) = old_r.divmod_nonzero(&r);
        old_r = r;
        r = rem;

        let next_s = old_s.sub_ref(&q.mul_ref(&s));
        old_s = s;
        s = next_s;

        let next_t = old_t.sub_ref(&q.mul_ref(&t));
        old_t = t;
        t = next_t;
    }
    (old_r, old_s, old_t)
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

/// Decimal digits of a signed 64-bit value, used for guard sizing.
pub(crate) fn decimal_len_i64(v: i64) -> usize {
    decimal_len(v.unsigned_abs())
}
