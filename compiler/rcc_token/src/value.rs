//! Decoded literal values for constant tokens.
//!
//! Integer constants keep their full mathematical value regardless of
//! width: [`IntValue`] is an arbitrary-magnitude unsigned integer built
//! from little-endian `u32` limbs, tagged with the [`Base`] the digits
//! were written in. Floating constants store their `f64` bits so
//! [`TokenKind`](crate::TokenKind) stays `Eq + Hash`.

/// Numeral base of an integer constant, as spelled in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    /// Leading `0` followed by more digits.
    Octal,
    /// No prefix.
    Decimal,
    /// `0x` / `0X` prefix.
    Hexadecimal,
}

impl Base {
    /// The radix as a number (8, 10, or 16).
    pub fn radix(self) -> u32 {
        match self {
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }
}

/// Arbitrary-magnitude unsigned integer value of an integer constant.
///
/// The magnitude is stored as little-endian `u32` limbs with no trailing
/// zero limbs (zero is the empty limb vector), so derived equality and
/// hashing compare mathematical values. The originating base travels with
/// the value; it does not participate in the magnitude.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntValue {
    /// Little-endian limbs, most significant last, normalized (no
    /// trailing zeros).
    limbs: Vec<u32>,
    /// Base the digit run was written in.
    base: Base,
}

impl IntValue {
    /// Decode a digit run in the given base.
    ///
    /// # Contract
    ///
    /// Every byte of `digits` must be a valid digit for `base`; the
    /// scanner has already validated the run (an invalid digit produces an
    /// invalid token, never an `IntValue`). Invalid bytes decode as 0 in
    /// release builds.
    pub fn parse(digits: &str, base: Base) -> Self {
        let radix = base.radix();
        let mut limbs = Vec::new();
        for b in digits.bytes() {
            let digit = (b as char).to_digit(radix);
            debug_assert!(digit.is_some(), "invalid digit {b:#x} for base {radix}");
            mul_add(&mut limbs, radix, digit.unwrap_or(0));
        }
        IntValue { limbs, base }
    }

    /// The base the constant was spelled in.
    pub fn base(&self) -> Base {
        self.base
    }

    /// The magnitude as little-endian `u32` limbs (empty = zero).
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Number of significant bits in the magnitude (0 for zero).
    pub fn bits(&self) -> u32 {
        match self.limbs.last() {
            Some(top) => {
                let full = u32::try_from(self.limbs.len() - 1).unwrap_or(0) * 32;
                full + (32 - top.leading_zeros())
            }
            None => 0,
        }
    }

    /// The value as a `u64`, or `None` if the magnitude does not fit.
    pub fn as_u64(&self) -> Option<u64> {
        if self.limbs.len() > 2 {
            return None;
        }
        let lo = u64::from(self.limbs.first().copied().unwrap_or(0));
        let hi = u64::from(self.limbs.get(1).copied().unwrap_or(0));
        Some(hi << 32 | lo)
    }

    /// The value as a `u128`, or `None` if the magnitude does not fit.
    pub fn as_u128(&self) -> Option<u128> {
        if self.limbs.len() > 4 {
            return None;
        }
        let mut value: u128 = 0;
        for (i, limb) in self.limbs.iter().enumerate() {
            value |= u128::from(*limb) << (32 * i);
        }
        Some(value)
    }
}

/// `limbs = limbs * mul + add`, growing as needed.
#[allow(
    clippy::cast_possible_truncation,
    reason = "low 32 bits are the new limb; the high bits carry"
)]
fn mul_add(limbs: &mut Vec<u32>, mul: u32, add: u32) {
    let mut carry = u64::from(add);
    for limb in limbs.iter_mut() {
        let v = u64::from(*limb) * u64::from(mul) + carry;
        *limb = v as u32;
        carry = v >> 32;
    }
    while carry > 0 {
        limbs.push(carry as u32);
        carry >>= 32;
    }
}

/// Decoded value of a floating constant.
///
/// Stores the `f64` bit pattern so the containing
/// [`TokenKind`](crate::TokenKind) can derive `Eq` and `Hash`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloatValue(u64);

impl FloatValue {
    /// Wrap a decoded `f64`.
    pub fn new(value: f64) -> Self {
        FloatValue(value.to_bits())
    }

    /// The decoded value.
    pub fn get(self) -> f64 {
        f64::from_bits(self.0)
    }
}
