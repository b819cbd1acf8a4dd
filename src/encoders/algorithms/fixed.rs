//! Base62 over machine-width unsigned integers.
//!
//! Decoding evaluates digits left to right (`acc * 62 + digit`) with checked
//! arithmetic. No power of 62 is ever materialised, so arbitrarily long runs of
//! leading zero symbols decode without overflow, and any value past the
//! target's range is reported as [`DecodeError::Overflow`] rather than wrapped.

use crate::core::alphabet::{Alphabet, BASE};
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::algorithms::padding;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types the fixed-width engine can encode and decode.
///
/// Sealed; implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait FixedWidth: Copy + sealed::Sealed {
    /// Significant symbols needed for the type's maximum value.
    const MAX_DIGITS: usize;
    /// Type name used in overflow errors.
    const NAME: &'static str;
    const ZERO: Self;

    #[doc(hidden)]
    fn is_zero(self) -> bool;

    /// Returns `(self / 62, self % 62)`.
    #[doc(hidden)]
    fn div_rem_base(self) -> (Self, usize);

    /// Returns `self * 62 + digit`, or `None` on overflow.
    #[doc(hidden)]
    fn checked_mul_add(self, digit: usize) -> Option<Self>;
}

/// Counts base62 digits of `max`, for the `MAX_DIGITS` constants.
const fn digits_for(mut max: u128) -> usize {
    let mut digits = 0;
    while max > 0 {
        max /= BASE as u128;
        digits += 1;
    }
    digits
}

macro_rules! impl_fixed_width {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl FixedWidth for $t {
                const MAX_DIGITS: usize = digits_for(<$t>::MAX as u128);
                const NAME: &'static str = stringify!($t);
                const ZERO: Self = 0;

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn div_rem_base(self) -> (Self, usize) {
                    let base = BASE as $t;
                    (self / base, (self % base) as usize)
                }

                #[inline]
                fn checked_mul_add(self, digit: usize) -> Option<Self> {
                    self.checked_mul(BASE as $t)?.checked_add(digit as $t)
                }
            }
        )*
    };
}

impl_fixed_width!(u8, u16, u32, u64, u128, usize);

/// Pushes the digits of `value` onto `out`, least significant first.
///
/// Zero pushes nothing.
pub(crate) fn push_digits_le<T: FixedWidth>(
    mut value: T,
    alphabet: &Alphabet,
    out: &mut Vec<char>,
) {
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem_base();
        out.push(alphabet.symbol_at(remainder));
        value = quotient;
    }
}

/// Encodes `value`, left-padded with the zero symbol to `min_width`.
///
/// Zero encodes to the empty string before padding.
pub fn encode<T: FixedWidth>(value: T, alphabet: &Alphabet, min_width: usize) -> String {
    let mut digits = Vec::with_capacity(T::MAX_DIGITS.max(min_width));
    push_digits_le(value, alphabet, &mut digits);
    padding::finish(digits, min_width, alphabet.zero_symbol())
}

/// Decodes `encoded` into a `T`.
///
/// # Errors
///
/// [`DecodeError::InvalidSymbol`] on a symbol outside `alphabet`;
/// [`DecodeError::Overflow`] if the value exceeds `T::MAX`.
pub fn decode<T: FixedWidth>(encoded: &str, alphabet: &Alphabet) -> Result<T, DecodeError> {
    let mut value = T::ZERO;

    for (position, c) in encoded.char_indices() {
        let digit = alphabet.value_of(c).ok_or_else(|| {
            DecodeError::invalid_symbol(c, position, encoded, &alphabet.to_string())
        })?;

        value = value
            .checked_mul_add(digit)
            .ok_or_else(|| DecodeError::overflow(encoded, T::NAME, T::MAX_DIGITS))?;
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn std_encode(n: u64) -> String {
        encode(n, &Alphabet::standard(), 0)
    }

    fn std_decode(s: &str) -> Result<u64, DecodeError> {
        decode(s, &Alphabet::standard())
    }

    #[test]
    fn test_max_digits() {
        assert_eq!(u8::MAX_DIGITS, 2);
        assert_eq!(u16::MAX_DIGITS, 3);
        assert_eq!(u32::MAX_DIGITS, 6);
        assert_eq!(u64::MAX_DIGITS, 11);
        assert_eq!(u128::MAX_DIGITS, 22);
    }

    #[test]
    fn test_encode_zero_is_empty() {
        assert_eq!(std_encode(0), "");
        assert_eq!(encode(0u64, &Alphabet::standard(), 1), "0");
        assert_eq!(std_decode(""), Ok(0));
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(std_encode(1), "1");
        assert_eq!(std_encode(9), "9");
        assert_eq!(std_encode(10), "A");
        assert_eq!(std_encode(35), "Z");
        assert_eq!(std_encode(36), "a");
        assert_eq!(std_encode(61), "z");
        assert_eq!(std_encode(62), "10");
    }

    #[test]
    fn test_type_maxima() {
        let alphabet = Alphabet::standard();
        assert_eq!(encode(u8::MAX, &alphabet, 0), "47");
        assert_eq!(encode(u16::MAX, &alphabet, 0), "H31");
        assert_eq!(encode(u32::MAX, &alphabet, 0), "4gfFC3");
        assert_eq!(encode(u64::MAX, &alphabet, 0), "LygHa16AHYF");
        assert_eq!(encode(u128::MAX, &alphabet, 0), "7n42DGM5Tflk9n8mt7Fhc7");

        assert_eq!(decode::<u8>("47", &alphabet), Ok(u8::MAX));
        assert_eq!(decode::<u16>("H31", &alphabet), Ok(u16::MAX));
        assert_eq!(decode::<u32>("4gfFC3", &alphabet), Ok(u32::MAX));
        assert_eq!(
            decode::<u128>("7n42DGM5Tflk9n8mt7Fhc7", &alphabet),
            Ok(u128::MAX)
        );
    }

    #[test]
    fn test_decode_at_max_digit_count() {
        assert_eq!(std_decode("LygHa16AHYF"), Ok(u64::MAX));
        assert_eq!(std_decode("LygHa16AHYE"), Ok(u64::MAX - 1));
        assert_eq!(std_decode("AzL8n0Y58m7"), Ok(i64::MAX as u64));
        assert_eq!(std_decode("zzzzzzzzzz"), Ok(62u64.pow(10) - 1));
        assert_eq!(std_decode("10000000000"), Ok(62u64.pow(10)));
    }

    #[test]
    fn test_decode_overflow() {
        assert_eq!(
            std_decode("LygHa16AHYG"),
            Err(DecodeError::overflow("LygHa16AHYG", "u64", 11))
        );
        assert!(matches!(
            std_decode("zzzzzzzzzzz"),
            Err(DecodeError::Overflow { target: "u64", .. })
        ));
        assert!(matches!(
            std_decode("100000000000"),
            Err(DecodeError::Overflow { .. })
        ));
        assert!(matches!(
            decode::<u8>("48", &Alphabet::standard()),
            Err(DecodeError::Overflow { target: "u8", max_digits: 2, .. })
        ));
    }

    #[test]
    fn test_decode_long_zero_padding() {
        let padded = format!("{}{}", "0".repeat(200), "LygHa16AHYF");
        assert_eq!(std_decode(&padded), Ok(u64::MAX));
        assert_eq!(std_decode(&"0".repeat(64)), Ok(0));
    }

    #[test]
    fn test_decode_zero_symbols_in_the_middle() {
        assert_eq!(std_decode("100"), Ok(3844));
        assert_eq!(std_decode("10G"), Ok(3860));
        assert_eq!(std_decode("1b"), Ok(99));
    }

    #[test]
    fn test_decode_invalid_symbol() {
        let err = std_decode("5Fr-gk").unwrap_err();
        match err {
            DecodeError::InvalidSymbol {
                symbol, position, ..
            } => {
                assert_eq!(symbol, '-');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_symbol_position_is_byte_offset() {
        let err = std_decode("é1ü").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidSymbol { symbol: 'é', position: 0, .. }
        ));

        let err = std_decode("1ü").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidSymbol { symbol: 'ü', position: 1, .. }
        ));
    }

    #[test]
    fn test_padding_applied() {
        let alphabet = Alphabet::standard();
        assert_eq!(encode(1u64, &alphabet, 15), "000000000000001");
        assert_eq!(encode(u64::MAX, &alphabet, 5), "LygHa16AHYF");
    }
}
