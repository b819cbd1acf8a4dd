use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::algorithms::fixed;
use crate::encoders::algorithms::padding;

/// Base62 digits held by one `u64` chunk.
const CHUNK_DIGITS: usize = 10;
/// 62^10, the largest power of 62 below `u64::MAX`.
const CHUNK_BASE: u64 = 62u64.pow(CHUNK_DIGITS as u32);

/// Encodes an arbitrary-precision value, left-padded to `min_width`.
///
/// The value is peeled off in 62^10 chunks so the bignum division runs once
/// per ten symbols; each chunk is expanded by the fixed-width digit loop.
pub fn encode(value: &BigUint, alphabet: &Alphabet, min_width: usize) -> String {
    if value.is_zero() {
        return padding::pad("", min_width, alphabet.zero_symbol());
    }

    // Pre-allocate: log2(62) is a little under 6 bits per symbol
    let estimated = (value.bits() as usize) / 5 + 1;
    let mut digits = Vec::with_capacity(estimated.max(min_width));

    let chunk_base = BigUint::from(CHUNK_BASE);
    let mut num = value.clone();

    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&chunk_base);
        // remainder < 62^10, so it is a single u64 digit (or none for zero)
        let chunk = remainder.to_u64_digits().first().copied().unwrap_or(0);

        let start = digits.len();
        fixed::push_digits_le(chunk, alphabet, &mut digits);

        // Inner chunks keep their leading zeros; the top chunk does not
        if !quotient.is_zero() {
            digits.resize(start + CHUNK_DIGITS, alphabet.zero_symbol());
        }
        num = quotient;
    }

    padding::finish(digits, min_width, alphabet.zero_symbol())
}

/// Decodes `encoded` into an arbitrary-precision value. Never overflows.
///
/// # Errors
///
/// [`DecodeError::InvalidSymbol`] on a symbol outside `alphabet`.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<BigUint, DecodeError> {
    let mut num = BigUint::zero();
    let mut chunk: u64 = 0;
    let mut chunk_len = 0;

    for (position, c) in encoded.char_indices() {
        let digit = alphabet.value_of(c).ok_or_else(|| {
            DecodeError::invalid_symbol(c, position, encoded, &alphabet.to_string())
        })?;

        // Accumulate ten symbols in a u64 before touching the bignum
        chunk = chunk * 62 + digit as u64;
        chunk_len += 1;
        if chunk_len == CHUNK_DIGITS {
            num *= CHUNK_BASE;
            num += chunk;
            chunk = 0;
            chunk_len = 0;
        }
    }

    if chunk_len > 0 {
        num *= 62u64.pow(chunk_len as u32);
        num += chunk;
    }

    Ok(num)
}
