//! Base62 encoding for integer identifiers.
//!
//! Turns `u64` keys, 128-bit ids and arbitrary-precision integers into short,
//! URL-safe strings over a 62-symbol alphabet (`0-9A-Za-z` by default), and
//! back. Outputs padded to a common width with the zero symbol sort the same
//! way as the numbers they encode.
//!
//! ```
//! use base62_codec::{Encoding, decode_u64, encode_u64};
//!
//! assert_eq!(encode_u64(4815162342), "5Frvgk");
//! assert_eq!(decode_u64("5Frvgk").unwrap(), 4815162342);
//!
//! let sortable = Encoding::standard().with_padding(11);
//! assert!(sortable.encode_u64(99) < sortable.encode_u64(3844));
//! ```

mod core;
mod encoders;

pub mod prelude;

use std::sync::LazyLock;

pub use crate::core::alphabet::{Alphabet, BASE, STANDARD_SYMBOLS};
pub use crate::core::config::{EncodingConfig, EncodingRegistry};
pub use crate::core::encoding::{Encoding, EncodingOption};
pub use crate::encoders::algorithms::fixed::FixedWidth;
pub use crate::encoders::algorithms::padding::pad;
pub use crate::encoders::algorithms::{
    AlphabetError, ConfigError, DecodeError, EncodingNotFoundError, find_closest_encoding,
};
pub use num_bigint::BigUint;

/// Shared read-only standard encoding behind the free functions below.
static STANDARD: LazyLock<Encoding> = LazyLock::new(Encoding::standard);

/// Encodes `value` with the standard alphabet and no padding.
pub fn encode_u64(value: u64) -> String {
    STANDARD.encode_u64(value)
}

/// Decodes a standard-alphabet string into a `u64`.
pub fn decode_u64(encoded: &str) -> Result<u64, DecodeError> {
    STANDARD.decode_u64(encoded)
}

/// Encodes an arbitrary-precision value with the standard alphabet and no padding.
pub fn encode_big(value: &BigUint) -> String {
    STANDARD.encode_big(value)
}

/// Decodes a standard-alphabet string into an arbitrary-precision value.
pub fn decode_big(encoded: &str) -> Result<BigUint, DecodeError> {
    STANDARD.decode_big(encoded)
}
