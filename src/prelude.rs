//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base62_codec::prelude::*;
//!
//! let sortable = Encoding::standard().with_padding(11);
//! assert_eq!(sortable.encode_u64(61), "0000000000z");
//! assert_eq!(decode_u64("z").unwrap(), 61);
//! ```

pub use crate::{
    // Core types
    Alphabet,
    AlphabetError,
    BigUint,
    ConfigError,
    DecodeError,
    Encoding,
    EncodingOption,
    // Config
    EncodingRegistry,
    FixedWidth,

    decode_big,
    decode_u64,
    // Standard-alphabet shortcuts
    encode_big,
    encode_u64,
    pad,
};
