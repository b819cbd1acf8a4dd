pub mod bigint;
pub mod errors;
pub mod fixed;
pub mod padding;

// Re-export error types for public API
pub use errors::{
    AlphabetError, ConfigError, DecodeError, EncodingNotFoundError, find_closest_encoding,
};
