use num_bigint::BigUint;

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::algorithms::fixed::FixedWidth;
use crate::encoders::algorithms::{bigint, fixed, padding};

/// A single adjustment applied by [`Encoding::with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingOption {
    /// Minimum output width; shorter output is left-padded with the zero symbol.
    /// `0` disables padding.
    Padding(usize),
    /// Replaces the alphabet.
    Alphabet(Alphabet),
}

impl EncodingOption {
    fn apply(self, encoding: Encoding) -> Encoding {
        match self {
            EncodingOption::Padding(width) => Encoding {
                padding: width,
                ..encoding
            },
            EncodingOption::Alphabet(alphabet) => Encoding {
                alphabet,
                ..encoding
            },
        }
    }
}

/// An alphabet paired with a minimum output width.
///
/// Immutable once built; share it freely across threads. Every builder method
/// consumes the value and returns a new one.
///
/// ```
/// use base62_codec::{Encoding, EncodingOption};
///
/// let encoding = Encoding::standard().with_options([EncodingOption::Padding(11)]);
/// assert_eq!(encoding.encode_u64(4815162342), "000005Frvgk");
/// assert_eq!(encoding.decode_u64("000005Frvgk").unwrap(), 4815162342);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encoding {
    alphabet: Alphabet,
    padding: usize,
}

impl Encoding {
    /// Creates an unpadded encoding over `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Encoding {
            alphabet,
            padding: 0,
        }
    }

    /// The standard `0-9A-Za-z` alphabet with no padding.
    pub fn standard() -> Self {
        Self::new(Alphabet::standard())
    }

    /// Applies each option in order.
    pub fn with_options<I>(self, options: I) -> Self
    where
        I: IntoIterator<Item = EncodingOption>,
    {
        options
            .into_iter()
            .fold(self, |encoding, option| option.apply(encoding))
    }

    /// Sets the minimum output width; `0` turns padding off.
    pub fn with_padding(self, width: usize) -> Self {
        EncodingOption::Padding(width).apply(self)
    }

    /// Swaps in a different alphabet, keeping the padding width.
    pub fn with_alphabet(self, alphabet: Alphabet) -> Self {
        EncodingOption::Alphabet(alphabet).apply(self)
    }

    /// The alphabet symbols are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Minimum output width; `0` means unpadded.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Encodes a `u64`. Zero encodes to the empty string unless padded.
    pub fn encode_u64(&self, value: u64) -> String {
        self.encode_int(value)
    }

    /// Decodes into a `u64`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidSymbol`] for symbols outside the alphabet and
    /// [`DecodeError::Overflow`] for values above `u64::MAX`.
    pub fn decode_u64(&self, encoded: &str) -> Result<u64, DecodeError> {
        self.decode_int(encoded)
    }

    /// Encodes any unsigned primitive.
    pub fn encode_int<T: FixedWidth>(&self, value: T) -> String {
        fixed::encode(value, &self.alphabet, self.padding)
    }

    /// Decodes into any unsigned primitive, failing on overflow.
    pub fn decode_int<T: FixedWidth>(&self, encoded: &str) -> Result<T, DecodeError> {
        fixed::decode(encoded, &self.alphabet)
    }

    /// Encodes an arbitrary-precision value.
    pub fn encode_big(&self, value: &BigUint) -> String {
        bigint::encode(value, &self.alphabet, self.padding)
    }

    /// Decodes into an arbitrary-precision value.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidSymbol`] for symbols outside the alphabet.
    pub fn decode_big(&self, encoded: &str) -> Result<BigUint, DecodeError> {
        bigint::decode(encoded, &self.alphabet)
    }

    /// Left-pads an already encoded string to this encoding's width.
    pub fn pad(&self, encoded: &str) -> String {
        padding::pad(encoded, self.padding, self.alphabet.zero_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVERTED: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

    #[test]
    fn test_default_is_standard_unpadded() {
        let encoding = Encoding::default();
        assert_eq!(encoding, Encoding::standard());
        assert_eq!(encoding.padding(), 0);
        assert_eq!(encoding.encode_u64(0), "");
    }

    #[test]
    fn test_options_apply_in_order() {
        let encoding = Encoding::standard().with_options([
            EncodingOption::Padding(4),
            EncodingOption::Padding(6),
        ]);
        assert_eq!(encoding.padding(), 6);
        assert_eq!(encoding.encode_u64(62), "000010");
    }

    #[test]
    fn test_options_leave_original_untouched() {
        let base = Encoding::standard();
        let padded = base.clone().with_padding(15);

        assert_eq!(base.encode_u64(1), "1");
        assert_eq!(padded.encode_u64(1), "000000000000001");
    }

    #[test]
    fn test_custom_alphabet() {
        let inverted = Alphabet::new(INVERTED).unwrap();
        let encoding = Encoding::standard().with_options([
            EncodingOption::Alphabet(inverted.clone()),
            EncodingOption::Padding(3),
        ]);

        assert_eq!(encoding.alphabet(), &inverted);
        assert_eq!(encoding.encode_u64(4815162342), "5fRVGK");
        assert_eq!(encoding.encode_u64(61), "00Z");
        assert_eq!(encoding.decode_u64("5fRVGK").unwrap(), 4815162342);
    }

    #[test]
    fn test_custom_zero_symbol_pads() {
        let symbols: String = crate::core::alphabet::STANDARD_SYMBOLS
            .chars()
            .rev()
            .collect();
        let encoding = Encoding::new(Alphabet::new(&symbols).unwrap()).with_padding(4);

        assert_eq!(encoding.alphabet().zero_symbol(), 'z');
        assert_eq!(encoding.encode_u64(0), "zzzz");
        assert_eq!(encoding.encode_u64(1), "zzzy");
        assert_eq!(encoding.pad("y"), "zzzy");
        assert_eq!(encoding.decode_u64("zzzy").unwrap(), 1);
    }

    #[test]
    fn test_int_widths() {
        let encoding = Encoding::standard().with_padding(3);
        assert_eq!(encoding.encode_int(255u8), "047");
        assert_eq!(encoding.decode_int::<u8>("047").unwrap(), 255);
        assert_eq!(encoding.decode_int::<u16>("H31").unwrap(), u16::MAX);
        assert!(encoding.decode_int::<u16>("H32").is_err());
    }

    #[test]
    fn test_big_uses_padding() {
        let encoding = Encoding::standard().with_padding(42);
        let encoded = encoding.encode_big(&BigUint::from(4815162342u64));

        assert_eq!(encoded.len(), 42);
        assert!(encoded.ends_with("5Frvgk"));
        assert_eq!(
            encoding.decode_big(&encoded).unwrap(),
            BigUint::from(4815162342u64)
        );
    }

    #[test]
    fn test_encoding_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Encoding>();
    }
}
