use serde::Deserialize;
use std::collections::HashMap;

use crate::core::alphabet::Alphabet;
use crate::core::encoding::{Encoding, EncodingOption};
use crate::encoders::algorithms::errors::{
    AlphabetError, ConfigError, EncodingNotFoundError, find_closest_encoding,
};

/// Configuration for a single named encoding loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct EncodingConfig {
    /// The 62 alphabet symbols; the standard alphabet when unset
    #[serde(default)]
    pub alphabet: Option<String>,
    /// Minimum output width (0 = no padding)
    #[serde(default)]
    pub padding: usize,
    /// Free-form note shown when listing encodings
    #[serde(default)]
    pub description: Option<String>,
}

impl EncodingConfig {
    /// Validates the alphabet and builds the encoding.
    pub fn build(&self) -> Result<Encoding, AlphabetError> {
        let alphabet = match &self.alphabet {
            Some(symbols) => Alphabet::new(symbols)?,
            None => Alphabet::standard(),
        };

        Ok(Encoding::new(alphabet).with_options([EncodingOption::Padding(self.padding)]))
    }
}

/// Collection of named encodings loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct EncodingRegistry {
    /// Map of encoding names to their configurations
    #[serde(default)]
    pub encodings: HashMap<String, EncodingConfig>,
}

impl EncodingRegistry {
    /// Parses encoding configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the encodings bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../encodings.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Merges another configuration into this one.
    ///
    /// Encodings from `other` override encodings with the same name in `self`.
    pub fn merge(&mut self, other: EncodingRegistry) {
        self.encodings.extend(other.encodings);
    }

    /// Retrieves an encoding configuration by name.
    pub fn get_config(&self, name: &str) -> Option<&EncodingConfig> {
        self.encodings.get(name)
    }

    /// Builds the named encoding.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] (with a close-match suggestion when one
    /// exists) or [`ConfigError::InvalidAlphabet`].
    pub fn encoding(&self, name: &str) -> Result<Encoding, ConfigError> {
        let config = self.get_config(name).ok_or_else(|| {
            EncodingNotFoundError::new(name, find_closest_encoding(name, self.encodings.keys()))
        })?;

        config.build().map_err(|source| ConfigError::InvalidAlphabet {
            name: name.to_string(),
            source,
        })
    }

    /// Encoding names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.encodings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
