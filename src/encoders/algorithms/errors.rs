use std::fmt;

/// Errors raised while building an [`Alphabet`](crate::Alphabet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The symbol set does not contain exactly 62 symbols
    WrongLength { actual: usize },
    /// A symbol appears more than once
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::WrongLength { actual } => write!(
                f,
                "invalid alphabet: expected 62 symbols, got {}",
                actual
            ),
            AlphabetError::DuplicateSymbol {
                symbol,
                first,
                second,
            } => write!(
                f,
                "invalid alphabet: symbol '{}' appears at positions {} and {}",
                symbol, first, second
            ),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a symbol not in the alphabet
    InvalidSymbol {
        symbol: char,
        position: usize,
        input: String,
        valid_symbols: String,
    },
    /// The decoded value does not fit the requested integer width
    Overflow {
        input: String,
        target: &'static str,
        max_digits: usize,
    },
}

impl DecodeError {
    /// Create an InvalidSymbol error with context
    pub fn invalid_symbol(
        symbol: char,
        position: usize,
        input: &str,
        valid_symbols: &str,
    ) -> Self {
        DecodeError::InvalidSymbol {
            symbol,
            position,
            input: truncate_input(input),
            valid_symbols: valid_symbols.to_string(),
        }
    }

    /// Create an Overflow error for the given target type
    pub fn overflow(input: &str, target: &'static str, max_digits: usize) -> Self {
        DecodeError::Overflow {
            input: truncate_input(input),
            target,
            max_digits,
        }
    }
}

fn truncate_input(input: &str) -> String {
    match input.char_indices().nth(60) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_string(),
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidSymbol {
                symbol,
                position,
                input,
                valid_symbols,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid symbol '{}' at position {}",
                        symbol, position
                    )?;
                } else {
                    writeln!(f, "error: invalid symbol '{}' at position {}", symbol, position)?;
                }
                writeln!(f)?;

                // Position is a byte offset; the caret needs a char offset
                let char_position = input
                    .char_indices()
                    .take_while(|(i, _)| i < position)
                    .count();
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(char_position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m valid symbols: {}", valid_symbols)?;
                } else {
                    write!(f, "hint: valid symbols: {}", valid_symbols)?;
                }
                Ok(())
            }
            DecodeError::Overflow {
                input,
                target,
                max_digits,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m value of '{}' does not fit in {}",
                        input, target
                    )?;
                } else {
                    writeln!(f, "error: value of '{}' does not fit in {}", input, target)?;
                }
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m {} holds at most {} significant symbols; decode into a wider integer or a BigUint",
                        target, max_digits
                    )?;
                } else {
                    write!(
                        f,
                        "hint: {} holds at most {} significant symbols; decode into a wider integer or a BigUint",
                        target, max_digits
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Colour only on a terminal, and never when `NO_COLOR` is set to a non-empty value.
fn should_use_color() -> bool {
    use std::io::IsTerminal;
    color_enabled(
        std::env::var_os("NO_COLOR").as_deref(),
        std::io::stderr().is_terminal(),
    )
}

fn color_enabled(no_color: Option<&std::ffi::OsStr>, terminal: bool) -> bool {
    terminal && no_color.is_none_or(|value| value.is_empty())
}

/// Error when a named encoding is not found in a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl EncodingNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for EncodingNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encoding '{}' not found", self.name)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for EncodingNotFoundError {}

/// Errors from resolving a named encoding out of a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NotFound(EncodingNotFoundError),
    /// The configured alphabet failed validation
    InvalidAlphabet { name: String, source: AlphabetError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(err) => write!(f, "{}", err),
            ConfigError::InvalidAlphabet { name, source } => {
                write!(f, "encoding '{}': {}", name, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NotFound(err) => Some(err),
            ConfigError::InvalidAlphabet { source, .. } => Some(source),
        }
    }
}

impl From<EncodingNotFoundError> for ConfigError {
    fn from(err: EncodingNotFoundError) -> Self {
        ConfigError::NotFound(err)
    }
}

/// Edit distance between two names, counted in chars.
///
/// Keeps one row of the table; `diagonal` holds the cell up and to the left.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Find the closest matching encoding name
pub fn find_closest_encoding<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let threshold = if name.len() < 5 { 2 } else { 3 };
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = edit_distance(name, candidate);
        // Ties go to the alphabetically first name so suggestions are stable
        let better = distance < best_distance
            || (distance == best_distance
                && best_match.as_ref().is_some_and(|best: &String| candidate < best));
        if distance <= threshold && better {
            best_distance = distance;
            best_match = Some(candidate.clone());
        }
    }

    best_match
}
