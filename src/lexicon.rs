//! Pronunciation lexicon loading.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

/// Built-in symbol table mapping CMUdict ARPAbet symbols to IPA fragments.
const CMUDICT_IPA_JSON: &str = include_str!("../data/phoneme-symbols.json");

/// Errors occurring while loading a symbol table or lexicon.
#[derive(Debug)]
pub enum LexiconError {
    /// Reading the lexicon file failed.
    IoError(io::Error),

    /// Parsing a symbol table from JSON failed.
    JsonError(serde_json::Error),

    /// A pronunciation uses a symbol missing from the symbol table.
    UnknownSymbol { line: usize, symbol: String },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(err) => write!(f, "failed to read lexicon: {}", err),
            Self::JsonError(err) => write!(f, "failed to parse symbol table: {}", err),
            Self::UnknownSymbol { line, symbol } => {
                write!(f, "unknown pronunciation symbol \"{}\" on line {}", symbol, line)
            }
        }
    }
}

impl Error for LexiconError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::JsonError(err) => Some(err),
            Self::UnknownSymbol { .. } => None,
        }
    }
}

impl From<io::Error> for LexiconError {
    fn from(val: io::Error) -> Self {
        LexiconError::IoError(val)
    }
}

impl From<serde_json::Error> for LexiconError {
    fn from(val: serde_json::Error) -> Self {
        LexiconError::JsonError(val)
    }
}

/// JSON structure of a symbol table file.
#[derive(Deserialize)]
struct SymbolsJson {
    symbols: HashMap<String, String>,
}

/// Immutable map from pronunciation symbol (eg. `AH0`) to IPA fragment
/// (eg. `ə`).
///
/// Loaded once at startup and shared read-only by [`Lexicon`] construction.
pub struct PhonemeSymbols {
    symbols: HashMap<String, String>,
}

impl PhonemeSymbols {
    /// Load a symbol table from JSON of the form
    /// `{"symbols": {"AA": "ɑ", ...}}`.
    pub fn from_json(json: &str) -> Result<PhonemeSymbols, LexiconError> {
        let parsed: SymbolsJson = serde_json::from_str(json)?;
        Ok(PhonemeSymbols {
            symbols: parsed.symbols,
        })
    }

    /// Return the built-in table covering the CMUdict ARPAbet symbol set,
    /// with stress 1 rendered as a `ˈ` prefix and stress 2 as a `ˌ` prefix.
    pub fn cmudict_ipa() -> PhonemeSymbols {
        Self::from_json(CMUDICT_IPA_JSON).expect("embedded symbol table should be valid")
    }

    fn get(&self, symbol: &str) -> Option<&str> {
        self.symbols.get(symbol).map(|s| s.as_str())
    }
}

impl Default for PhonemeSymbols {
    fn default() -> Self {
        Self::cmudict_ipa()
    }
}

/// Word → phoneme-string lookup table built from a pronunciation dictionary
/// file.
///
/// The file has one entry per line in the form
/// `WORD<two spaces>SYM1 SYM2 ... SYMn`, with symbols drawn from a
/// [`PhonemeSymbols`] table. Keys are stored as written while
/// [`lookup`](Lexicon::lookup) upper-cases the query, so the file's word
/// column must already be upper-case for lookups to succeed.
pub struct Lexicon {
    words: HashMap<String, String>,
}

impl Lexicon {
    /// Read and parse a lexicon file. A missing or unreadable file is fatal.
    pub fn from_file(
        path: impl AsRef<Path>,
        symbols: &PhonemeSymbols,
    ) -> Result<Lexicon, LexiconError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, symbols)
    }

    /// Parse lexicon entries from text.
    ///
    /// Loading stops at the first line without the two-space separator;
    /// entries from earlier lines are kept and no error is reported. In
    /// practice this means a blank or otherwise malformed line truncates the
    /// dictionary to everything above it.
    pub fn parse(text: &str, symbols: &PhonemeSymbols) -> Result<Lexicon, LexiconError> {
        let mut words = HashMap::new();

        for (line_index, line) in text.lines().enumerate() {
            let Some((word, pronunciation)) = line.split_once("  ") else {
                break;
            };

            let mut phonemes = String::new();
            for symbol in pronunciation.trim().split(' ') {
                let mapped = symbols.get(symbol).ok_or_else(|| LexiconError::UnknownSymbol {
                    line: line_index + 1,
                    symbol: symbol.to_string(),
                })?;
                phonemes.push_str(mapped);
            }

            words.insert(word.trim().to_string(), phonemes);
        }

        Ok(Lexicon { words })
    }

    /// Look up the pronunciation of a token.
    ///
    /// The query is upper-cased before lookup; stored keys are not altered.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.words.get(&token.to_uppercase()).map(|s| s.as_str())
    }

    /// Number of entries in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
