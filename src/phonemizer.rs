//! Conversion of normalized text into phoneme strings.

use fancy_regex::Regex;
use unicode_categories::UnicodeCategories;

use crate::lexicon::Lexicon;
use crate::rewrite::{Rewrite, RewriteChain};
use crate::split::SplitExt;

/// Pattern matching a maximal run of sentence delimiters together with any
/// surrounding whitespace.
const DELIMITER_RUN: &str = r"(\s*[;:,.!?¡¿—…«»“”\(\)\{\}\[\]]+\s*)+";

/// A span of input text produced by segmentation.
///
/// Segments partition the input losslessly: concatenating them in order
/// reproduces the original string exactly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Segment<'a> {
    /// A run of punctuation and whitespace separating content. Passed
    /// through phonemization verbatim.
    Delimiter(&'a str),

    /// Text between delimiter runs, subject to word-level lexicon lookup.
    Chunk(&'a str),
}

impl<'a> Segment<'a> {
    /// Return the text this segment covers.
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Delimiter(text) | Segment::Chunk(text) => text,
        }
    }
}

/// Converts normalized text into a phoneme string using a pronunciation
/// [`Lexicon`].
///
/// Tokens absent from the lexicon pass through unchanged; there are no error
/// states.
pub struct Phonemizer {
    lexicon: Lexicon,
    delimiter_run: Regex,
    corrections: RewriteChain,
}

impl Phonemizer {
    pub fn new(lexicon: Lexicon) -> Phonemizer {
        let delimiter_run = Regex::new(DELIMITER_RUN).expect("pattern should be valid");

        let corrections = RewriteChain::new(vec![
            // Known mishearings of a recurring name, in both transcription
            // variants.
            Rewrite::literal("kəkˈoːɹoʊ", "kˈoʊkəɹoʊ"),
            Rewrite::literal("kəkˈɔːɹəʊ", "kˈəʊkəɹəʊ"),
            // Symbol simplifications.
            Rewrite::literal("ʲ", "j"),
            Rewrite::literal("x", "k"),
            Rewrite::literal("ɬ", "l"),
            // "hundred" glued to a preceding vowel or consonant tail gets a
            // separating space.
            Rewrite::pattern(r"(?<=[a-zɹː])(?=hˈʌndɹɪd)", " "),
            // A lone "z" phoneme before a delimiter or end of text loses the
            // space in front of it.
            Rewrite::pattern(r" z(?=[;:,.!?¡¿—…«»“” ]|$)", "z"),
            // Lookups and substitutions can reintroduce irregular spacing;
            // collapse it again, as the normalizer does.
            Rewrite::pattern(r"[^\S\n]", " "),
            Rewrite::pattern(r" {2,}", " "),
            Rewrite::pattern(r"(?<=\n) +(?=\n)", ""),
        ]);

        Phonemizer {
            lexicon,
            delimiter_run,
            corrections,
        }
    }

    /// Convert `text` to a phoneme string.
    ///
    /// The input is segmented into delimiter runs and content chunks; each
    /// word in a chunk is replaced by its pronunciation where the lexicon
    /// has one, and the ordered correction chain runs over the reassembled
    /// result.
    pub fn phonemize(&self, text: &str) -> String {
        let mut converted = String::with_capacity(text.len());
        for segment in self.segment(text) {
            match segment {
                Segment::Delimiter(delim) => converted.push_str(delim),
                Segment::Chunk(chunk) => converted.push_str(&self.chunk_to_phonemes(chunk)),
            }
        }

        self.corrections.apply(&converted).trim().to_string()
    }

    /// Split `text` into delimiter runs and content chunks, in input order.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last_match_end = 0;

        // DELIMITER_RUN has no lookarounds or backreferences, so matching
        // cannot fail at runtime; `flatten` never drops a match here. If it
        // ever did, the skipped text would still reach the output via the
        // trailing chunk below.
        for match_ in self.delimiter_run.find_iter(text).flatten() {
            if match_.start() > last_match_end {
                segments.push(Segment::Chunk(&text[last_match_end..match_.start()]));
            }
            if !match_.range().is_empty() {
                segments.push(Segment::Delimiter(match_.as_str()));
            }
            last_match_end = match_.end();
        }

        if last_match_end < text.len() {
            segments.push(Segment::Chunk(&text[last_match_end..]));
        }

        segments
    }

    /// Replace each word in a content chunk with its pronunciation.
    ///
    /// Every whitespace or punctuation character is isolated as its own
    /// token, tokens are looked up with an upper-cased query, and the
    /// results are rejoined with single spaces. Lookup misses keep the
    /// original token.
    fn chunk_to_phonemes(&self, chunk: &str) -> String {
        let is_word_boundary = |ch: char| ch.is_whitespace() || ch.is_punctuation();

        let phonemes: Vec<&str> = chunk
            .split_keep_delimiters(is_word_boundary)
            .map(|token| self.lexicon.lookup(token).unwrap_or(token))
            .collect();

        phonemes.join(" ")
    }
}
