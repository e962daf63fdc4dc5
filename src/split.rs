//! String splitting helpers which preserve delimiters.

/// Extension trait for splitting strings on single delimiter characters
/// while keeping the delimiters in the output.
pub trait SplitExt {
    /// Split the string using a character predicate.
    ///
    /// Each character matching `is_delimiter` becomes its own item. Runs of
    /// non-matching characters are yielded as single items. No empty items
    /// are produced.
    fn split_keep_delimiters<F: Fn(char) -> bool>(
        &self,
        is_delimiter: F,
    ) -> SplitKeepDelimiters<'_, F>;
}

impl SplitExt for str {
    fn split_keep_delimiters<F: Fn(char) -> bool>(
        &self,
        is_delimiter: F,
    ) -> SplitKeepDelimiters<'_, F> {
        SplitKeepDelimiters {
            remainder: self,
            is_delimiter,
        }
    }
}

/// Iterator returned by [`SplitExt::split_keep_delimiters`].
pub struct SplitKeepDelimiters<'a, F: Fn(char) -> bool> {
    remainder: &'a str,
    is_delimiter: F,
}

impl<'a, F: Fn(char) -> bool> Iterator for SplitKeepDelimiters<'a, F> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let mut chars = self.remainder.char_indices();
        let (_, first) = chars.next()?;

        let split_at = if (self.is_delimiter)(first) {
            first.len_utf8()
        } else {
            chars
                .find(|(_, ch)| (self.is_delimiter)(*ch))
                .map(|(idx, _)| idx)
                .unwrap_or(self.remainder.len())
        };

        let (item, rest) = self.remainder.split_at(split_at);
        self.remainder = rest;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::SplitExt;

    #[test]
    fn test_split_keep_delimiters() {
        struct Case<'a> {
            input: &'a str,
            expected: Vec<&'a str>,
        }

        let is_punc_or_space = |ch: char| ch.is_ascii_punctuation() || ch.is_whitespace();

        let cases = [
            Case {
                input: "foo. bar baz, meep",
                expected: ["foo", ".", " ", "bar", " ", "baz", ",", " ", "meep"].into(),
            },
            // Adjacent delimiters are isolated individually, with no empty
            // items in between.
            Case {
                input: "don''t",
                expected: ["don", "'", "'", "t"].into(),
            },
            Case {
                input: " lead",
                expected: [" ", "lead"].into(),
            },
            Case {
                input: "trail ",
                expected: ["trail", " "].into(),
            },
            Case {
                input: "",
                expected: [].into(),
            },
        ];

        for Case { input, expected } in cases {
            let items: Vec<&str> = input.split_keep_delimiters(is_punc_or_space).collect();
            assert_eq!(items, expected);
        }
    }
}
