//! Ordered rewrite rules applied to a whole working string.

use fancy_regex::Regex;

/// A single rewrite of the working string.
pub enum Rewrite {
    /// Replace every match of a regex pattern. The replacement may reference
    /// capture groups with `${n}`.
    Pattern(Regex, &'static str),

    /// Replace every occurrence of a literal substring.
    Literal(&'static str, &'static str),
}

impl Rewrite {
    /// Construct a [`Rewrite::Pattern`] from a pattern known to be valid.
    pub fn pattern(pattern: &str, replacement: &'static str) -> Rewrite {
        let regex = Regex::new(pattern).expect("pattern should be valid");
        Rewrite::Pattern(regex, replacement)
    }

    pub fn literal(from: &'static str, to: &'static str) -> Rewrite {
        Rewrite::Literal(from, to)
    }
}

/// An ordered chain of rewrites.
///
/// Order is load-bearing: each rule runs on the previous rule's output, and
/// later rules may depend on text shapes only producible by earlier rules.
pub struct RewriteChain {
    rules: Vec<Rewrite>,
}

impl RewriteChain {
    pub fn new(rules: Vec<Rewrite>) -> RewriteChain {
        RewriteChain { rules }
    }

    /// Apply every rule in order and return the final string.
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        for rule in &self.rules {
            let next = match rule {
                Rewrite::Pattern(regex, replacement) => {
                    regex.replace_all(&text, *replacement).into_owned()
                }
                Rewrite::Literal(from, to) => text.replace(*from, *to),
            };
            text = next;
        }
        text
    }
}
