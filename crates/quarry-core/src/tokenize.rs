//! Lexical tokenizers for query authoring.
//!
//! Both tokenizers treat alphanumerics, `_`, and the wildcard markers
//! `*?~` as word-internal (wildcard and fuzzy markers must survive
//! tokenization), and never treat a backslash-escaped character as a
//! delimiter, whatever its class.
//!
//! [`simple_tokenize`] drops delimiters and is what phrase handling uses;
//! [`DelimiterTokenizer`] returns delimiters to the caller so the rewriter
//! can tell a literal wildcard boundary apart from plain whitespace.

use crate::escape::EscapeError;

/// True when `value` contains a character that would not survive simple
/// tokenization: anything that is not a word character, a wildcard marker,
/// an escape, or escaped. The grammar routes such values through phrase
/// parsing instead of treating them as a single term.
pub fn is_complex_term(value: &str) -> bool {
    let mut prev = None;
    for ch in value.chars() {
        if !ch.is_alphanumeric()
            && ch != '_'
            && ch != '\\'
            && prev != Some('\\')
            && !matches!(ch, '*' | '?' | '~')
        {
            return true;
        }
        prev = Some(ch);
    }
    false
}

/// Split `value` into whitespace/punctuation-delimited word tokens,
/// dropping the delimiters.
///
/// `'`, `.`, and `:` are tolerated as word-internal so contractions,
/// decimals, and namespaced tokens stay intact. The returned iterator is
/// lazy, finite, and `Clone` (clone it to restart).
///
/// ```
/// use quarry_core::tokenize::simple_tokenize;
/// let tokens: Vec<&str> = simple_tokenize("quick brown_fox, v1.2").collect();
/// assert_eq!(tokens, ["quick", "brown_fox", "v1.2"]);
/// ```
pub fn simple_tokenize(value: &str) -> SimpleTokenizer<'_> {
    SimpleTokenizer {
        input: value,
        pos: 0,
        prev: None,
    }
}

/// Iterator over the word tokens of [`simple_tokenize`].
#[derive(Debug, Clone)]
pub struct SimpleTokenizer<'a> {
    input: &'a str,
    pos: usize,
    prev: Option<char>,
}

impl SimpleTokenizer<'_> {
    fn is_boundary(&self, ch: char) -> bool {
        !ch.is_alphanumeric()
            && ch != '_'
            && self.prev != Some('\\')
            && !matches!(ch, '*' | '?' | '~' | '\'' | '.' | ':')
    }
}

impl<'a> Iterator for SimpleTokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let input = self.input;
        let base = self.pos;
        let mut start = None;

        for (off, ch) in input[base..].char_indices() {
            let idx = base + off;
            let boundary = self.is_boundary(ch);
            self.prev = Some(ch);

            if boundary {
                if let Some(s) = start {
                    self.pos = idx + ch.len_utf8();
                    return Some(&input[s..idx]);
                }
            } else if start.is_none() {
                start = Some(idx);
            }
        }

        self.pos = input.len();
        start.map(|s| &input[s..])
    }
}

/// A word or delimiter produced by [`DelimiterTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub is_delimiter: bool,
}

/// Escape-aware tokenizer that returns delimiters as their own tokens.
///
/// Word tokens keep their escape sequences verbatim; the escapes only
/// shield the escaped character from being read as a delimiter. Callers
/// that re-tokenize or reclassify the assembled output therefore see the
/// same escaping the author wrote. A `\` at end of input is an
/// [`EscapeError::TrailingBackslash`] rather than silent truncation.
#[derive(Debug, Clone)]
pub struct DelimiterTokenizer<'a> {
    chars: std::str::Chars<'a>,
    delimiters: &'a str,
    pending: Option<Token>,
}

impl<'a> DelimiterTokenizer<'a> {
    pub fn new(input: &'a str, delimiters: &'a str) -> Self {
        Self {
            chars: input.chars(),
            delimiters,
            pending: None,
        }
    }
}

impl Iterator for DelimiterTokenizer<'_> {
    type Item = Result<Token, EscapeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(delim) = self.pending.take() {
            return Some(Ok(delim));
        }

        let mut word = String::new();
        while let Some(ch) = self.chars.next() {
            if ch == '\\' {
                match self.chars.next() {
                    Some(escaped) => {
                        word.push('\\');
                        word.push(escaped);
                    }
                    None => return Some(Err(EscapeError::TrailingBackslash)),
                }
            } else if self.delimiters.contains(ch) {
                let delim = Token {
                    text: ch.to_string(),
                    is_delimiter: true,
                };
                if word.is_empty() {
                    return Some(Ok(delim));
                }
                self.pending = Some(delim);
                return Some(Ok(Token {
                    text: word,
                    is_delimiter: false,
                }));
            } else {
                word.push(ch);
            }
        }

        if word.is_empty() {
            None
        } else {
            Some(Ok(Token {
                text: word,
                is_delimiter: false,
            }))
        }
    }
}
