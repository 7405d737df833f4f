use super::separator::is_separator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal run of either word or separator characters, borrowed from its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    kind: TokenKind,
}

impl<'a> Token<'a> {
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Returns the word or separator run of `text` that starts at byte offset `position`.
///
/// The run is as long as possible: it stops right before the first character of
/// the other class, or at the end of `text`.
///
/// # Panics
/// Panics if `position` is not a character boundary strictly inside `text`.
#[must_use]
pub fn next_token(text: &str, position: usize) -> &str {
    token_at(text, position).text
}

fn token_at(text: &str, position: usize) -> Token<'_> {
    assert!(
        position < text.len(),
        "token position {position} out of range for text of length {}",
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "token position {position} is not on a character boundary"
    );

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let leading_separator = chars.next().is_some_and(|(_, c)| is_separator(c));

    let end = chars
        .find(|(_, c)| is_separator(*c) != leading_separator)
        .map_or(rest.len(), |(offset, _)| offset);

    let kind = if leading_separator {
        TokenKind::Separator
    } else {
        TokenKind::Word
    };

    Token {
        text: &rest[..end],
        kind,
    }
}

/// Iterator over the tokens of a single line, left to right.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: &'a str,
    position: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.line.len() {
            return None;
        }
        let token = token_at(self.line, self.position);
        self.position += token.len();
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Split `line` into contiguous tokens that cover it exactly.
#[must_use]
pub const fn tokens(line: &str) -> Tokens<'_> {
    Tokens { line, position: 0 }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
