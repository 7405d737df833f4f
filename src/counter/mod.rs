mod separator;
mod tokenizer;
mod words;

pub use separator::{SEPARATORS, is_separator};
pub use tokenizer::{Token, TokenKind, Tokens, next_token, tokens};
pub use words::WordCounter;
