use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A syntactic diagnostic. The `Display` output is the exact message shown
/// to the user; the parser collects these in order instead of aborting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixRule { kind: TokenKind },
    #[error("could not parse {literal} as integer")]
    MalformedInteger { literal: String },
}
