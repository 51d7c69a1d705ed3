use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words. Identifier runs are looked up here before falling
    /// back to `TokenKind::Identifier`.
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Function);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };

    /// Single-character symbols, consulted only after the multi-character
    /// table failed to match at the current position.
    pub static ref SYMBOL_LOOKUP: HashMap<u8, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(b'=', TokenKind::Assign);
        map.insert(b'+', TokenKind::Plus);
        map.insert(b'-', TokenKind::Minus);
        map.insert(b'!', TokenKind::Bang);
        map.insert(b'*', TokenKind::Asterisk);
        map.insert(b'/', TokenKind::Slash);
        map.insert(b'<', TokenKind::LessThan);
        map.insert(b'>', TokenKind::GreaterThan);
        map.insert(b',', TokenKind::Comma);
        map.insert(b';', TokenKind::Semicolon);
        map.insert(b'(', TokenKind::LParen);
        map.insert(b')', TokenKind::RParen);
        map.insert(b'{', TokenKind::LBrace);
        map.insert(b'}', TokenKind::RBrace);
        map
    };

    /// Multi-character symbols. These win over any single-character reading
    /// of their leading character.
    pub static ref MULTI_SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("<=", TokenKind::LessOrEqual);
        map.insert(">=", TokenKind::GreaterOrEqual);
        map.insert("==", TokenKind::Equal);
        map.insert("!=", TokenKind::NotEqual);
        map.insert("++", TokenKind::Increment);
        map.insert("--", TokenKind::Decrement);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfInput,

    Identifier,
    Integer,

    Assign,     // =
    Plus,       // +
    Minus,      // -
    Bang,       // !
    Asterisk,   // *
    Slash,      // /

    Increment,  // ++
    Decrement,  // --

    LessThan,       // <
    LessOrEqual,    // <=
    GreaterThan,    // >
    GreaterOrEqual, // >=

    Equal,     // ==
    NotEqual,  // !=

    Comma,
    Semicolon,

    LParen,
    RParen,
    LBrace,
    RBrace,

    // Reserved
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One lexeme. `value` holds the literal text: empty for `EndOfInput`,
/// exactly the one offending character for `Illegal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: String, span: Span) -> Token {
        Token { kind, value, span }
    }

    fn carries_literal(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Identifier | TokenKind::Integer | TokenKind::Illegal
        )
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.carries_literal() {
            write!(f, "{} ({:?}) at {}", self.kind, self.value, self.span)
        } else {
            write!(f, "{} at {}", self.kind, self.span)
        }
    }
}
