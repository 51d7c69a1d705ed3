use crate::Span;

use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP, MULTI_SYMBOL_LOOKUP, SYMBOL_LOOKUP};

/// Pull-based scanner over one input string. Each `next_token` call consumes
/// exactly the bytes of the token it returns; once the input is exhausted it
/// returns `EndOfInput` forever without moving the cursor again.
pub struct Lexer {
    source: String,
    /// Offset of the byte currently under examination.
    pos: usize,
    /// Offset of the byte after the current one.
    read_pos: usize,
    /// Current byte, 0 once the cursor is past the end.
    ch: u8,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        let mut lexer = Lexer {
            source,
            pos: 0,
            read_pos: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = *self.source.as_bytes().get(self.read_pos).unwrap_or(&0);
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if let Some(token) = self.scan_multi_symbol() {
            return token;
        }
        if let Some(token) = self.scan_single_symbol() {
            return token;
        }
        if is_identifier_char(self.ch) {
            return self.scan_identifier();
        }
        if self.ch.is_ascii_digit() {
            return self.scan_integer();
        }
        if self.at_end() {
            // No advance: end of input is idempotent.
            return Token::new(
                TokenKind::EndOfInput,
                String::new(),
                Span::new(self.pos, self.pos),
            );
        }

        let token = Token::new(
            TokenKind::Illegal,
            (self.ch as char).to_string(),
            Span::new(self.pos, self.pos + 1),
        );
        self.read_char();
        token
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Longest-match scan over every multi-character symbol starting with
    /// the current byte. The maximum-length candidate wins even though the
    /// current table is uniformly two bytes wide.
    fn scan_multi_symbol(&mut self) -> Option<Token> {
        let start = self.pos;
        let remainder = &self.source.as_bytes()[start..];

        let mut longest: Option<(&'static str, TokenKind)> = None;
        for (&symbol, &kind) in MULTI_SYMBOL_LOOKUP.iter() {
            if symbol.as_bytes()[0] != self.ch {
                continue;
            }
            if !remainder.starts_with(symbol.as_bytes()) {
                continue;
            }
            if longest.map_or(true, |(best, _)| symbol.len() > best.len()) {
                longest = Some((symbol, kind));
            }
        }

        let (symbol, kind) = longest?;
        for _ in 0..symbol.len() {
            self.read_char();
        }
        Some(Token::new(
            kind,
            symbol.to_string(),
            Span::new(start, start + symbol.len()),
        ))
    }

    fn scan_single_symbol(&mut self) -> Option<Token> {
        let kind = *SYMBOL_LOOKUP.get(&self.ch)?;
        let token = Token::new(
            kind,
            (self.ch as char).to_string(),
            Span::new(self.pos, self.pos + 1),
        );
        self.read_char();
        Some(token)
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while is_identifier_char(self.ch) {
            self.read_char();
        }

        let value = self.source[start..self.pos].to_string();
        let kind = KEYWORD_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        Token::new(kind, value, Span::new(start, self.pos))
    }

    fn scan_integer(&mut self) -> Token {
        let start = self.pos;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }

        Token::new(
            TokenKind::Integer,
            self.source[start..self.pos].to_string(),
            Span::new(start, self.pos),
        )
    }
}

/// ASCII letters and underscore. Digits end an identifier run.
fn is_identifier_char(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
