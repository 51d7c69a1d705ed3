//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser owns the lexer and pulls tokens from it on demand, keeping a
//! two-token lookahead window: advancing shifts the peek token into current
//! and pulls a fresh token into peek.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Malformed input never aborts a parse: errors are appended to an ordered
//! list, the parser resynchronizes at the next statement boundary, and
//! `parse_program` always returns a `Program`.

use std::collections::HashMap;
use std::mem;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, drained one token at a time
    lexer: Lexer,
    /// The token under examination
    current: Token,
    /// One token of lookahead past `current`
    peek: Token,
    /// Diagnostics collected across the whole parse, in order
    errors: Vec<ParseError>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over the given lexer, pulling the first two
    /// tokens to fill the lookahead window and registering all handler
    /// lookups.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the window one token forward and returns the token that was
    /// current before the shift.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, mem::replace(&mut self.peek, next))
    }

    /// Advances past the peek token when it matches the expected kind and
    /// returns it; otherwise leaves the window alone and hands the mismatch
    /// back for the caller to record.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        if self.peek.kind == expected {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: self.peek.kind,
            })
        }
    }

    /// Appends a diagnostic to the error list.
    pub fn record_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// The diagnostics collected so far, in the order they were produced.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Binding power of the peek token; unregistered tokens bind weakest.
    pub fn peek_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.peek.kind)
            .unwrap_or(&BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until the end of input and returns the program,
    /// recording errors along the way. Never faults: a malformed statement
    /// is recorded and the parser resynchronizes at the next boundary.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.current.kind != TokenKind::EndOfInput {
            match parse_stmt(self) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }
            self.advance();
        }

        Program { statements }
    }

    /// Skips to the next plausible statement boundary after a failed
    /// statement: the cursor stops on a semicolon or just before a token
    /// with a registered statement handler (the program loop's advance then
    /// lands on the next statement), or at end of input. Combined with that
    /// advance this always consumes at least one token, so parsing
    /// terminates.
    fn synchronize(&mut self) {
        while self.current.kind != TokenKind::Semicolon
            && self.current.kind != TokenKind::EndOfInput
            && !self.stmt_lookup.contains_key(&self.peek.kind)
        {
            self.advance();
        }
    }
}
