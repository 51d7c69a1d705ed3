use crate::{
    ast::{
        ast::{ExprWrapper, StmtWrapper},
        expressions::SymbolExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let let_token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = SymbolExpr {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_optional_value(parser);
    consume_statement_end(parser);

    Ok(StmtWrapper::new(LetStmt {
        token: let_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let return_token = parser.current_token().clone();
    parser.advance();

    let value = parse_optional_value(parser);
    consume_statement_end(parser);

    Ok(StmtWrapper::new(ReturnStmt {
        token: return_token,
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let first_token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    consume_statement_end(parser);

    Ok(StmtWrapper::new(ExpressionStmt {
        token: first_token,
        expression,
    }))
}

/// Value position of `let`/`return`. A failed expression is recorded and
/// leaves the value absent; the statement itself still goes through.
fn parse_optional_value(parser: &mut Parser) -> Option<ExprWrapper> {
    match parse_expr(parser, BindingPower::Default) {
        Ok(expression) => Some(expression),
        Err(error) => {
            parser.record_error(error);
            None
        }
    }
}

/// Statements end at a semicolon or wherever the expression stopped; the
/// semicolon is optional, consumed only when present.
fn consume_statement_end(parser: &mut Parser) {
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}
