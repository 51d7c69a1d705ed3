use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{IntegerExpr, PrefixExpr, SymbolExpr},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence-climbing core. Applies the NUD rule of the current token,
/// then folds in infix rules from the peek position for as long as their
/// binding power is strictly greater than `bp`. The cursor ends on the last
/// token of the returned expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, ParseError> {
    // First parse NUD
    let kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&kind).copied() else {
        return Err(ParseError::NoPrefixRule { kind });
    };

    let mut left = nud_fn(parser)?;

    // While LED exists and binds tighter than bp, keep extending the lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && parser.peek_binding_power() > bp {
        let peek_kind = parser.peek_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&peek_kind).copied() else {
            return Ok(left);
        };

        let binding_power = parser.peek_binding_power();
        parser.advance();
        left = led_fn(parser, left, binding_power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let token = parser.current_token().clone();
            Ok(ExprWrapper::new(SymbolExpr {
                value: token.value.clone(),
                token,
            }))
        }
        TokenKind::Integer => {
            let token = parser.current_token().clone();
            let value = token
                .value
                .parse::<i64>()
                .map_err(|_| ParseError::MalformedInteger {
                    literal: token.value.clone(),
                })?;
            Ok(ExprWrapper::new(IntegerExpr { token, value }))
        }
        kind => Err(ParseError::NoPrefixRule { kind }),
    }
}

/// NUD rule for `!` and `-`: the operand is parsed at unary binding power,
/// so prefix operators bind tighter than any future infix level below Call.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right,
    }))
}
