use std::any::Any;

use crate::lexer::tokens::Token;

use super::ast::{Expr, ExprType, ExprWrapper};

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub token: Token,
    pub value: String,
}

impl Expr for SymbolExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
    fn render(&self) -> String {
        self.value.clone()
    }
}

/// Integer Expression
/// Represents a decimal integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Expr for IntegerExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
    fn render(&self) -> String {
        self.token.value.clone()
    }
}

/// Prefix Expression
/// Represents a unary operator (`!`, `-`) applied to an operand.
#[derive(Debug)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(PrefixExpr {
            token: self.token.clone(),
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
        })
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
    // Fully parenthesized so operator binding stays unambiguous in output.
    fn render(&self) -> String {
        format!("({}{})", self.operator, self.right.render())
    }
}
