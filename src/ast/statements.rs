use std::any::Any;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::SymbolExpr,
};

#[derive(Debug)]
pub struct LetStmt {
    pub token: Token,
    pub name: SymbolExpr,
    /// Absent when the value expression failed to parse; the statement
    /// itself is still produced alongside the recorded error.
    pub value: Option<ExprWrapper>,
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(LetStmt {
            token: self.token.clone(),
            name: self.name.clone(),
            value: self.value.as_ref().map(|value| value.clone_wrapper()),
        })
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
    fn render(&self) -> String {
        let mut out = format!("{} {} = ", self.token.value, self.name.render());
        if let Some(value) = &self.value {
            out.push_str(&value.render());
        }
        out.push(';');
        out
    }
}

#[derive(Debug)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<ExprWrapper>,
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ReturnStmt {
            token: self.token.clone(),
            value: self.value.as_ref().map(|value| value.clone_wrapper()),
        })
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
    fn render(&self) -> String {
        let mut out = format!("{} ", self.token.value);
        if let Some(value) = &self.value {
            out.push_str(&value.render());
        }
        out.push(';');
        out
    }
}

#[derive(Debug)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: ExprWrapper,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ExpressionStmt {
            token: self.token.clone(),
            expression: self.expression.clone_wrapper(),
        })
    }
    fn get_token(&self) -> &Token {
        &self.token
    }
    fn render(&self) -> String {
        self.expression.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ast::Program;
    use crate::lexer::tokens::TokenKind;
    use crate::Span;

    fn token(kind: TokenKind, value: &str) -> Token {
        Token::new(kind, value.to_string(), Span::new(0, value.len()))
    }

    #[test]
    fn test_render_let_statement() {
        let program = Program {
            statements: vec![StmtWrapper::new(LetStmt {
                token: token(TokenKind::Let, "let"),
                name: SymbolExpr {
                    token: token(TokenKind::Identifier, "my_var"),
                    value: "my_var".to_string(),
                },
                value: Some(ExprWrapper::new(SymbolExpr {
                    token: token(TokenKind::Identifier, "another_var"),
                    value: "another_var".to_string(),
                })),
            })],
        };

        assert_eq!(program.render(), "let my_var = another_var;");
    }

    #[test]
    fn test_render_let_statement_without_value() {
        let stmt = LetStmt {
            token: token(TokenKind::Let, "let"),
            name: SymbolExpr {
                token: token(TokenKind::Identifier, "x"),
                value: "x".to_string(),
            },
            value: None,
        };

        assert_eq!(stmt.render(), "let x = ;");
    }

    #[test]
    fn test_render_return_statement() {
        let stmt = ReturnStmt {
            token: token(TokenKind::Return, "return"),
            value: Some(ExprWrapper::new(SymbolExpr {
                token: token(TokenKind::Identifier, "result"),
                value: "result".to_string(),
            })),
        };

        assert_eq!(stmt.render(), "return result;");
    }
}
