//! Line-oriented interactive shell over the front-end pipeline.
//!
//! Each input line runs through the selected stage with freshly
//! constructed Lexer/Parser instances: the `lexer` stage lists the tokens,
//! the `parser` stage prints the re-rendered program, or the error list
//! when the parse collected any.

use std::fmt::Display;

use clap::ValueEnum;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

use crate::lexer::lexer::Lexer;
use crate::lexer::tokens::TokenKind;
use crate::parser::parser::Parser;

const PROMPT: &str = ">> ";

/// Pipeline stage the shell feeds each line through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    /// Print the token stream for each line
    Lexer,
    /// Print the re-rendered AST for each line
    Parser,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Lexer => write!(f, "lexer"),
            Stage::Parser => write!(f, "parser"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReplError {
    #[error("readline failure: {0}")]
    Readline(#[from] ReadlineError),
}

/// Reads lines until end of input or interrupt, evaluating each one.
pub fn start(stage: Stage) -> Result<(), ReplError> {
    println!("wisp shell, {stage} stage");

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                editor.add_history_entry(line.as_str())?;

                let output = match stage {
                    Stage::Lexer => eval_lexer(&line),
                    Stage::Parser => eval_parser(&line),
                };
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(error) => return Err(error.into()),
        }
    }
}

/// Tokenizes one line, one token per output row.
pub fn eval_lexer(input: &str) -> String {
    let mut lexer = Lexer::new(input.to_string());
    let mut rows = vec![];

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EndOfInput {
            break;
        }
        rows.push(token.to_string());
    }

    rows.join("\n")
}

/// Parses one line. A parse with errors prints the error list and drops
/// the program; a clean parse prints the program rendered back to text.
pub fn eval_parser(input: &str) -> String {
    let mut parser = Parser::new(Lexer::new(input.to_string()));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        let mut rows = vec![String::from("parser errors:")];
        for error in parser.errors() {
            rows.push(format!("\t{error}"));
        }
        return rows.join("\n");
    }

    program.render()
}
