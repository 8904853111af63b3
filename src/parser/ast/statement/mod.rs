mod assignment;
mod for_loop;
mod if_statement;
mod print;
mod read;
mod while_loop;

pub use self::assignment::*;
pub use self::for_loop::*;
pub use self::if_statement::*;
pub use self::print::*;
pub use self::read::*;
pub use self::while_loop::*;

use crate::lexer::TokenKind;
use crate::parser::{ast::Call, FromTokens, ParseError, ParseState};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    Print(Print),
    Read(Read),
    If(If),
    For(ForLoop),
    While(WhileLoop),
    Call(Call),
}

impl Statement {
    /// Parse statements until one of `terminators` (or EOF) is at the
    /// cursor. Semicolons between statements are optional.
    pub fn parse_block(
        state: &mut ParseState,
        terminators: &[TokenKind],
    ) -> Result<Vec<Statement>, ParseError> {
        let mut statements = vec![];

        loop {
            state.skip_semicolons();
            let kind = state.peek_kind();
            if kind == TokenKind::Eof || terminators.contains(&kind) {
                break;
            }
            statements.push(Statement::parse(state)?);
        }

        Ok(statements)
    }
}

impl FromTokens for Statement {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        match state.peek_kind() {
            TokenKind::Print => Ok(Print::parse(state)?.into()),
            TokenKind::Read => Ok(Read::parse(state)?.into()),
            TokenKind::If => Ok(If::parse(state)?.into()),
            TokenKind::For => Ok(ForLoop::parse(state)?.into()),
            TokenKind::While => Ok(WhileLoop::parse(state)?.into()),
            TokenKind::Repeat => Ok(WhileLoop::parse_repeat_until(state)?.into()),
            TokenKind::Calculate => {
                state.next();
                Ok(Statement::Call(Call::parse_with(state, true)?))
            }
            TokenKind::Identifier => {
                if state.peek_ahead(1) == TokenKind::LParen {
                    Ok(Statement::Call(Call::parse_with(state, true)?))
                } else {
                    Ok(Assignment::parse(state)?.into())
                }
            }
            _ => Err(state.error("expected statement")),
        }
    }
}

impl From<Assignment> for Statement {
    fn from(value: Assignment) -> Self {
        Statement::Assignment(value)
    }
}

impl From<Print> for Statement {
    fn from(value: Print) -> Self {
        Statement::Print(value)
    }
}

impl From<Read> for Statement {
    fn from(value: Read) -> Self {
        Statement::Read(value)
    }
}

impl From<If> for Statement {
    fn from(value: If) -> Self {
        Statement::If(value)
    }
}

impl From<ForLoop> for Statement {
    fn from(value: ForLoop) -> Self {
        Statement::For(value)
    }
}

impl From<WhileLoop> for Statement {
    fn from(value: WhileLoop) -> Self {
        Statement::While(value)
    }
}
