use crate::lexer::{Position, TokenKind};
use crate::parser::{ast::Expression, FromTokens, ParseError, ParseState};

/// A subroutine call, either as a statement (procedure call, possibly
/// introduced by CALCULATE) or inside an expression (function call).
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub arguments: Vec<Expression>,
    pub is_statement: bool,
    pub position: Position,
}

impl Call {
    pub fn parse_with(state: &mut ParseState, is_statement: bool) -> Result<Self, ParseError> {
        let name = state.expect(TokenKind::Identifier)?;
        let arguments = parse_argument_list(state)?;

        Ok(Call {
            name: name.text,
            arguments,
            is_statement,
            position: name.position,
        })
    }
}

impl From<Call> for Expression {
    fn from(value: Call) -> Self {
        Expression::Call(value)
    }
}

/// Parse a parenthesized, comma-separated argument list. A `%` before an
/// argument is accepted and ignored.
pub fn parse_argument_list(state: &mut ParseState) -> Result<Vec<Expression>, ParseError> {
    state.expect(TokenKind::LParen)?;

    let mut arguments = vec![];
    if !state.at(TokenKind::RParen) {
        loop {
            state.accept(TokenKind::Percent);
            arguments.push(Expression::parse(state)?);
            if state.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
    }
    state.expect(TokenKind::RParen)?;

    Ok(arguments)
}
