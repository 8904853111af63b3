use crate::lexer::{Position, TokenKind};
use crate::parser::{
    ast::{Expression, Statement},
    FromTokens, ParseError, ParseState,
};

/// `FOR variable := start TO end [STEP step] REPEAT body END_FOR`.
/// A missing step means 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub variable: String,
    pub start: Expression,
    pub end: Expression,
    pub step: Option<Expression>,
    pub body: Vec<Statement>,
    pub position: Position,
}

impl FromTokens for ForLoop {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let keyword = state.expect(TokenKind::For)?;
        let variable = state.expect(TokenKind::Identifier)?.text;
        state.expect(TokenKind::Assign)?;
        let start = Expression::parse(state)?;
        state.expect(TokenKind::To)?;
        let end = Expression::parse(state)?;

        let step = if state.accept(TokenKind::Step).is_some() {
            Some(Expression::parse(state)?)
        } else {
            None
        };

        state.expect(TokenKind::Repeat)?;
        let body = Statement::parse_block(state, &[TokenKind::EndFor, TokenKind::EndWhile])?;
        // The Greek terminator is one spelling for both loop forms, so
        // either kind closes the loop.
        state.expect_one_of(&[TokenKind::EndFor, TokenKind::EndWhile])?;

        Ok(ForLoop {
            variable,
            start,
            end,
            step,
            body,
            position: keyword.position,
        })
    }
}
