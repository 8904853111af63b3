use crate::lexer::{Position, TokenKind};
use crate::parser::{
    ast::{Expression, Statement},
    FromTokens, ParseError, ParseState,
};

/// Pre-test and post-test loops share this node; `is_repeat_until`
/// selects the post-test form, whose condition is the stop condition.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Expression,
    pub body: Vec<Statement>,
    pub is_repeat_until: bool,
    pub position: Position,
}

impl FromTokens for WhileLoop {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let keyword = state.expect(TokenKind::While)?;
        let condition = Expression::parse(state)?;
        state.expect(TokenKind::Repeat)?;
        let body = Statement::parse_block(state, &[TokenKind::EndWhile, TokenKind::EndFor])?;
        state.expect_one_of(&[TokenKind::EndWhile, TokenKind::EndFor])?;

        Ok(WhileLoop {
            condition,
            body,
            is_repeat_until: false,
            position: keyword.position,
        })
    }
}

impl WhileLoop {
    /// `REPEAT body UNTIL condition`.
    pub fn parse_repeat_until(state: &mut ParseState) -> Result<Self, ParseError> {
        let keyword = state.expect(TokenKind::Repeat)?;
        let body = Statement::parse_block(state, &[TokenKind::Until])?;
        state.expect(TokenKind::Until)?;
        let condition = Expression::parse(state)?;

        Ok(WhileLoop {
            condition,
            body,
            is_repeat_until: true,
            position: keyword.position,
        })
    }
}
