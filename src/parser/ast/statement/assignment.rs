use crate::lexer::{Position, TokenKind};
use crate::parser::{ast::Expression, FromTokens, ParseError, ParseState};

/// `target := value`, or `target[indices] := value` when `indices` is
/// non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub indices: Vec<Expression>,
    pub value: Expression,
    pub position: Position,
}

impl FromTokens for Assignment {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let target = state.expect(TokenKind::Identifier)?;

        let mut indices = vec![];
        if state.accept(TokenKind::LBracket).is_some() {
            loop {
                indices.push(Expression::parse(state)?);
                if state.accept(TokenKind::Comma).is_none() {
                    break;
                }
            }
            state.expect(TokenKind::RBracket)?;
        }

        state.expect(TokenKind::Assign)?;
        let value = Expression::parse(state)?;

        Ok(Assignment {
            target: target.text,
            indices,
            value,
            position: target.position,
        })
    }
}
