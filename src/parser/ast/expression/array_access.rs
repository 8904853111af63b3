use crate::lexer::{Position, TokenKind};
use crate::parser::{ast::Expression, FromTokens, ParseError, ParseState};

/// `name[index {, index}]`; the index count must equal the array's
/// dimensionality, checked at evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAccess {
    pub name: String,
    pub indices: Vec<Expression>,
    pub position: Position,
}

impl FromTokens for ArrayAccess {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let name = state.expect(TokenKind::Identifier)?;
        state.expect(TokenKind::LBracket)?;

        let mut indices = vec![];
        loop {
            indices.push(Expression::parse(state)?);
            if state.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        state.expect(TokenKind::RBracket)?;

        Ok(ArrayAccess {
            name: name.text,
            indices,
            position: name.position,
        })
    }
}

impl From<ArrayAccess> for Expression {
    fn from(value: ArrayAccess) -> Self {
        Expression::ArrayAccess(value)
    }
}
