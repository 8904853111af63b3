use crate::lexer::{Position, TokenKind};
use crate::parser::{ast::Expression, FromTokens, ParseError, ParseState};

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub position: Position,
}

impl FromTokens for Ident {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let token = state.expect(TokenKind::Identifier)?;

        Ok(Ident {
            name: token.text,
            position: token.position,
        })
    }
}

impl From<Ident> for Expression {
    fn from(value: Ident) -> Self {
        Expression::Ident(value)
    }
}
