use crate::lexer::{Position, TokenKind};
use crate::parser::{
    ast::{parse_argument_list, Expression},
    FromTokens, ParseError, ParseState,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub arguments: Vec<Expression>,
    pub position: Position,
}

impl FromTokens for Print {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let keyword = state.expect(TokenKind::Print)?;
        let arguments = parse_argument_list(state)?;

        Ok(Print {
            arguments,
            position: keyword.position,
        })
    }
}
