use crate::lexer::{Position, TokenKind};
use crate::parser::{
    ast::{Expression, Statement},
    FromTokens, ParseError, ParseState,
};

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Expression,
    pub then_branch: Vec<Statement>,
    pub else_branch: Option<Vec<Statement>>,
    pub position: Position,
}

impl FromTokens for If {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let keyword = state.expect(TokenKind::If)?;
        let condition = Expression::parse(state)?;
        state.expect(TokenKind::Then)?;

        let then_branch = Statement::parse_block(state, &[TokenKind::Else, TokenKind::EndIf])?;

        let else_branch = if state.accept(TokenKind::Else).is_some() {
            Some(Statement::parse_block(state, &[TokenKind::EndIf])?)
        } else {
            None
        };

        state.expect(TokenKind::EndIf)?;

        Ok(If {
            condition,
            then_branch,
            else_branch,
            position: keyword.position,
        })
    }
}
