use crate::lexer::{Position, TokenKind};
use crate::parser::{
    ast::{parse_constant_group, parse_declaration_group, Declaration, Statement, Subroutine},
    FromTokens, ParseError, ParseState,
};

/// A whole program: the algorithm header, the ordered top-level
/// declarations (constants, variables, subroutines), and the main body.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub declarations: Vec<Declaration>,
    pub body: Vec<Statement>,
    pub position: Position,
}

impl FromTokens for Program {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let header = state.expect(TokenKind::Algorithm)?;
        let name = state.expect(TokenKind::Identifier)?.text;

        let mut declarations = vec![];

        if state.accept(TokenKind::Constants).is_some() {
            while state.at(TokenKind::Identifier) {
                declarations.push(Declaration::Constant(parse_constant_group(state)?));
            }
        }

        if state.accept(TokenKind::Data).is_some() {
            while state.at(TokenKind::Identifier) {
                for variable in parse_declaration_group(state)? {
                    declarations.push(Declaration::Variable(variable));
                }
            }
        }

        while matches!(state.peek_kind(), TokenKind::Function | TokenKind::Procedure) {
            declarations.push(Declaration::Subroutine(Subroutine::parse(state)?));
        }

        state.expect(TokenKind::Begin)?;
        let body = Statement::parse_block(state, &[TokenKind::End])?;
        state.expect(TokenKind::End)?;

        Ok(Program {
            name,
            declarations,
            body,
            position: header.position,
        })
    }
}
