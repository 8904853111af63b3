use crate::lexer::{Position, TokenKind};
use crate::parser::{
    ast::{ArrayAccess, Expression, Ident},
    FromTokens, ParseError, ParseState,
};

/// `READ(target {, target})`. A target is a variable name or an array
/// element; each target consumes one line of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub targets: Vec<Expression>,
    pub position: Position,
}

impl FromTokens for Read {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let keyword = state.expect(TokenKind::Read)?;
        state.expect(TokenKind::LParen)?;

        let mut targets = vec![];
        if !state.at(TokenKind::RParen) {
            loop {
                state.accept(TokenKind::Percent);
                targets.push(parse_target(state)?);
                if state.accept(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        state.expect(TokenKind::RParen)?;

        Ok(Read {
            targets,
            position: keyword.position,
        })
    }
}

fn parse_target(state: &mut ParseState) -> Result<Expression, ParseError> {
    let name = state.expect(TokenKind::Identifier)?;

    if state.accept(TokenKind::LBracket).is_some() {
        let mut indices = vec![];
        loop {
            indices.push(Expression::parse(state)?);
            if state.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        state.expect(TokenKind::RBracket)?;

        return Ok(Expression::ArrayAccess(ArrayAccess {
            name: name.text,
            indices,
            position: name.position,
        }));
    }

    Ok(Expression::Ident(Ident {
        name: name.text,
        position: name.position,
    }))
}
