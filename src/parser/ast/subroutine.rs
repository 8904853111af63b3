use crate::lexer::{Position, TokenKind};
use crate::parser::{
    ast::{parse_declaration_group, Statement, TypeName, VarDecl},
    FromTokens, ParseError, ParseState,
};
use crate::util::canonical;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubroutineKind {
    Function,
    Procedure,
}

/// A function or procedure declaration. The parameter list is derived
/// from the INTERFACE block; the name list in the header parentheses is a
/// hint only and is skipped unread.
#[derive(Debug, Clone, PartialEq)]
pub struct Subroutine {
    pub kind: SubroutineKind,
    pub name: String,
    pub return_type: Option<TypeName>,
    pub parameters: Vec<Parameter>,
    pub locals: Vec<VarDecl>,
    pub body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: TypeName,
    pub by_reference: bool,
}

impl FromTokens for Subroutine {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let keyword = state.expect_one_of(&[TokenKind::Function, TokenKind::Procedure])?;
        let kind = if keyword.kind == TokenKind::Function {
            SubroutineKind::Function
        } else {
            SubroutineKind::Procedure
        };

        let name = state.expect(TokenKind::Identifier)?.text;

        // The header name list is not authoritative; skip it.
        if state.accept(TokenKind::LParen).is_some() {
            while !state.at(TokenKind::RParen) && !state.at(TokenKind::Eof) {
                state.next();
            }
            state.expect(TokenKind::RParen)?;
        }

        let return_type = if kind == SubroutineKind::Function {
            state.expect(TokenKind::Colon)?;
            Some(TypeName::parse(state)?)
        } else {
            None
        };

        state.skip_semicolons();
        state.expect(TokenKind::Interface)?;

        let mut inputs = vec![];
        if state.accept(TokenKind::Input).is_some() {
            while state.at(TokenKind::Identifier) {
                inputs.extend(parse_declaration_group(state)?);
            }
        }

        let mut outputs = vec![];
        if state.accept(TokenKind::Output).is_some() {
            while state.at(TokenKind::Identifier) {
                outputs.extend(parse_declaration_group(state)?);
            }
        }

        let parameters = build_parameters(kind, &name, inputs, outputs);

        let mut locals = vec![];
        if state.accept(TokenKind::Data).is_some() {
            while state.at(TokenKind::Identifier) {
                locals.extend(parse_declaration_group(state)?);
            }
        }

        state.expect(TokenKind::Begin)?;

        let terminator = if kind == SubroutineKind::Function {
            TokenKind::EndFunction
        } else {
            TokenKind::EndProcedure
        };
        let body = Statement::parse_block(state, &[terminator])?;
        state.expect(terminator)?;
        state.skip_semicolons();

        Ok(Subroutine {
            kind,
            name,
            return_type,
            parameters,
            locals,
            body,
            position: keyword.position,
        })
    }
}

/// Derive the parameter list from the INPUT and OUTPUT sections. INPUT
/// names pass by value; a name in both sections passes by reference, as
/// does a name only in OUTPUT. An OUTPUT name matching the enclosing
/// function is the return slot and is not a parameter.
fn build_parameters(
    kind: SubroutineKind,
    name: &str,
    inputs: Vec<VarDecl>,
    outputs: Vec<VarDecl>,
) -> Vec<Parameter> {
    let mut parameters: Vec<Parameter> = inputs
        .into_iter()
        .map(|decl| Parameter {
            name: decl.name,
            param_type: decl.var_type,
            by_reference: false,
        })
        .collect();

    for decl in outputs {
        if kind == SubroutineKind::Function && canonical(&decl.name) == canonical(name) {
            continue;
        }

        if let Some(parameter) = parameters
            .iter_mut()
            .find(|parameter| canonical(&parameter.name) == canonical(&decl.name))
        {
            parameter.by_reference = true;
        } else {
            parameters.push(Parameter {
                name: decl.name,
                param_type: decl.var_type,
                by_reference: true,
            });
        }
    }

    parameters
}
