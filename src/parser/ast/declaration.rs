use crate::lexer::{Position, TokenKind};
use crate::parser::{ast::Expression, ast::Subroutine, FromTokens, ParseError, ParseState};

/// A top-level declaration, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Constant(ConstDecl),
    Variable(VarDecl),
    Subroutine(Subroutine),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub name: String,
    pub value: Expression,
    pub position: Position,
}

/// One declared variable. A group declaration `a, b: INTEGER` becomes one
/// `VarDecl` per name; `dimensions` is empty for scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub var_type: TypeName,
    pub dimensions: Vec<ArrayBound>,
    pub position: Position,
}

impl VarDecl {
    pub fn is_array(&self) -> bool {
        !self.dimensions.is_empty()
    }
}

/// Inclusive per-dimension bounds, still as expressions; both sides fold
/// to integers against the constant table before an array is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayBound {
    pub from: Expression,
    pub to: Expression,
}

/// The scalar base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Integer,
    Real,
    Boolean,
    Char,
    Text,
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TypeName::Integer => "INTEGER",
            TypeName::Real => "REAL",
            TypeName::Boolean => "BOOLEAN",
            TypeName::Char => "CHAR",
            TypeName::Text => "STRING",
        };
        f.write_str(name)
    }
}

impl FromTokens for TypeName {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let token = state.expect_one_of(&[
            TokenKind::IntegerType,
            TokenKind::RealType,
            TokenKind::BooleanType,
            TokenKind::CharType,
            TokenKind::StringType,
        ])?;

        Ok(match token.kind {
            TokenKind::IntegerType => TypeName::Integer,
            TokenKind::RealType => TypeName::Real,
            TokenKind::BooleanType => TypeName::Boolean,
            TokenKind::CharType => TypeName::Char,
            _ => TypeName::Text,
        })
    }
}

/// Parse one `name = expression ;` constant declaration.
pub fn parse_constant_group(state: &mut ParseState) -> Result<ConstDecl, ParseError> {
    let name_token = state.expect(TokenKind::Identifier)?;
    state.expect(TokenKind::Equals)?;
    let value = Expression::parse(state)?;
    state.expect(TokenKind::Semicolon)?;

    Ok(ConstDecl {
        name: name_token.text,
        value,
        position: name_token.position,
    })
}

/// Parse one `name {, name} : type ;` variable declaration, expanding the
/// name list into one `VarDecl` per name. The type is either a scalar
/// keyword or `ARRAY [ bound {, bound} ] OF scalar`.
pub fn parse_declaration_group(state: &mut ParseState) -> Result<Vec<VarDecl>, ParseError> {
    let mut names = vec![state.expect(TokenKind::Identifier)?];
    while state.accept(TokenKind::Comma).is_some() {
        names.push(state.expect(TokenKind::Identifier)?);
    }

    state.expect(TokenKind::Colon)?;

    let mut dimensions = vec![];
    if state.accept(TokenKind::Array).is_some() {
        state.expect(TokenKind::LBracket)?;
        loop {
            let from = Expression::parse(state)?;
            state.expect(TokenKind::Range)?;
            let to = Expression::parse(state)?;
            dimensions.push(ArrayBound { from, to });

            if state.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        state.expect(TokenKind::RBracket)?;
        state.expect(TokenKind::Of)?;
    }

    let var_type = TypeName::parse(state)?;
    state.expect(TokenKind::Semicolon)?;

    Ok(names
        .into_iter()
        .map(|token| VarDecl {
            name: token.text,
            var_type,
            dimensions: dimensions.clone(),
            position: token.position,
        })
        .collect())
}
