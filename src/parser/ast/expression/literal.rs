use crate::lexer::{is_true_literal, Position, TokenKind};
use crate::parser::{ast::Expression, FromTokens, ParseError, ParseState};

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Real(f64),
    Bool(bool),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub position: Position,
}

impl FromTokens for Literal {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        let token = state.expect_one_of(&[
            TokenKind::Number,
            TokenKind::Str,
            TokenKind::BooleanLiteral,
        ])?;

        let value = match token.kind {
            TokenKind::Number if token.text.contains('.') => {
                let parsed = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| state.error(format!("invalid number '{}'", token.text)))?;
                LiteralValue::Real(parsed)
            }
            TokenKind::Number => {
                let parsed = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| state.error(format!("invalid number '{}'", token.text)))?;
                LiteralValue::Int(parsed)
            }
            TokenKind::Str => LiteralValue::Str(token.text.clone()),
            _ => LiteralValue::Bool(is_true_literal(&token.text)),
        };

        Ok(Literal {
            value,
            position: token.position,
        })
    }
}

impl From<Literal> for Expression {
    fn from(value: Literal) -> Self {
        Expression::Literal(value)
    }
}
