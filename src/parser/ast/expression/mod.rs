mod array_access;
mod binary;
mod call;
mod ident;
mod literal;
mod unary;

pub use self::array_access::*;
pub use self::binary::*;
pub use self::call::*;
pub use self::ident::*;
pub use self::literal::*;
pub use self::unary::*;

use crate::lexer::{Position, TokenKind};
use crate::parser::{FromTokens, ParseError, ParseState};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Ident(Ident),
    ArrayAccess(ArrayAccess),
    Binary(BinaryOp),
    Unary(UnaryOp),
    Call(Call),
}

impl Expression {
    pub fn position(&self) -> Position {
        match self {
            Expression::Literal(literal) => literal.position,
            Expression::Ident(ident) => ident.position,
            Expression::ArrayAccess(access) => access.position,
            Expression::Binary(binary) => binary.position,
            Expression::Unary(unary) => unary.position,
            Expression::Call(call) => call.position,
        }
    }
}

impl FromTokens for Expression {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError> {
        parse_or(state)
    }
}

// Hand-written precedence ladder, every binary level left-associative:
// or < and < comparison < additive < multiplicative < unary < primary.

fn parse_or(state: &mut ParseState) -> Result<Expression, ParseError> {
    let mut lhs = parse_and(state)?;

    while state.at(TokenKind::Or) {
        let operator = state.next();
        let rhs = parse_and(state)?;
        lhs = BinaryOp::new(BinaryVerb::Or, lhs, rhs, operator.position).into();
    }

    Ok(lhs)
}

fn parse_and(state: &mut ParseState) -> Result<Expression, ParseError> {
    let mut lhs = parse_comparison(state)?;

    while state.at(TokenKind::And) {
        let operator = state.next();
        let rhs = parse_comparison(state)?;
        lhs = BinaryOp::new(BinaryVerb::And, lhs, rhs, operator.position).into();
    }

    Ok(lhs)
}

fn parse_comparison(state: &mut ParseState) -> Result<Expression, ParseError> {
    let mut lhs = parse_additive(state)?;

    loop {
        let verb = match state.peek_kind() {
            TokenKind::Equals => BinaryVerb::Equal,
            TokenKind::NotEquals => BinaryVerb::NotEqual,
            TokenKind::Less => BinaryVerb::Less,
            TokenKind::LessEquals => BinaryVerb::LessEqual,
            TokenKind::Greater => BinaryVerb::Greater,
            TokenKind::GreaterEquals => BinaryVerb::GreaterEqual,
            _ => break,
        };
        let operator = state.next();
        let rhs = parse_additive(state)?;
        lhs = BinaryOp::new(verb, lhs, rhs, operator.position).into();
    }

    Ok(lhs)
}

fn parse_additive(state: &mut ParseState) -> Result<Expression, ParseError> {
    let mut lhs = parse_multiplicative(state)?;

    loop {
        let verb = match state.peek_kind() {
            TokenKind::Plus => BinaryVerb::Add,
            TokenKind::Minus => BinaryVerb::Sub,
            _ => break,
        };
        let operator = state.next();
        let rhs = parse_multiplicative(state)?;
        lhs = BinaryOp::new(verb, lhs, rhs, operator.position).into();
    }

    Ok(lhs)
}

fn parse_multiplicative(state: &mut ParseState) -> Result<Expression, ParseError> {
    let mut lhs = parse_unary(state)?;

    loop {
        let verb = match state.peek_kind() {
            TokenKind::Star => BinaryVerb::Mul,
            TokenKind::Slash => BinaryVerb::Div,
            TokenKind::Div => BinaryVerb::IntDiv,
            TokenKind::Mod => BinaryVerb::Mod,
            _ => break,
        };
        let operator = state.next();
        let rhs = parse_unary(state)?;
        lhs = BinaryOp::new(verb, lhs, rhs, operator.position).into();
    }

    Ok(lhs)
}

fn parse_unary(state: &mut ParseState) -> Result<Expression, ParseError> {
    let verb = match state.peek_kind() {
        TokenKind::Not => UnaryVerb::Not,
        TokenKind::Minus => UnaryVerb::Neg,
        _ => return parse_primary(state),
    };

    let operator = state.next();
    let operand = parse_unary(state)?;
    Ok(UnaryOp::new(verb, operand, operator.position).into())
}

fn parse_primary(state: &mut ParseState) -> Result<Expression, ParseError> {
    match state.peek_kind() {
        TokenKind::Number | TokenKind::Str | TokenKind::BooleanLiteral => {
            Ok(Literal::parse(state)?.into())
        }
        TokenKind::LParen => {
            state.next();
            let inner = Expression::parse(state)?;
            state.expect(TokenKind::RParen)?;
            Ok(inner)
        }
        TokenKind::Identifier => match state.peek_ahead(1) {
            TokenKind::LParen => Ok(Expression::Call(Call::parse_with(state, false)?)),
            TokenKind::LBracket => Ok(ArrayAccess::parse(state)?.into()),
            _ => Ok(Ident::parse(state)?.into()),
        },
        _ => Err(state.error("expected expression")),
    }
}
