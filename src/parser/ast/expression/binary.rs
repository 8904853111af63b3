use crate::lexer::Position;
use crate::parser::ast::Expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryVerb {
    Add,
    Sub,
    Mul,
    Div,
    IntDiv,
    Mod,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

impl std::fmt::Display for BinaryVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BinaryVerb::Add => "+",
            BinaryVerb::Sub => "-",
            BinaryVerb::Mul => "*",
            BinaryVerb::Div => "/",
            BinaryVerb::IntDiv => "DIV",
            BinaryVerb::Mod => "MOD",
            BinaryVerb::Equal => "=",
            BinaryVerb::NotEqual => "<>",
            BinaryVerb::Less => "<",
            BinaryVerb::LessEqual => "<=",
            BinaryVerb::Greater => ">",
            BinaryVerb::GreaterEqual => ">=",
            BinaryVerb::And => "AND",
            BinaryVerb::Or => "OR",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub verb: BinaryVerb,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub position: Position,
}

impl BinaryOp {
    pub fn new(verb: BinaryVerb, lhs: Expression, rhs: Expression, position: Position) -> Self {
        Self {
            verb,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            position,
        }
    }
}

impl From<BinaryOp> for Expression {
    fn from(value: BinaryOp) -> Self {
        Expression::Binary(value)
    }
}
