use colored::Colorize;
use std::{error::Error, fmt::Display};

pub mod ast;
mod parse_state;

pub use self::parse_state::*;

use crate::lexer::{Position, Token, TokenKind};

use self::ast::Program;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: Option<Position>,
    pub source_line: Option<String>,
}

impl ParseError {
    pub fn eof(item: &str) -> ParseError {
        ParseError {
            message: format!("hit end of input while parsing {item}"),
            position: None,
            source_line: None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some((line, col)) = self.position else {
            return f.write_str(&self.message);
        };

        if let Some(line_str) = &self.source_line {
            let left_margin = format!("{line}").len();
            let left_margin_fill: String = vec![' '; left_margin].into_iter().collect();
            let left_padding_fill: String = vec![' '; col.saturating_sub(1)].into_iter().collect();

            f.write_fmt(format_args!(
                "line {line}: {}\n{left_margin_fill} |\n{line} | {line_str}\n{left_margin_fill} | {left_padding_fill}{}",
                self.message,
                "^".red(),
            ))
        } else {
            f.write_fmt(format_args!("line {line}: {}", self.message))
        }
    }
}

impl Error for ParseError {}

/// Trait implemented by every AST node that can be parsed directly from
/// the token stream.
pub trait FromTokens: Sized {
    fn parse(state: &mut ParseState) -> Result<Self, ParseError>;
}

/// Parse a lexed program. The token stream must end with the EOF
/// sentinel; trailing tokens after the program's END are an error.
pub fn parse(tokens: Vec<Token>, source: &str) -> Result<Program, ParseError> {
    let mut state = ParseState::new(tokens, source);
    let program = Program::parse(&mut state)?;

    state.skip_semicolons();
    state.accept(TokenKind::Dot);
    state.expect(TokenKind::Eof)?;

    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::ast::*;
    use super::*;
    use crate::lexer::Lexer;

    fn parse_source(source: &str) -> Result<Program, ParseError> {
        let tokens = Lexer::new(source).lex().expect("lexing failed");
        parse(tokens, source)
    }

    #[test]
    fn test_parse_minimal_program() {
        let program = parse_source("ALGORITHM T BEGIN END").expect("parse failed");
        assert_eq!(program.name, "T");
        assert!(program.declarations.is_empty());
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_parse_constants_and_data() {
        let program = parse_source(
            "ALGORITHM T CONSTANTS N = 3; M = N + 1; DATA x, y: INTEGER; A: ARRAY [1..N] OF REAL; BEGIN END",
        )
        .expect("parse failed");

        assert_eq!(program.declarations.len(), 5);
        let Declaration::Constant(n) = &program.declarations[0] else {
            panic!("expected constant");
        };
        assert_eq!(n.name, "N");
        let Declaration::Variable(a) = &program.declarations[4] else {
            panic!("expected variable");
        };
        assert_eq!(a.name, "A");
        assert_eq!(a.var_type, TypeName::Real);
        assert_eq!(a.dimensions.len(), 1);
    }

    #[test]
    fn test_operator_precedence() {
        let program =
            parse_source("ALGORITHM T BEGIN x := 1 + 2 * 3 END").expect("parse failed");
        let Statement::Assignment(assignment) = &program.body[0] else {
            panic!("expected assignment");
        };
        let Expression::Binary(add) = &assignment.value else {
            panic!("expected binary op");
        };
        assert_eq!(add.verb, BinaryVerb::Add);
        let Expression::Binary(mul) = add.rhs.as_ref() else {
            panic!("expected nested multiplication");
        };
        assert_eq!(mul.verb, BinaryVerb::Mul);
    }

    #[test]
    fn test_left_associativity() {
        let program = parse_source("ALGORITHM T BEGIN x := 10 - 4 - 3 END").expect("parse failed");
        let Statement::Assignment(assignment) = &program.body[0] else {
            panic!("expected assignment");
        };
        // (10 - 4) - 3
        let Expression::Binary(outer) = &assignment.value else {
            panic!("expected binary op");
        };
        assert_eq!(outer.verb, BinaryVerb::Sub);
        assert!(matches!(outer.lhs.as_ref(), Expression::Binary(_)));
        assert!(matches!(outer.rhs.as_ref(), Expression::Literal(_)));
    }

    #[test]
    fn test_parse_if_else() {
        let program = parse_source(
            "ALGORITHM T BEGIN IF x > 0 THEN PRINT(x) ELSE PRINT(0) END_IF END",
        )
        .expect("parse failed");
        let Statement::If(if_statement) = &program.body[0] else {
            panic!("expected if");
        };
        assert_eq!(if_statement.then_branch.len(), 1);
        assert!(if_statement.else_branch.is_some());
    }

    #[test]
    fn test_parse_for_with_step() {
        let program = parse_source(
            "ALGORITHM T BEGIN FOR i := 3 TO 1 STEP -1 REPEAT PRINT(i) END_FOR END",
        )
        .expect("parse failed");
        let Statement::For(for_loop) = &program.body[0] else {
            panic!("expected for loop");
        };
        assert_eq!(for_loop.variable, "i");
        assert!(for_loop.step.is_some());
    }

    #[test]
    fn test_while_and_repeat_share_node() {
        let program = parse_source(
            "ALGORITHM T BEGIN WHILE x < 3 REPEAT x := x + 1 END_WHILE REPEAT x := x - 1 UNTIL x = 0 END",
        )
        .expect("parse failed");
        let Statement::While(while_loop) = &program.body[0] else {
            panic!("expected while");
        };
        assert!(!while_loop.is_repeat_until);
        let Statement::While(repeat_loop) = &program.body[1] else {
            panic!("expected repeat-until");
        };
        assert!(repeat_loop.is_repeat_until);
    }

    #[test]
    fn test_parse_function_interface_modes() {
        let source = "ALGORITHM T
FUNCTION SUM(n): INTEGER
INTERFACE
INPUT n: INTEGER;
OUTPUT SUM: INTEGER;
BEGIN
SUM := n
END_FUNCTION
PROCEDURE SWAP(a, b)
INTERFACE
INPUT a, b: INTEGER;
OUTPUT a, b: INTEGER;
BEGIN
END_PROCEDURE
BEGIN END";
        let program = parse_source(source).expect("parse failed");

        let Declaration::Subroutine(function) = &program.declarations[0] else {
            panic!("expected function");
        };
        assert_eq!(function.kind, SubroutineKind::Function);
        assert_eq!(function.return_type, Some(TypeName::Integer));
        // SUM in OUTPUT is the return slot, not a parameter.
        assert_eq!(function.parameters.len(), 1);
        assert!(!function.parameters[0].by_reference);

        let Declaration::Subroutine(procedure) = &program.declarations[1] else {
            panic!("expected procedure");
        };
        assert_eq!(procedure.parameters.len(), 2);
        assert!(procedure.parameters.iter().all(|param| param.by_reference));
    }

    #[test]
    fn test_output_only_parameter_is_by_reference() {
        let source = "ALGORITHM T
PROCEDURE INIT(x)
INTERFACE
OUTPUT x: INTEGER;
BEGIN
x := 0
END_PROCEDURE
BEGIN END";
        let program = parse_source(source).expect("parse failed");
        let Declaration::Subroutine(procedure) = &program.declarations[0] else {
            panic!("expected procedure");
        };
        assert_eq!(procedure.parameters.len(), 1);
        assert!(procedure.parameters[0].by_reference);
    }

    #[test]
    fn test_calculate_prefix_and_percent_arguments() {
        let program = parse_source(
            "ALGORITHM T BEGIN CALCULATE SWAP(%x, %y); PRINT(%x) END",
        )
        .expect("parse failed");
        let Statement::Call(call) = &program.body[0] else {
            panic!("expected call");
        };
        assert_eq!(call.arguments.len(), 2);
        assert!(call.is_statement);
    }

    #[test]
    fn test_error_reports_line_and_history() {
        let error = parse_source("ALGORITHM T BEGIN x := ; END").expect_err("should fail");
        assert!(error.message.contains("got ;"), "{}", error.message);
        assert!(error.message.contains("after"), "{}", error.message);
        assert_eq!(error.position.map(|position| position.0), Some(1));
    }

    #[test]
    fn test_reparse_is_equivalent() {
        let source = "ALGORITHM T DATA x: INTEGER; BEGIN x := 1 + 2; PRINT(x) END";
        let first = parse_source(source).expect("parse failed");
        let second = parse_source(source).expect("parse failed");
        assert_eq!(first, second);
    }
}
