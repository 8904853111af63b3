//! Tree-walking evaluator over a scope-chained environment.

mod environment;
mod value;

pub use environment::*;
pub use value::*;

use std::io::{BufRead, Write};
use std::{error::Error, fmt::Display};

use log::debug;

use crate::parser::ast::{
    Assignment, BinaryOp, BinaryVerb, Call, Declaration, Expression, ForLoop, If, Literal,
    LiteralValue, Print, Program, Read, Statement, SubroutineKind, UnaryOp, UnaryVerb, VarDecl,
    WhileLoop,
};
use crate::util::{canonical, fold_bound};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError(pub(crate) String);

pub type RuntimeResult<T> = Result<T, RuntimeError>;

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Error for RuntimeError {}

/// Executes a program against the given input and output streams. The
/// streams are generic so tests can run whole programs against byte
/// buffers; the binary hands in locked stdio.
pub struct Interpreter<'a, R, W> {
    program: &'a Program,
    env: Environment<'a>,
    constants: std::collections::HashMap<String, i64>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Interpreter<'a, R, W> {
    pub fn new(program: &'a Program, input: R, output: W) -> Self {
        Self {
            program,
            env: Environment::new(),
            constants: std::collections::HashMap::new(),
            input,
            output,
        }
    }

    /// Run the program: seed the end-of-line constant, evaluate constant
    /// declarations and register subroutines, build variables and arrays,
    /// then execute the main body.
    pub fn run(&mut self) -> RuntimeResult<()> {
        let program = self.program;
        debug!("running program '{}'", program.name);

        self.env.set("EOLN", Value::eoln());
        self.env.set("ΑΛΛΑΓΗ_ΓΡΑΜΜΗΣ", Value::eoln());

        for declaration in &program.declarations {
            match declaration {
                Declaration::Constant(constant) => {
                    let value = self.evaluate(&constant.value)?;
                    if let Value::Int(int) = value {
                        self.constants.insert(canonical(&constant.name), int);
                    }
                    self.env.set(&constant.name, value);
                }
                Declaration::Subroutine(subroutine) => self.env.register(subroutine),
                Declaration::Variable(_) => {}
            }
        }

        for declaration in &program.declarations {
            if let Declaration::Variable(variable) = declaration {
                self.declare_variable(variable)?;
            }
        }

        for statement in &program.body {
            self.execute(statement)?;
        }

        Ok(())
    }

    /// Bind one declared variable: arrays get an object built from their
    /// folded bounds, scalars a zero integer placeholder.
    fn declare_variable(&mut self, variable: &VarDecl) -> RuntimeResult<()> {
        if !variable.is_array() {
            self.env.set(&variable.name, Value::Int(0));
            return Ok(());
        }

        let mut bounds = vec![];
        for bound in &variable.dimensions {
            let from = fold_bound(&bound.from, &self.constants);
            let to = fold_bound(&bound.to, &self.constants);
            let (Some(from), Some(to)) = (from, to) else {
                return Err(RuntimeError(format!(
                    "Array bound of '{}' is not a constant integer",
                    variable.name
                )));
            };
            bounds.push((from, to));
        }

        self.env
            .set(&variable.name, Value::Array(ArrayObject::handle(bounds)));
        Ok(())
    }

    fn execute(&mut self, statement: &'a Statement) -> RuntimeResult<()> {
        match statement {
            Statement::Assignment(assignment) => self.execute_assignment(assignment),
            Statement::Print(print) => self.execute_print(print),
            Statement::Read(read) => self.execute_read(read),
            Statement::If(if_statement) => self.execute_if(if_statement),
            Statement::For(for_loop) => self.execute_for(for_loop),
            Statement::While(while_loop) => self.execute_while(while_loop),
            Statement::Call(call) => self.call_subroutine(call).map(|_| ()),
        }
    }

    fn execute_assignment(&mut self, assignment: &Assignment) -> RuntimeResult<()> {
        let value = self.evaluate(&assignment.value)?;

        if assignment.indices.is_empty() {
            self.env.assign(&assignment.target, value);
        } else {
            let indices = self.evaluate_indices(&assignment.indices)?;
            let handle = self.array_handle(&assignment.target)?;
            handle.borrow_mut().set(&indices, value)?;
        }

        Ok(())
    }

    /// Print arguments separated by single spaces; the end-of-line
    /// sentinel emits a newline instead and suppresses the separator.
    fn execute_print(&mut self, print: &Print) -> RuntimeResult<()> {
        let mut separate = false;

        for argument in &print.arguments {
            let value = self.evaluate(argument)?;
            if value.is_eoln() {
                writeln!(self.output).map_err(io_error)?;
                separate = false;
            } else {
                if separate {
                    write!(self.output, " ").map_err(io_error)?;
                }
                write!(self.output, "{value}").map_err(io_error)?;
                separate = true;
            }
        }

        Ok(())
    }

    /// Read one line of input per target. End of input ends the loop
    /// silently; an empty line reads as integer -1.
    fn execute_read(&mut self, read: &Read) -> RuntimeResult<()> {
        self.output.flush().map_err(io_error)?;

        for target in &read.targets {
            let mut line = String::new();
            let read_bytes = self.input.read_line(&mut line).map_err(io_error)?;
            if read_bytes == 0 {
                break;
            }

            let value = parse_input_line(&line);
            match target {
                Expression::Ident(ident) => self.env.assign(&ident.name, value),
                Expression::ArrayAccess(access) => {
                    let indices = self.evaluate_indices(&access.indices)?;
                    let handle = self.array_handle(&access.name)?;
                    handle.borrow_mut().set(&indices, value)?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn execute_if(&mut self, if_statement: &'a If) -> RuntimeResult<()> {
        if self.evaluate(&if_statement.condition)?.truthy() {
            for statement in &if_statement.then_branch {
                self.execute(statement)?;
            }
        } else if let Some(else_branch) = &if_statement.else_branch {
            for statement in else_branch {
                self.execute(statement)?;
            }
        }

        Ok(())
    }

    /// Start, end, and step evaluate once, to integers. A positive step
    /// loops while the counter is at most the end, otherwise while it is
    /// at least the end; a zero step is not guarded.
    fn execute_for(&mut self, for_loop: &'a ForLoop) -> RuntimeResult<()> {
        let start = self.evaluate(&for_loop.start)?.as_int();
        let end = self.evaluate(&for_loop.end)?.as_int();
        let step = match &for_loop.step {
            Some(expression) => self.evaluate(expression)?.as_int(),
            None => 1,
        };

        let mut counter = start;
        loop {
            let finished = if step > 0 { counter > end } else { counter < end };
            if finished {
                break;
            }

            self.env.set(&for_loop.variable, Value::Int(counter));
            for statement in &for_loop.body {
                self.execute(statement)?;
            }

            counter += step;
        }

        Ok(())
    }

    fn execute_while(&mut self, while_loop: &'a WhileLoop) -> RuntimeResult<()> {
        if while_loop.is_repeat_until {
            loop {
                for statement in &while_loop.body {
                    self.execute(statement)?;
                }
                if self.evaluate(&while_loop.condition)?.truthy() {
                    break;
                }
            }
        } else {
            while self.evaluate(&while_loop.condition)?.truthy() {
                for statement in &while_loop.body {
                    self.execute(statement)?;
                }
            }
        }

        Ok(())
    }

    /// Call a subroutine: evaluate arguments in the caller's environment,
    /// push a frame, bind locals and parameters, run the body, then copy
    /// final by-reference parameter values back to the caller's bindings.
    fn call_subroutine(&mut self, call: &Call) -> RuntimeResult<Value> {
        let Some(subroutine) = self.env.find_subroutine(&call.name) else {
            return Err(match self.env.find(&call.name) {
                Some(_) => RuntimeError(format!("Cannot call '{}'", call.name)),
                None => RuntimeError(format!("Unknown identifier '{}'", call.name)),
            });
        };
        debug!("calling {}", subroutine.name);

        let mut arguments = vec![];
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        self.env.push();

        for local in &subroutine.locals {
            self.declare_variable(local)?;
        }

        if subroutine.kind == SubroutineKind::Function {
            self.env.set(&subroutine.name, Value::Real(0.0));
        }

        for (parameter, value) in subroutine.parameters.iter().zip(arguments) {
            self.env.set(&parameter.name, value);
        }

        for statement in &subroutine.body {
            self.execute(statement)?;
        }

        let result = if subroutine.kind == SubroutineKind::Function {
            self.env
                .find_value(&subroutine.name)
                .unwrap_or(Value::Real(0.0))
        } else {
            Value::None
        };

        // Collect final by-reference values before the frame goes away.
        let mut write_backs = vec![];
        for (index, parameter) in subroutine.parameters.iter().enumerate() {
            if !parameter.by_reference {
                continue;
            }
            if let (Some(argument), Some(value)) = (
                call.arguments.get(index),
                self.env.find_value(&parameter.name),
            ) {
                write_backs.push((argument, value));
            }
        }

        self.env.pop();

        for (argument, value) in write_backs {
            match argument {
                Expression::Ident(ident) => self.env.assign(&ident.name, value),
                Expression::ArrayAccess(access) => {
                    let indices = self.evaluate_indices(&access.indices)?;
                    let handle = self.array_handle(&access.name)?;
                    handle.borrow_mut().set(&indices, value)?;
                }
                // Any other argument form is silently ignored.
                _ => {}
            }
        }

        Ok(result)
    }

    fn evaluate(&mut self, expression: &Expression) -> RuntimeResult<Value> {
        match expression {
            Expression::Literal(literal) => Ok(literal_value(literal)),
            Expression::Ident(ident) => self
                .env
                .find_value(&ident.name)
                .ok_or_else(|| RuntimeError(format!("Unknown identifier '{}'", ident.name))),
            Expression::ArrayAccess(access) => {
                let indices = self.evaluate_indices(&access.indices)?;
                let handle = self.array_handle(&access.name)?;
                let value = handle.borrow().get(&indices)?;
                Ok(value)
            }
            Expression::Unary(unary) => self.evaluate_unary(unary),
            Expression::Binary(binary) => self.evaluate_binary(binary),
            Expression::Call(call) => self.call_subroutine(call),
        }
    }

    fn evaluate_unary(&mut self, unary: &UnaryOp) -> RuntimeResult<Value> {
        let operand = self.evaluate(&unary.operand)?;

        Ok(match unary.verb {
            UnaryVerb::Not => Value::Bool(!operand.truthy()),
            UnaryVerb::Neg => {
                if operand.is_real() {
                    Value::Real(-operand.as_real())
                } else {
                    Value::Int(-operand.as_int())
                }
            }
        })
    }

    fn evaluate_binary(&mut self, binary: &BinaryOp) -> RuntimeResult<Value> {
        let lhs = self.evaluate(&binary.lhs)?;
        let rhs = self.evaluate(&binary.rhs)?;

        match binary.verb {
            BinaryVerb::Add => Ok(arithmetic(&lhs, &rhs, |a, b| a + b, |a, b| a + b)),
            BinaryVerb::Sub => Ok(arithmetic(&lhs, &rhs, |a, b| a - b, |a, b| a - b)),
            BinaryVerb::Mul => Ok(arithmetic(&lhs, &rhs, |a, b| a * b, |a, b| a * b)),
            BinaryVerb::Div => {
                if rhs.as_real() == 0.0 {
                    return Err(RuntimeError("Division by zero in '/'".into()));
                }
                Ok(Value::Real(lhs.as_real() / rhs.as_real()))
            }
            BinaryVerb::IntDiv => {
                if rhs.as_int() == 0 {
                    return Err(RuntimeError("Division by zero in 'DIV'".into()));
                }
                Ok(Value::Int(lhs.as_int() / rhs.as_int()))
            }
            BinaryVerb::Mod => {
                if rhs.as_int() == 0 {
                    return Err(RuntimeError("Division by zero in 'MOD'".into()));
                }
                Ok(Value::Int(lhs.as_int() % rhs.as_int()))
            }
            BinaryVerb::Equal => Ok(Value::Bool(compare(&lhs, &rhs) == std::cmp::Ordering::Equal)),
            BinaryVerb::NotEqual => {
                Ok(Value::Bool(compare(&lhs, &rhs) != std::cmp::Ordering::Equal))
            }
            BinaryVerb::Less => Ok(Value::Bool(compare(&lhs, &rhs) == std::cmp::Ordering::Less)),
            BinaryVerb::LessEqual => {
                Ok(Value::Bool(compare(&lhs, &rhs) != std::cmp::Ordering::Greater))
            }
            BinaryVerb::Greater => {
                Ok(Value::Bool(compare(&lhs, &rhs) == std::cmp::Ordering::Greater))
            }
            BinaryVerb::GreaterEqual => {
                Ok(Value::Bool(compare(&lhs, &rhs) != std::cmp::Ordering::Less))
            }
            // Both operands always evaluate; only the combination is logical.
            BinaryVerb::And => Ok(Value::Bool(lhs.truthy() && rhs.truthy())),
            BinaryVerb::Or => Ok(Value::Bool(lhs.truthy() || rhs.truthy())),
        }
    }

    fn evaluate_indices(&mut self, expressions: &[Expression]) -> RuntimeResult<Vec<i64>> {
        expressions
            .iter()
            .map(|expression| Ok(self.evaluate(expression)?.as_int()))
            .collect()
    }

    fn array_handle(
        &mut self,
        name: &str,
    ) -> RuntimeResult<std::rc::Rc<std::cell::RefCell<ArrayObject>>> {
        match self.env.find_value(name) {
            Some(Value::Array(handle)) => Ok(handle),
            Some(_) => Err(RuntimeError(format!("'{name}' is not an array"))),
            None => Err(RuntimeError(format!("Unknown identifier '{name}'"))),
        }
    }
}

fn literal_value(literal: &Literal) -> Value {
    match &literal.value {
        LiteralValue::Int(value) => Value::Int(*value),
        LiteralValue::Real(value) => Value::Real(*value),
        LiteralValue::Bool(value) => Value::Bool(*value),
        LiteralValue::Str(text) => Value::string(text),
    }
}

/// Arithmetic promotes to real when either operand is real.
fn arithmetic(
    lhs: &Value,
    rhs: &Value,
    int_op: fn(i64, i64) -> i64,
    real_op: fn(f64, f64) -> f64,
) -> Value {
    if lhs.is_real() || rhs.is_real() {
        Value::Real(real_op(lhs.as_real(), rhs.as_real()))
    } else {
        Value::Int(int_op(lhs.as_int(), rhs.as_int()))
    }
}

/// Comparisons are lexicographic when both sides are strings and numeric
/// over reals otherwise.
fn compare(lhs: &Value, rhs: &Value) -> std::cmp::Ordering {
    if let (Value::Str(left), Value::Str(right)) = (lhs, rhs) {
        return left.as_ref().cmp(right.as_ref());
    }

    lhs.as_real()
        .partial_cmp(&rhs.as_real())
        .unwrap_or(std::cmp::Ordering::Equal)
}

/// One line of input: real if it contains a decimal point, integer if it
/// begins with a digit or minus sign, otherwise a string. Empty input is
/// integer -1. Numeric parsing reads the longest leading number, like the
/// C standard library conversions.
fn parse_input_line(line: &str) -> Value {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.is_empty() {
        return Value::Int(-1);
    }
    if line.contains('.') {
        return Value::Real(leading_f64(line));
    }

    let starts_numeric = line
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-');
    if starts_numeric {
        return Value::Int(leading_i64(line));
    }

    Value::string(line)
}

fn leading_i64(text: &str) -> i64 {
    let mut end = 0;
    for (index, c) in text.char_indices() {
        if (index == 0 && (c == '-' || c == '+')) || c.is_ascii_digit() {
            end = index + c.len_utf8();
        } else {
            break;
        }
    }
    text[..end].parse().unwrap_or(0)
}

fn leading_f64(text: &str) -> f64 {
    let mut end = 0;
    let mut seen_point = false;
    for (index, c) in text.char_indices() {
        match c {
            '-' | '+' if index == 0 => end = index + 1,
            '.' if !seen_point => {
                seen_point = true;
                end = index + 1;
            }
            c if c.is_ascii_digit() => end = index + c.len_utf8(),
            _ => break,
        }
    }
    text[..end].parse().unwrap_or(0.0)
}

fn io_error(error: std::io::Error) -> RuntimeError {
    RuntimeError(format!("I/O error: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::parse;

    fn run_with_input(source: &str, input: &str) -> RuntimeResult<String> {
        let tokens = Lexer::new(source).lex().expect("lexing failed");
        let program = parse(tokens, source).expect("parsing failed");
        let mut output = Vec::new();
        let mut interpreter = Interpreter::new(&program, input.as_bytes(), &mut output);
        interpreter.run()?;
        drop(interpreter);
        Ok(String::from_utf8(output).expect("output was not UTF-8"))
    }

    fn run(source: &str) -> String {
        run_with_input(source, "").expect("program failed")
    }

    #[test]
    fn test_arithmetic_and_print() {
        let output = run(
            "ALGORITHM T CONSTANTS N = 3; DATA x: INTEGER; BEGIN x := N*N + 1; PRINT(x) END",
        );
        assert_eq!(output, "10");
    }

    #[test]
    fn test_for_loop_descending() {
        let output = run(
            "ALGORITHM T DATA i: INTEGER; BEGIN FOR i := 3 TO 1 STEP -1 REPEAT PRINT(i, EOLN) END_FOR END",
        );
        assert_eq!(output, "3\n2\n1\n");
    }

    #[test]
    fn test_array_with_shifted_origin() {
        let output = run(
            "ALGORITHM T DATA A: ARRAY [2..4] OF INTEGER; i: INTEGER; \
             BEGIN FOR i := 2 TO 4 REPEAT A[i] := i*i END_FOR PRINT(A[2], A[3], A[4]) END",
        );
        assert_eq!(output, "4 9 16");
    }

    #[test]
    fn test_repeat_until() {
        let output = run(
            "ALGORITHM T DATA i: INTEGER; BEGIN i := 0; REPEAT i := i + 1 UNTIL i = 3; PRINT(i) END",
        );
        assert_eq!(output, "3");
    }

    #[test]
    fn test_swap_procedure_by_reference() {
        let source = "ALGORITHM T
DATA x, y: INTEGER;
PROCEDURE SWAP(a, b)
INTERFACE
INPUT a, b: INTEGER;
OUTPUT a, b: INTEGER;
DATA t: INTEGER;
BEGIN
t := a; a := b; b := t
END_PROCEDURE
BEGIN
x := 1; y := 2;
SWAP(x, y);
PRINT(x, y)
END";
        assert_eq!(run(source), "2 1");
    }

    #[test]
    fn test_function_return_slot() {
        let source = "ALGORITHM T
DATA i: INTEGER;
FUNCTION SUM(n): INTEGER
INTERFACE
INPUT n: INTEGER;
OUTPUT SUM: INTEGER;
DATA k: INTEGER;
BEGIN
SUM := 0;
FOR k := 1 TO n REPEAT
SUM := SUM + k
END_FOR
END_FUNCTION
BEGIN
PRINT(SUM(10))
END";
        assert_eq!(run(source), "55");
    }

    #[test]
    fn test_array_aliases_into_subroutine() {
        let source = "ALGORITHM T
DATA A: ARRAY [1..3] OF INTEGER;
PROCEDURE FILL(p)
INTERFACE
INPUT p: INTEGER;
DATA k: INTEGER;
BEGIN
FOR k := 1 TO 3 REPEAT p[k] := k * 10 END_FOR
END_PROCEDURE
BEGIN
FILL(A);
PRINT(A[1], A[2], A[3])
END";
        assert_eq!(run(source), "10 20 30");
    }

    #[test]
    fn test_division_always_real() {
        assert_eq!(run("ALGORITHM T BEGIN PRINT(7 / 2) END"), "3.5");
        assert_eq!(run("ALGORITHM T BEGIN PRINT(7 DIV 2, 7 MOD 2) END"), "3 1");
    }

    #[test]
    fn test_division_by_zero_is_fatal() {
        let error =
            run_with_input("ALGORITHM T BEGIN PRINT(1 DIV 0) END", "").expect_err("should fail");
        assert!(error.to_string().contains("DIV"), "{error}");
    }

    #[test]
    fn test_index_out_of_bounds_is_fatal() {
        let error = run_with_input(
            "ALGORITHM T DATA A: ARRAY [2..4] OF INTEGER; BEGIN A[5] := 1 END",
            "",
        )
        .expect_err("should fail");
        let message = error.to_string();
        assert!(message.contains("out of bounds"), "{message}");
        assert!(message.contains("[2..4]"), "{message}");
    }

    #[test]
    fn test_unknown_identifier_is_fatal() {
        let error =
            run_with_input("ALGORITHM T BEGIN PRINT(nope) END", "").expect_err("should fail");
        assert!(error.to_string().contains("nope"), "{error}");
    }

    #[test]
    fn test_calling_a_variable_is_fatal() {
        let error = run_with_input(
            "ALGORITHM T DATA x: INTEGER; BEGIN CALCULATE x(1) END",
            "",
        )
        .expect_err("should fail");
        assert!(error.to_string().contains("Cannot call"), "{error}");
    }

    #[test]
    fn test_read_parses_by_shape() {
        let source = "ALGORITHM T DATA a, b, c, d: INTEGER; BEGIN READ(a, b, c, d); PRINT(a, b, c, d) END";
        let output = run_with_input(source, "42\n3.5\nhello\n\n").expect("program failed");
        assert_eq!(output, "42 3.5 hello -1");
    }

    #[test]
    fn test_read_stops_silently_at_end_of_input() {
        let source = "ALGORITHM T DATA a, b: INTEGER; BEGIN READ(a, b); PRINT(a, b) END";
        let output = run_with_input(source, "5\n").expect("program failed");
        assert_eq!(output, "5 0");
    }

    #[test]
    fn test_case_insensitive_execution_matches() {
        let upper = run("ALGORITHM T DATA X: INTEGER; BEGIN X := 2; PRINT(x * X) END");
        let lower = run("algorithm t data x: integer; begin x := 2; print(X * x) end");
        assert_eq!(upper, lower);
        assert_eq!(upper, "4");
    }

    #[test]
    fn test_greek_program_runs() {
        let source = "ΑΛΓΟΡΙΘΜΟΣ Δοκιμή
ΔΕΔΟΜΕΝΑ i: ΑΚΕΡΑΙΟΣ;
ΑΡΧΗ
ΓΙΑ i := 1 ΕΩΣ 3 ΕΠΑΝΑΛΑΒΕ
ΓΡΑΨΕ(i, ΑΛΛΑΓΗ_ΓΡΑΜΜΗΣ)
ΤΕΛΟΣ_ΕΠΑΝΑΛΗΨΗΣ
ΤΕΛΟΣ";
        assert_eq!(run(source), "1\n2\n3\n");
    }

    #[test]
    fn test_constants_reference_earlier_constants() {
        let output = run("ALGORITHM T CONSTANTS A = 2; B = A * 3; BEGIN PRINT(B) END");
        assert_eq!(output, "6");
    }

    #[test]
    fn test_logical_operators_fully_evaluate() {
        let output = run("ALGORITHM T BEGIN PRINT(1 AND 0, 1 OR 0, NOT 1) END");
        assert_eq!(output, "0 1 0");
    }

    #[test]
    fn test_while_loop() {
        let output = run(
            "ALGORITHM T DATA n: INTEGER; BEGIN n := 1; WHILE n < 100 REPEAT n := n * 2 END_WHILE PRINT(n) END",
        );
        assert_eq!(output, "128");
    }

    #[test]
    fn test_two_dimensional_array() {
        let source = "ALGORITHM T
DATA M: ARRAY [0..1, 0..2] OF INTEGER; i, j: INTEGER;
BEGIN
FOR i := 0 TO 1 REPEAT
FOR j := 0 TO 2 REPEAT
M[i, j] := i * 3 + j
END_FOR
END_FOR
PRINT(M[1, 2])
END";
        assert_eq!(run(source), "5");
    }

    #[test]
    fn test_function_argument_passes_by_value() {
        let source = "ALGORITHM T
DATA x: INTEGER;
PROCEDURE BUMP(n)
INTERFACE
INPUT n: INTEGER;
BEGIN
n := n + 1
END_PROCEDURE
BEGIN
x := 5;
BUMP(x);
PRINT(x)
END";
        assert_eq!(run(source), "5");
    }
}
