//! AST-to-C lowering.
//!
//! The emitted translation unit follows a fixed layout: header comment,
//! includes, constant macros, forward declarations, globals, subroutine
//! bodies, `main`. Array indices are origin-corrected to zero-based
//! storage and reference parameters become pointers.

use std::collections::{HashMap, HashSet};
use std::{error::Error, fmt::Display};

use crate::parser::ast::{
    Assignment, BinaryVerb, Call, ConstDecl, Declaration, Expression, ForLoop, If, LiteralValue,
    Print, Program, Read, Statement, Subroutine, SubroutineKind, TypeName, UnaryVerb, VarDecl,
    WhileLoop,
};
use crate::util::{canonical, fold_bound};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenError(String);

pub type CodegenResult<T> = Result<T, CodegenError>;

impl Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Error for CodegenError {}

/// Size of the fixed buffer backing a string variable.
const STRING_LEN: usize = 1024;

/// Target-side scalar types. Booleans are `int`s; strings are `char`
/// buffers as variables and `char *` as parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CType {
    Int,
    Double,
    Char,
    Text,
}

impl CType {
    fn from_type(name: TypeName) -> Self {
        match name {
            TypeName::Integer | TypeName::Boolean => CType::Int,
            TypeName::Real => CType::Double,
            TypeName::Char => CType::Char,
            TypeName::Text => CType::Text,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            CType::Int => "int",
            CType::Double => "double",
            CType::Char => "char",
            CType::Text => "char *",
        }
    }

    fn print_specifier(self) -> &'static str {
        match self {
            CType::Int => "%d",
            CType::Double => "%g",
            CType::Char => "%c",
            CType::Text => "%s",
        }
    }

    fn scan_specifier(self) -> &'static str {
        match self {
            CType::Int => "%d",
            CType::Double => "%lf",
            CType::Char => " %c",
            CType::Text => "%s",
        }
    }
}

/// Per-dimension origin and size of a declared array.
#[derive(Debug, Clone)]
struct ArrayInfo {
    origins: Vec<i64>,
    sizes: Vec<i64>,
    element: CType,
}

pub struct CodeGenerator<'a> {
    program: &'a Program,
    out: String,
    indent: usize,
    constants: HashMap<String, i64>,
    arrays: HashMap<String, ArrayInfo>,
    var_types: HashMap<String, CType>,
    subroutines: HashMap<String, &'a Subroutine>,
    reference_params: HashSet<String>,
    current_function: Option<String>,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            out: String::new(),
            indent: 0,
            constants: HashMap::new(),
            arrays: HashMap::new(),
            var_types: HashMap::new(),
            subroutines: HashMap::new(),
            reference_params: HashSet::new(),
            current_function: None,
        }
    }

    pub fn generate(mut self) -> CodegenResult<String> {
        self.line(format!("/* Generated from algorithm '{}' */", self.program.name));
        self.line("#include <stdio.h>");
        self.line("#include <stdlib.h>");
        self.line("#include <string.h>");
        self.line("#include <math.h>");
        self.blank();

        self.emit_constants()?;
        self.emit_forward_declarations();
        self.emit_globals()?;
        self.emit_subroutines()?;
        self.emit_main()?;

        Ok(self.out)
    }

    fn emit_constants(&mut self) -> CodegenResult<()> {
        let mut any = false;

        for declaration in &self.program.declarations {
            if let Declaration::Constant(constant) = declaration {
                self.register_constant(constant);
                let name = sanitize(&constant.name);
                let value = self.expr(&constant.value);
                self.line(format!("#define {name} ({value})"));
                any = true;
            }
        }

        if any {
            self.blank();
        }
        Ok(())
    }

    fn register_constant(&mut self, constant: &ConstDecl) {
        if let Some(value) = fold_bound(&constant.value, &self.constants) {
            self.constants.insert(canonical(&constant.name), value);
        }
    }

    fn emit_forward_declarations(&mut self) {
        let mut any = false;

        for declaration in &self.program.declarations {
            if let Declaration::Subroutine(subroutine) = declaration {
                self.subroutines
                    .insert(canonical(&subroutine.name), subroutine);
                let signature = self.signature(subroutine);
                self.line(format!("{signature};"));
                any = true;
            }
        }

        if any {
            self.blank();
        }
    }

    fn emit_globals(&mut self) -> CodegenResult<()> {
        let mut any = false;

        for declaration in &self.program.declarations {
            if let Declaration::Variable(variable) = declaration {
                self.declare_variable(variable)?;
                any = true;
            }
        }

        if any {
            self.blank();
        }
        Ok(())
    }

    /// Emit storage for one variable and record its type. Arrays fold
    /// their bounds against the constant table and declare
    /// `to - from + 1` cells per dimension.
    fn declare_variable(&mut self, variable: &VarDecl) -> CodegenResult<()> {
        let ctype = CType::from_type(variable.var_type);
        let name = sanitize(&variable.name);

        if !variable.is_array() {
            self.var_types.insert(canonical(&variable.name), ctype);
            let declaration = match ctype {
                CType::Text => format!("char {name}[{STRING_LEN}];"),
                other => format!("{} {name};", other.keyword()),
            };
            self.line(declaration);
            return Ok(());
        }

        let mut origins = vec![];
        let mut sizes = vec![];
        for bound in &variable.dimensions {
            let from = fold_bound(&bound.from, &self.constants);
            let to = fold_bound(&bound.to, &self.constants);
            let (Some(from), Some(to)) = (from, to) else {
                return Err(CodegenError(format!(
                    "Array bound of '{}' is not a constant integer",
                    variable.name
                )));
            };
            origins.push(from);
            sizes.push(to - from + 1);
        }

        let key = canonical(&variable.name);
        self.arrays.insert(
            key.clone(),
            ArrayInfo {
                origins,
                sizes,
                element: ctype,
            },
        );

        let dims: String = self.arrays[&key]
            .sizes
            .iter()
            .map(|size| format!("[{size}]"))
            .collect();
        let declaration = match ctype {
            CType::Text => format!("char {name}{dims}[{STRING_LEN}];"),
            other => format!("{} {name}{dims};", other.keyword()),
        };
        self.line(declaration);
        Ok(())
    }

    fn emit_subroutines(&mut self) -> CodegenResult<()> {
        for declaration in &self.program.declarations {
            if let Declaration::Subroutine(subroutine) = declaration {
                self.emit_subroutine(subroutine)?;
                self.blank();
            }
        }
        Ok(())
    }

    fn signature(&self, subroutine: &Subroutine) -> String {
        let return_type = match subroutine.kind {
            SubroutineKind::Function => {
                CType::from_type(subroutine.return_type.unwrap_or(TypeName::Integer)).keyword()
            }
            SubroutineKind::Procedure => "void",
        };

        let parameters = if subroutine.parameters.is_empty() {
            "void".to_string()
        } else {
            subroutine
                .parameters
                .iter()
                .map(|parameter| {
                    let ctype = CType::from_type(parameter.param_type);
                    let name = sanitize(&parameter.name);
                    match (ctype, parameter.by_reference) {
                        // Strings are already pointers either way.
                        (CType::Text, _) => format!("char *{name}"),
                        (other, true) => format!("{} *{name}", other.keyword()),
                        (other, false) => format!("{} {name}", other.keyword()),
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!("{return_type} {}({parameters})", sanitize(&subroutine.name))
    }

    fn emit_subroutine(&mut self, subroutine: &'a Subroutine) -> CodegenResult<()> {
        let saved_var_types = self.var_types.clone();
        let saved_arrays = self.arrays.clone();

        for parameter in &subroutine.parameters {
            self.var_types.insert(
                canonical(&parameter.name),
                CType::from_type(parameter.param_type),
            );
            if parameter.by_reference && parameter.param_type != TypeName::Text {
                self.reference_params.insert(canonical(&parameter.name));
            }
        }

        if subroutine.kind == SubroutineKind::Function {
            self.current_function = Some(canonical(&subroutine.name));
        }

        let signature = self.signature(subroutine);
        self.line(format!("{signature} {{"));
        self.indent += 1;

        if subroutine.kind == SubroutineKind::Function {
            let ctype = CType::from_type(subroutine.return_type.unwrap_or(TypeName::Integer));
            let result = result_slot(&subroutine.name);
            match ctype {
                CType::Text => self.line(format!("char {result}[{STRING_LEN}] = \"\";")),
                other => self.line(format!("{} {result} = 0;", other.keyword())),
            }
        }

        for local in &subroutine.locals {
            self.declare_variable(local)?;
        }

        for statement in &subroutine.body {
            self.emit_statement(statement)?;
        }

        if subroutine.kind == SubroutineKind::Function {
            let result = result_slot(&subroutine.name);
            self.line(format!("return {result};"));
        }

        self.indent -= 1;
        self.line("}");

        self.var_types = saved_var_types;
        self.arrays = saved_arrays;
        self.reference_params.clear();
        self.current_function = None;
        Ok(())
    }

    fn emit_main(&mut self) -> CodegenResult<()> {
        self.line("int main(void) {");
        self.indent += 1;

        for statement in &self.program.body {
            self.emit_statement(statement)?;
        }

        self.line("return 0;");
        self.indent -= 1;
        self.line("}");
        Ok(())
    }

    fn emit_statement(&mut self, statement: &Statement) -> CodegenResult<()> {
        match statement {
            Statement::Assignment(assignment) => self.emit_assignment(assignment),
            Statement::Print(print) => self.emit_print(print),
            Statement::Read(read) => self.emit_read(read),
            Statement::If(if_statement) => self.emit_if(if_statement),
            Statement::For(for_loop) => self.emit_for(for_loop),
            Statement::While(while_loop) => self.emit_while(while_loop),
            Statement::Call(call) => {
                let text = self.call_expr(call);
                self.line(format!("{text};"));
                Ok(())
            }
        }
    }

    fn emit_assignment(&mut self, assignment: &Assignment) -> CodegenResult<()> {
        let value = self.expr(&assignment.value);
        let key = canonical(&assignment.target);

        // Assignments to the enclosing function's name write the result
        // mirror slot.
        if assignment.indices.is_empty() && self.current_function.as_deref() == Some(key.as_str()) {
            self.line(format!("{} = {value};", result_slot(&assignment.target)));
            return Ok(());
        }

        if !assignment.indices.is_empty() {
            let element = self.array_element(&assignment.target, &assignment.indices);
            self.line(format!("{element} = {value};"));
            return Ok(());
        }

        if self.var_types.get(&key) == Some(&CType::Text) {
            let name = sanitize(&assignment.target);
            self.line(format!("strcpy({name}, {value});"));
            return Ok(());
        }

        let target = self.ident_expr(&assignment.target);
        self.line(format!("{target} = {value};"));
        Ok(())
    }

    /// Build the printf call: one inferred specifier per argument with
    /// single-space separators; the end-of-line constant contributes a
    /// `%c` fed `'\n'` and suppresses the separator.
    fn emit_print(&mut self, print: &Print) -> CodegenResult<()> {
        let mut format = String::new();
        let mut arguments = vec![];
        let mut separate = false;

        for argument in &print.arguments {
            if is_eoln(argument) {
                format.push_str("%c");
                arguments.push("'\\n'".to_string());
                separate = false;
            } else {
                if separate {
                    format.push(' ');
                }
                format.push_str(self.specifier(argument));
                arguments.push(self.expr(argument));
                separate = true;
            }
        }

        if arguments.is_empty() {
            self.line("printf(\"\");");
        } else {
            self.line(format!("printf(\"{format}\", {});", arguments.join(", ")));
        }
        Ok(())
    }

    fn emit_read(&mut self, read: &Read) -> CodegenResult<()> {
        self.line("fflush(stdout);");

        for target in &read.targets {
            match target {
                Expression::Ident(ident) => {
                    let key = canonical(&ident.name);
                    let ctype = self.var_types.get(&key).copied().unwrap_or(CType::Int);
                    let name = sanitize(&ident.name);
                    let destination = match ctype {
                        // String buffers and pointer parameters already
                        // decay to addresses.
                        CType::Text => name,
                        _ if self.reference_params.contains(&key) => name,
                        _ => format!("&{name}"),
                    };
                    self.line(format!(
                        "scanf(\"{}\", {destination});",
                        ctype.scan_specifier()
                    ));
                }
                Expression::ArrayAccess(access) => {
                    let element = self.array_element(&access.name, &access.indices);
                    let ctype = self
                        .arrays
                        .get(&canonical(&access.name))
                        .map(|info| info.element)
                        .unwrap_or(CType::Int);
                    let destination = match ctype {
                        CType::Text => element,
                        _ => format!("&{element}"),
                    };
                    self.line(format!(
                        "scanf(\"{}\", {destination});",
                        ctype.scan_specifier()
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn emit_if(&mut self, if_statement: &If) -> CodegenResult<()> {
        let condition = self.expr(&if_statement.condition);
        self.line(format!("if ({condition}) {{"));
        self.indent += 1;
        for statement in &if_statement.then_branch {
            self.emit_statement(statement)?;
        }
        self.indent -= 1;

        if let Some(else_branch) = &if_statement.else_branch {
            self.line("} else {");
            self.indent += 1;
            for statement in else_branch {
                self.emit_statement(statement)?;
            }
            self.indent -= 1;
        }

        self.line("}");
        Ok(())
    }

    /// The comparison operator comes from the sign of a literal step;
    /// non-literal steps emit the ascending form.
    fn emit_for(&mut self, for_loop: &ForLoop) -> CodegenResult<()> {
        let variable = self.ident_expr(&for_loop.variable);
        let start = self.expr(&for_loop.start);
        let end = self.expr(&for_loop.end);

        let (comparison, step) = match &for_loop.step {
            None => ("<=", "1".to_string()),
            Some(expression) => {
                let comparison = match literal_step(expression) {
                    Some(value) if value < 0 => ">=",
                    _ => "<=",
                };
                (comparison, self.expr(expression))
            }
        };

        self.line(format!(
            "for ({variable} = {start}; {variable} {comparison} {end}; {variable} += {step}) {{"
        ));
        self.indent += 1;
        for statement in &for_loop.body {
            self.emit_statement(statement)?;
        }
        self.indent -= 1;
        self.line("}");
        Ok(())
    }

    fn emit_while(&mut self, while_loop: &WhileLoop) -> CodegenResult<()> {
        let condition = self.expr(&while_loop.condition);

        if while_loop.is_repeat_until {
            self.line("do {");
            self.indent += 1;
            for statement in &while_loop.body {
                self.emit_statement(statement)?;
            }
            self.indent -= 1;
            self.line(format!("}} while (!({condition}));"));
        } else {
            self.line(format!("while ({condition}) {{"));
            self.indent += 1;
            for statement in &while_loop.body {
                self.emit_statement(statement)?;
            }
            self.indent -= 1;
            self.line("}");
        }
        Ok(())
    }

    // Expression emission.

    fn expr(&self, expression: &Expression) -> String {
        match expression {
            Expression::Literal(literal) => match &literal.value {
                LiteralValue::Int(value) => value.to_string(),
                LiteralValue::Real(value) => {
                    if value.fract() == 0.0 {
                        format!("{value:.1}")
                    } else {
                        value.to_string()
                    }
                }
                LiteralValue::Bool(value) => (*value as i64).to_string(),
                LiteralValue::Str(text) => format!("\"{}\"", escape_c(text)),
            },
            Expression::Ident(ident) => {
                if is_eoln_name(&ident.name) {
                    "'\\n'".to_string()
                } else {
                    self.ident_expr(&ident.name)
                }
            }
            Expression::ArrayAccess(access) => self.array_element(&access.name, &access.indices),
            Expression::Unary(unary) => {
                let operand = self.expr(&unary.operand);
                match unary.verb {
                    UnaryVerb::Not => format!("!({operand})"),
                    UnaryVerb::Neg => format!("-({operand})"),
                }
            }
            Expression::Binary(binary) => {
                let lhs = self.expr(&binary.lhs);
                let rhs = self.expr(&binary.rhs);
                match binary.verb {
                    // `/` is real division regardless of operand types.
                    BinaryVerb::Div => format!("((double)({lhs}) / ({rhs}))"),
                    BinaryVerb::IntDiv => format!("(({lhs}) / ({rhs}))"),
                    BinaryVerb::Mod => format!("(({lhs}) % ({rhs}))"),
                    BinaryVerb::Add => format!("(({lhs}) + ({rhs}))"),
                    BinaryVerb::Sub => format!("(({lhs}) - ({rhs}))"),
                    BinaryVerb::Mul => format!("(({lhs}) * ({rhs}))"),
                    BinaryVerb::Equal => format!("(({lhs}) == ({rhs}))"),
                    BinaryVerb::NotEqual => format!("(({lhs}) != ({rhs}))"),
                    BinaryVerb::Less => format!("(({lhs}) < ({rhs}))"),
                    BinaryVerb::LessEqual => format!("(({lhs}) <= ({rhs}))"),
                    BinaryVerb::Greater => format!("(({lhs}) > ({rhs}))"),
                    BinaryVerb::GreaterEqual => format!("(({lhs}) >= ({rhs}))"),
                    BinaryVerb::And => format!("(({lhs}) && ({rhs}))"),
                    BinaryVerb::Or => format!("(({lhs}) || ({rhs}))"),
                }
            }
            Expression::Call(call) => self.call_expr(call),
        }
    }

    /// A plain identifier: reference parameters dereference, assignments
    /// to the enclosing function's name go through the result slot.
    fn ident_expr(&self, name: &str) -> String {
        let key = canonical(name);

        if self.current_function.as_deref() == Some(key.as_str()) {
            return result_slot(name);
        }
        if self.reference_params.contains(&key) {
            return format!("(*{})", sanitize(name));
        }

        sanitize(name)
    }

    /// An array element with per-dimension origin correction.
    fn array_element(&self, name: &str, indices: &[Expression]) -> String {
        let info = self.arrays.get(&canonical(name));
        let mut text = sanitize(name);

        for (dimension, index) in indices.iter().enumerate() {
            let index_text = self.expr(index);
            let origin = info
                .and_then(|info| info.origins.get(dimension))
                .copied()
                .unwrap_or(0);
            if origin == 0 {
                text.push_str(&format!("[{index_text}]"));
            } else if origin < 0 {
                text.push_str(&format!("[{index_text} + {}]", -origin));
            } else {
                text.push_str(&format!("[{index_text} - {origin}]"));
            }
        }

        text
    }

    /// A call site: arguments bound to reference parameters take the
    /// address-of operator when they are identifiers or array elements.
    fn call_expr(&self, call: &Call) -> String {
        let subroutine = self.subroutines.get(&canonical(&call.name)).copied();

        let arguments: Vec<String> = call
            .arguments
            .iter()
            .enumerate()
            .map(|(index, argument)| {
                let text = self.expr(argument);
                let by_reference = subroutine
                    .and_then(|subroutine| subroutine.parameters.get(index))
                    .map(|parameter| {
                        parameter.by_reference && parameter.param_type != TypeName::Text
                    })
                    .unwrap_or(false);

                if by_reference
                    && matches!(
                        argument,
                        Expression::Ident(_) | Expression::ArrayAccess(_)
                    )
                {
                    format!("&{text}")
                } else {
                    text
                }
            })
            .collect();

        format!("{}({})", sanitize(&call.name), arguments.join(", "))
    }

    /// Infer a print specifier from the argument's shape: literal type,
    /// declared variable type, or operator result. Anything uncovered is
    /// the integer specifier.
    fn specifier(&self, expression: &Expression) -> &'static str {
        match expression {
            Expression::Literal(literal) => match literal.value {
                LiteralValue::Real(_) => "%g",
                LiteralValue::Str(_) => "%s",
                _ => "%d",
            },
            Expression::Ident(ident) => self
                .var_types
                .get(&canonical(&ident.name))
                .copied()
                .unwrap_or(CType::Int)
                .print_specifier(),
            Expression::ArrayAccess(access) => self
                .arrays
                .get(&canonical(&access.name))
                .map(|info| info.element)
                .unwrap_or(CType::Int)
                .print_specifier(),
            Expression::Unary(unary) => match unary.verb {
                UnaryVerb::Neg => self.specifier(&unary.operand),
                UnaryVerb::Not => "%d",
            },
            Expression::Binary(_) => {
                if self.infers_real(expression) {
                    "%g"
                } else {
                    "%d"
                }
            }
            Expression::Call(call) => {
                let ctype = self
                    .subroutines
                    .get(&canonical(&call.name))
                    .and_then(|subroutine| subroutine.return_type)
                    .map(CType::from_type)
                    .unwrap_or(CType::Int);
                ctype.print_specifier()
            }
        }
    }

    /// Whether an expression's shape infers a real result: real division
    /// does, arithmetic does when either side does, and real-typed
    /// literals, variables, elements, and functions do.
    fn infers_real(&self, expression: &Expression) -> bool {
        match expression {
            Expression::Literal(literal) => matches!(literal.value, LiteralValue::Real(_)),
            Expression::Ident(ident) => {
                self.var_types.get(&canonical(&ident.name)) == Some(&CType::Double)
            }
            Expression::ArrayAccess(access) => self
                .arrays
                .get(&canonical(&access.name))
                .map(|info| info.element == CType::Double)
                .unwrap_or(false),
            Expression::Unary(unary) => {
                unary.verb == UnaryVerb::Neg && self.infers_real(&unary.operand)
            }
            Expression::Binary(binary) => match binary.verb {
                BinaryVerb::Div => true,
                BinaryVerb::Add | BinaryVerb::Sub | BinaryVerb::Mul => {
                    self.infers_real(&binary.lhs) || self.infers_real(&binary.rhs)
                }
                _ => false,
            },
            Expression::Call(call) => self
                .subroutines
                .get(&canonical(&call.name))
                .and_then(|subroutine| subroutine.return_type)
                .map(|return_type| CType::from_type(return_type) == CType::Double)
                .unwrap_or(false),
        }
    }

    // Output plumbing.

    fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }
}

/// Replace every character outside letters, digits, and underscore with
/// an underscore. Idempotent; collisions are accepted.
fn sanitize(name: &str) -> String {
    canonical(name)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn result_slot(function_name: &str) -> String {
    format!("{}_result", sanitize(function_name))
}

fn escape_c(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn is_eoln_name(name: &str) -> bool {
    let key = canonical(name);
    key == "EOLN" || key == "ΑΛΛΑΓΗ_ΓΡΑΜΜΗΣ"
}

fn is_eoln(expression: &Expression) -> bool {
    matches!(expression, Expression::Ident(ident) if is_eoln_name(&ident.name))
}

/// The integer value of a literal step, looking through unary minus.
fn literal_step(expression: &Expression) -> Option<i64> {
    match expression {
        Expression::Literal(literal) => match literal.value {
            LiteralValue::Int(value) => Some(value),
            LiteralValue::Real(value) => Some(value as i64),
            _ => None,
        },
        Expression::Unary(unary) if unary.verb == UnaryVerb::Neg => {
            literal_step(&unary.operand).map(|value| -value)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::parse;

    fn transpile(source: &str) -> String {
        let tokens = Lexer::new(source).lex().expect("lexing failed");
        let program = parse(tokens, source).expect("parsing failed");
        CodeGenerator::new(&program)
            .generate()
            .expect("transpiling failed")
    }

    #[test]
    fn test_layout_and_constants() {
        let output = transpile(
            "ALGORITHM T CONSTANTS N = 3; DATA x: INTEGER; BEGIN x := N*N + 1; PRINT(x) END",
        );
        assert!(output.contains("#include <stdio.h>"), "{output}");
        assert!(output.contains("#define N (3)"), "{output}");
        assert!(output.contains("int X;"), "{output}");
        assert!(output.contains("int main(void) {"), "{output}");
        assert!(output.contains("return 0;"), "{output}");
    }

    #[test]
    fn test_array_origin_correction() {
        let output = transpile(
            "ALGORITHM T DATA A: ARRAY [2..4] OF INTEGER; i: INTEGER; \
             BEGIN FOR i := 2 TO 4 REPEAT A[i] := i*i END_FOR PRINT(A[2], A[3], A[4]) END",
        );
        assert!(output.contains("int A[3];"), "{output}");
        assert!(output.contains("A[I - 2]"), "{output}");
    }

    #[test]
    fn test_negative_origin_adds() {
        let output = transpile(
            "ALGORITHM T DATA A: ARRAY [-2..2] OF INTEGER; BEGIN A[0] := 1 END",
        );
        assert!(output.contains("int A[5];"), "{output}");
        assert!(output.contains("A[0 + 2]"), "{output}");
    }

    #[test]
    fn test_for_loop_direction_from_literal_step() {
        let descending = transpile(
            "ALGORITHM T DATA i: INTEGER; BEGIN FOR i := 3 TO 1 STEP -1 REPEAT PRINT(i, EOLN) END_FOR END",
        );
        assert!(descending.contains("I >= 1"), "{descending}");
        assert!(descending.contains("I += -(1)"), "{descending}");

        let ascending = transpile(
            "ALGORITHM T DATA i: INTEGER; BEGIN FOR i := 1 TO 5 REPEAT PRINT(i) END_FOR END",
        );
        assert!(ascending.contains("I <= 5"), "{ascending}");
        assert!(ascending.contains("I += 1"), "{ascending}");
    }

    #[test]
    fn test_repeat_until_negates_condition() {
        let output = transpile(
            "ALGORITHM T DATA i: INTEGER; BEGIN i := 0; REPEAT i := i + 1 UNTIL i = 3; PRINT(i) END",
        );
        assert!(output.contains("do {"), "{output}");
        assert!(output.contains("} while (!("), "{output}");
    }

    #[test]
    fn test_reference_parameters_become_pointers() {
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
        let output = transpile(source);
        assert!(output.contains("void SWAP(int *A, int *B);"), "{output}");
        assert!(output.contains("SWAP(&X, &Y);"), "{output}");
        assert!(output.contains("T = (*A);"), "{output}");
        assert!(output.contains("(*A) = (*B);"), "{output}");
    }

    #[test]
    fn test_function_result_mirror_slot() {
        let source = "ALGORITHM T
FUNCTION SUM(n): INTEGER
INTERFACE
INPUT n: INTEGER;
OUTPUT SUM: INTEGER;
DATA k: INTEGER;
BEGIN
SUM := 0;
FOR k := 1 TO n REPEAT SUM := SUM + k END_FOR
END_FUNCTION
BEGIN
PRINT(SUM(10))
END";
        let output = transpile(source);
        assert!(output.contains("int SUM(int N);"), "{output}");
        assert!(output.contains("int SUM_result = 0;"), "{output}");
        assert!(output.contains("SUM_result = 0;"), "{output}");
        assert!(output.contains("return SUM_result;"), "{output}");
        assert!(output.contains("printf(\"%d\", SUM(10));"), "{output}");
    }

    #[test]
    fn test_print_specifier_inference() {
        let output = transpile(
            "ALGORITHM T DATA r: REAL; s: STRING; BEGIN r := 1.5; PRINT(r, s, 7 / 2, 7 DIV 2, EOLN) END",
        );
        assert!(
            output.contains("printf(\"%g %s %g %d%c\""),
            "{output}"
        );
        assert!(output.contains("'\\n'"), "{output}");
        assert!(output.contains("((double)(7) / (2))"), "{output}");
    }

    #[test]
    fn test_read_emits_addressed_scans() {
        let output = transpile(
            "ALGORITHM T DATA x: INTEGER; r: REAL; A: ARRAY [2..4] OF INTEGER; \
             BEGIN READ(x, r, A[2]) END",
        );
        assert!(output.contains("fflush(stdout);"), "{output}");
        assert!(output.contains("scanf(\"%d\", &X);"), "{output}");
        assert!(output.contains("scanf(\"%lf\", &R);"), "{output}");
        assert!(output.contains("scanf(\"%d\", &A[2 - 2]);"), "{output}");
    }

    #[test]
    fn test_string_variables_are_buffers() {
        let output = transpile(
            "ALGORITHM T DATA s: STRING; BEGIN s := \"hello\"; PRINT(s) END",
        );
        assert!(output.contains("char S[1024];"), "{output}");
        assert!(output.contains("strcpy(S, \"hello\");"), "{output}");
        assert!(output.contains("printf(\"%s\", S);"), "{output}");
    }

    #[test]
    fn test_identifier_sanitization_is_idempotent() {
        assert_eq!(sanitize("ΜΕΤΡΗΤΗΣ"), "________");
        assert_eq!(sanitize(&sanitize("ΜΕΤΡΗΤΗΣ")), sanitize("ΜΕΤΡΗΤΗΣ"));
        assert_eq!(sanitize("j-k"), "J_K");
    }
}
