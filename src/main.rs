//! The pseudoglossa binary. Runs a source file through reader, lexer,
//! and parser, then either executes the program or emits C source.

mod cli;

use std::io::{self, Write};
use std::process::exit;

use log::{debug, error};

use pseudoglossa::codegen::CodeGenerator;
use pseudoglossa::encoding::read_source;
use pseudoglossa::interpreter::Interpreter;
use pseudoglossa::lexer::Lexer;
use pseudoglossa::parser::parse;

use cli::Cli;

fn main() {
    let args = Cli::init();

    let level = if args.debug {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    simple_logger::init_with_level(level).unwrap();

    let source = match read_source(&args.file) {
        Ok(source) => source,
        Err(error) => {
            error!("{error:#}");
            exit(1);
        }
    };

    let tokens = match Lexer::new(&source).lex() {
        Ok(tokens) => tokens,
        Err(error) => {
            error!("Syntax Error: {error}");
            exit(1);
        }
    };
    debug!("token stream:\n{tokens:#?}");

    let program = match parse(tokens, &source) {
        Ok(program) => program,
        Err(error) => {
            error!("Syntax Error: {error}");
            exit(1);
        }
    };
    debug!("parsed AST:\n{program:#?}");

    if args.transpile {
        match CodeGenerator::new(&program).generate() {
            Ok(output) => print!("{output}"),
            Err(error) => {
                error!("{error}");
                exit(1);
            }
        }
        let _ = io::stdout().flush();
        return;
    }

    let result = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Interpreter::new(&program, stdin.lock(), stdout.lock()).run()
    };
    let _ = io::stdout().flush();

    if let Err(error) = result {
        error!("Runtime Error: {error}");
        exit(1);
    }
}
