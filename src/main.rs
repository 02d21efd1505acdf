use std::{env, fs, process};

use cminus::errors::errors::FrontendError;
use cminus::grammar::tables::GrammarTables;
use cminus::parser::parser::Parser;
use cminus::reports::reports::{
    render_lexical_errors, render_symbol_table, render_syntax_errors, render_token_listing,
};
use cminus::scanner::scanner::Scanner;

const GRAMMAR_RULES_PATH: &str = "resource/grammar_rules.txt";
const PREDICT_PATH: &str = "resource/predict.txt";

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: cminus <source-file>");
        process::exit(1);
    }

    if let Err(error) = run(&args[1]) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn run(source_path: &str) -> Result<(), FrontendError> {
    let source = read(source_path)?;
    let rules_text = read(GRAMMAR_RULES_PATH)?;
    let predict_text = read(PREDICT_PATH)?;
    let tables = GrammarTables::load(&rules_text, &predict_text)?;

    let parser = Parser::new(Scanner::new(&source), &tables);
    let (outcome, scanner) = parser.parse();

    write("tokens.txt", &render_token_listing(scanner.listing()))?;
    write("symbol_table.txt", &render_symbol_table(scanner.identifiers()))?;
    write("lexical_errors.txt", &render_lexical_errors(scanner.errors()))?;
    write("syntax_errors.txt", &render_syntax_errors(&outcome.errors))?;
    write("parse_tree.txt", &outcome.tree.to_string())?;

    match outcome.fatal {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn read(path: &str) -> Result<String, FrontendError> {
    fs::read_to_string(path).map_err(|source| FrontendError::Read {
        path: path.to_string(),
        source,
    })
}

fn write(path: &str, body: &str) -> Result<(), FrontendError> {
    fs::write(path, body).map_err(|source| FrontendError::Write {
        path: path.to_string(),
        source,
    })
}
