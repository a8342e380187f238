use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use log::{info, LevelFilter};
use minilang::{
    analyzer::analyzer::{analyze, AnalyzerConfig},
    display_error,
    lexer::{lexer::Lexer, source::TokenSource, tokens::TokenKind},
    symbol_table::symbol_table::SymbolTable,
};

#[derive(Parser, Debug)]
#[command(
    name = "minilang",
    version,
    about = "Checks the syntax and typing of a minilang program"
)]
struct Cli {
    /// Source file to analyze
    source: PathBuf,

    /// Print the token stream instead of analyzing
    #[arg(long)]
    tokens: bool,

    /// Treat every declaration as `int`, whatever type it names
    #[arg(long)]
    collapse_declared_types: bool,

    /// Log analyzer progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let lexer = match Lexer::from_file(&cli.source) {
        Ok(lexer) => lexer,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    if cli.tokens {
        return print_tokens(lexer, &cli.source);
    }

    let config = AnalyzerConfig {
        collapse_declared_types: cli.collapse_declared_types,
    };

    let start = Instant::now();
    let (_, result) = analyze(lexer, config);
    info!("Analyzed in {:?}", start.elapsed());

    match result {
        Ok(semantic) => {
            println!("Result: {}", semantic.kind);
            if semantic.is_error() {
                println!("{}", semantic);
                ExitCode::from(2)
            } else {
                println!("Semantic Analysis completed successfully!");
                ExitCode::SUCCESS
            }
        }
        Err(error) => {
            display_error(&error, &cli.source);
            ExitCode::FAILURE
        }
    }
}

fn print_tokens(mut lexer: Lexer, file: &std::path::Path) -> ExitCode {
    let mut symbols = SymbolTable::new();

    loop {
        match lexer.next_token(&mut symbols) {
            Ok(token) => {
                println!("{}", token.debug());
                if token.kind == TokenKind::EOF {
                    return ExitCode::SUCCESS;
                }
            }
            Err(error) => {
                display_error(&error, file);
                return ExitCode::FAILURE;
            }
        }
    }
}
