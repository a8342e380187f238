//! End-to-end tests: source text in, semantic result or structural error out.

use std::path::Path;

use minilang::{
    analyzer::analyzer::{analyze, analyze_source, AnalyzerConfig},
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
    semantic::semantic::{SemanticResult, SemanticResultType},
};
use pretty_assertions::assert_eq;

const FULL_PROGRAM: &str = r#"program demo
  a, b is int;
  f is float;
  c is char;
begin
  read(a);
  b = a * 2;
  f = a / b;
  f = b;
  c = 'x';
  /* branches */
  if a > b then write("big") else write(a) end;
  while a < 10 do a = a + 1 end;
  repeat b = b - 1 until b <= 0;
  write(f)
end.
"#;

fn run(source: &str) -> Result<SemanticResult, minilang::errors::errors::Error> {
    let (_, result) = analyze_source(source, Some("test.txt".to_string()), AnalyzerConfig::default());
    result
}

#[test]
fn test_well_typed_program_is_ok() {
    let result = run(FULL_PROGRAM).unwrap();

    assert_eq!(result.kind, SemanticResultType::Ok);
    assert!(result.message.is_none());
}

#[test]
fn test_float_into_int_reports_assignment_line() {
    let result = run("program p\n  a is int;\nbegin\n  a = 1.5\nend.").unwrap();

    assert!(result.is_error());
    assert_eq!(
        result.message(),
        Some("Incompatible variable types on  on line 4.")
    );
}

#[test]
fn test_int_into_float_widens() {
    let result = run("program p f is float; begin f = 3 * 4 end.").unwrap();
    assert_eq!(result, SemanticResult::ok());
}

#[test]
fn test_errors_in_separate_statements_are_all_reported() {
    let source = "program p\n  a is int;\nbegin\n  if a > 0 then\n    a = 2.5\n  end;\n  a = u\nend.";
    let result = run(source).unwrap();

    assert_eq!(
        result.message(),
        Some("Incompatible variable types on  on line 5.\nExpected a numeric type expression on line 7.")
    );
}

#[test]
fn test_missing_final_dot() {
    let error = run("program p\n  x is int;\nbegin\n  x = 1\nend;").unwrap_err();

    assert_eq!(
        *error.get_impl(),
        ErrorImpl::UnexpectedToken {
            expected: Some(TokenKind::Dot),
            found: TokenKind::Semicolon,
            lexeme: ";".to_string(),
        }
    );
    assert_eq!(error.get_position().line(), 5);
    assert_eq!(
        error.to_string(),
        "Unexpected token: ; of type: ; on line: 5\nExpected: type: ."
    );
}

#[test]
fn test_input_ending_before_final_dot() {
    let error = run("program p x is int; begin x = 1 end").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(
        *error.get_impl(),
        ErrorImpl::UnexpectedEndOfInput {
            expected: TokenKind::Dot,
        }
    );
}

#[test]
fn test_assignment_to_undeclared_variable() {
    let result = run("program p begin x = 1 end.").unwrap();

    assert!(result.is_error());
    assert_eq!(result.message(), Some("Undefined variable x on line 1."));
}

#[test]
fn test_read_of_declared_variable_reports_no_undefined_variable() {
    let result = run("program p x is int ; begin read(x) ; write(x) end.").unwrap();
    assert_eq!(result, SemanticResult::ok());
}

#[test]
fn test_declaration_and_statement_errors_are_both_reported() {
    let source = "program p\n  x is ;\n  y is int;\nbegin\n  y = 1.5\nend.";
    let result = run(source).unwrap();

    assert!(result.is_error());
    assert_eq!(
        result.message(),
        Some("Semantic error on line 2\nIncompatible variable types on  on line 5.")
    );
}

#[test]
fn test_structural_error_discards_semantic_errors() {
    let error = run("program p begin x = 1.5 ; y = 2 end").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_analyze_file() {
    let lexer = Lexer::from_file(Path::new("tests/test_file.txt")).unwrap_or_else(|error| panic!("{}", error));
    let (analyzer, result) = analyze(lexer, AnalyzerConfig::default());

    assert_eq!(result.unwrap(), SemanticResult::ok());
    let x = analyzer.symbols().find("x").unwrap();
    assert_eq!(
        analyzer.symbols().declared_type(x),
        Some(SemanticResultType::Int)
    );
}

#[test]
fn test_comments_and_layout_do_not_matter() {
    let source = "program p // header\n x is float; /* a\n b */ begin x = 1 end.";
    assert_eq!(run(source).unwrap(), SemanticResult::ok());
}
