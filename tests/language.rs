use std::fs::{self};

use reckon::{
    error::{EvalError, SyntaxError},
    evaluate_line,
    interpreter::{symbol_table::SymbolTable, value::Value},
};
use walkdir::WalkDir;

#[test]
fn book_transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_transcript_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = replay_transcript(&block) {
                panic!("Transcript {} in {:?} failed:\n{}\n{}", i + 1, path, block, e);
            }
        }
    }

    assert!(count > 0, "No transcripts found in book/src");
}

fn extract_transcript_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Replays one transcript block: every `> input` line must print exactly the
/// line that follows it, values and error messages alike.
fn replay_transcript(block: &str) -> Result<(), String> {
    let mut table = SymbolTable::new();
    let mut lines = block.lines().map(str::trim).filter(|line| !line.is_empty());

    while let Some(line) = lines.next() {
        let Some(input) = line.strip_prefix("> ") else {
            return Err(format!("Expected a '> ' input line, found '{line}'"));
        };
        let expected = lines.next()
                            .ok_or_else(|| format!("Missing output line for '{input}'"))?;

        let printed = match evaluate_line(input, &mut table) {
            Ok(value) => value.to_string(),
            Err(e) => e.to_string(),
        };
        if printed != expected {
            return Err(format!("Input '{input}' printed '{printed}', expected '{expected}'"));
        }
    }

    Ok(())
}

/// Runs every non-blank line of the script through one session and returns
/// the value of the last line.
fn run_script(script: &str) -> Result<Value, EvalError> {
    let mut table = SymbolTable::new();
    let mut last = None;

    for line in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
        last = Some(evaluate_line(line, &mut table)?);
    }

    Ok(last.expect("script had no lines"))
}

fn assert_integer(script: &str, expected: i64) {
    match run_script(script) {
        Ok(Value::Integer(n)) => assert_eq!(n, expected, "script: {script}"),
        other => panic!("Script '{script}' produced {other:?}, expected Integer({expected})"),
    }
}

fn assert_real(script: &str, expected: f64) {
    match run_script(script) {
        Ok(Value::Real(r)) => assert_eq!(r, expected, "script: {script}"),
        other => panic!("Script '{script}' produced {other:?}, expected Real({expected})"),
    }
}

fn assert_lex_error(script: &str) {
    match run_script(script) {
        Err(EvalError::Lex(_)) => {},
        other => panic!("Script '{script}' produced {other:?}, expected a lexical error"),
    }
}

fn assert_syntax_error(script: &str) {
    match run_script(script) {
        Err(EvalError::Syntax(_)) => {},
        other => panic!("Script '{script}' produced {other:?}, expected a syntax error"),
    }
}

fn assert_semantic_error(script: &str) {
    match run_script(script) {
        Err(EvalError::Semantic(_)) => {},
        other => panic!("Script '{script}' produced {other:?}, expected a semantic error"),
    }
}

#[test]
fn integer_arithmetic_is_exact() {
    assert_integer("2 + 3", 5);
    assert_integer("8 - 5", 3);
    assert_integer("7 * 9", 63);
}

#[test]
fn division_always_yields_real() {
    assert_real("10 / 2", 5.0);
    assert_real("7 / 2", 3.5);
    assert_real("4 / 2 * 1", 2.0);
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_real("2 + 1.5", 3.5);
    assert_real("1.5 * 2", 3.0);
    assert_real("2.5 - 1", 1.5);
}

#[test]
fn operators_group_to_the_right() {
    assert_integer("2 * 3 + 1", 8);
    assert_integer("10 - 2 - 3", 11);
    assert_real("8 / 4 / 2", 4.0);
    assert_real("1 / 0 + 2", 0.5);
}

#[test]
fn parentheses_override_grouping() {
    assert_integer("(2 * 3) + 1", 7);
    assert_integer("(10 - 2) - 3", 5);
    assert_real("(8 / 4) / 2", 1.0);
}

#[test]
fn negation() {
    assert_integer("-5", -5);
    assert_integer("--5", 5);
    assert_integer("- (1+1)", -2);
    assert_real("-1.5", -1.5);
}

#[test]
fn assignments_persist_across_lines() {
    assert_integer("x = 41", 41);
    assert_integer("x = 2 + 3\nx", 5);
    assert_integer("x = 2 + 3\ny = x * 2\ny", 10);
    assert_integer("x = 1\nx = x + 1\nx", 2);
}

#[test]
fn unknown_identifier_is_error() {
    assert_syntax_error("y");
    assert_syntax_error("y + 1");
    assert_syntax_error("1 + y");
}

#[test]
fn zero_divisors_are_semantic_errors() {
    assert_semantic_error("1 / 0");
    assert_semantic_error("1 / 0.0");
    assert_semantic_error("7 % 0");
    assert_semantic_error("7.5 % 0.0");
    assert_semantic_error("-(1 / 0)");
}

#[test]
fn integer_overflow_is_semantic_error() {
    assert_semantic_error("9223372036854775807 + 1");
    assert_semantic_error("9223372036854775807 * 2");
    assert_semantic_error("(2) ^ 63");
}

#[test]
fn exponentiation_cannot_open_a_line() {
    assert_syntax_error("5 ^ 2");
    assert_syntax_error("x = 5\nx ^ 2");
    assert_integer("(5) ^ 2", 25);
    assert_integer("2 * 3 ^ 2", 18);
    assert_real("(2) ^ -1", 0.5);
}

#[test]
fn remainder_keeps_the_dividend_sign() {
    assert_integer("7 % 3", 1);
    assert_integer("(0 - 7) % 3", -1);
    assert_integer("7 % (0 - 3)", 1);
    assert_real("7.5 % 2", 1.5);
}

#[test]
fn whitespace_never_separates() {
    assert_integer("1 2", 12);
    assert_real("1 . 5", 1.5);
    assert_integer("x = 4 1\nx", 41);
}

#[test]
fn trailing_tokens_are_ignored() {
    assert_integer("(1+2))", 3);
    assert_integer("5)", 5);
    assert_integer("1 + 2 ) * 10", 3);
    assert_integer("x = 2\nx (3)", 2);
}

#[test]
fn lexical_rejects() {
    assert_lex_error("1.2.3");
    assert_lex_error("1.");
    assert_lex_error("12abc");
    assert_lex_error("@");
    assert_lex_error("x_1");
    assert_lex_error("99999999999999999999");
}

#[test]
fn syntax_rejects() {
    assert_syntax_error("(1+2");
    assert_syntax_error("1 +");
    assert_syntax_error("+ 5");
    assert_syntax_error("= 5");
    assert_syntax_error("2 = 3");
    assert_syntax_error("()");
}

#[test]
fn empty_input_is_rejected() {
    let mut table = SymbolTable::new();

    assert!(matches!(evaluate_line("", &mut table),
                     Err(EvalError::Syntax(SyntaxError::UnexpectedEndOfInput))));
    assert!(matches!(evaluate_line("   ", &mut table),
                     Err(EvalError::Syntax(SyntaxError::UnexpectedEndOfInput))));
}

#[test]
fn failed_assignment_stores_nothing() {
    let mut table = SymbolTable::new();
    evaluate_line("x = 5", &mut table).unwrap();

    assert!(evaluate_line("x = 1 / 0", &mut table).is_err());
    assert!(evaluate_line("x = 1 +", &mut table).is_err());
    assert!(evaluate_line("x = nope", &mut table).is_err());
    assert_eq!(evaluate_line("x", &mut table).unwrap(), Value::Integer(5));

    assert!(evaluate_line("y = 1 / 0", &mut table).is_err());
    assert!(matches!(evaluate_line("y", &mut table),
                     Err(EvalError::Syntax(SyntaxError::UnknownIdentifier { .. }))));
}

#[test]
fn clearing_empties_the_table() {
    let mut table = SymbolTable::new();
    evaluate_line("x = 1", &mut table).unwrap();
    evaluate_line("y = 2.5", &mut table).unwrap();

    let mut entries = table.snapshot();
    entries.sort_by(|left, right| left.0.cmp(&right.0));
    assert_eq!(entries,
               vec![("x".to_string(), Value::Integer(1)),
                    ("y".to_string(), Value::Real(2.5))]);

    table.clear();
    assert!(table.snapshot().is_empty());
    assert!(evaluate_line("x", &mut table).is_err());

    // Clearing an empty table is fine.
    table.clear();
    assert!(table.snapshot().is_empty());
}

#[test]
fn example_script_replays() {
    let script = fs::read_to_string("tests/example.rk").expect("missing file");
    let mut table = SymbolTable::new();

    for line in script.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(e) = evaluate_line(line, &mut table) {
            panic!("Script line '{line}' failed: {e}");
        }
    }
}
