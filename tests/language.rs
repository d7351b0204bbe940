use std::fs::{self};

use linecalc::{Calculator, Outcome, error::ErrorKind};
use walkdir::WalkDir;

const PROMPT: &str = ">>> ";

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_session_blocks(&content).into_iter().enumerate() {
            count += 1;
            let actual = replay_session(&block);
            assert_eq!(actual.trim_end(),
                       block.trim_end(),
                       "Session {} in {:?} printed something else",
                       i + 1,
                       path);
        }
    }

    assert!(count > 0, "No linecalc sessions found in book/src");
}

fn extract_session_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```linecalc") {
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
            buf.push_str(line.trim_end());
            buf.push('\n');
        }
    }

    blocks
}

/// Feeds every prompt line of a recorded session to a fresh calculator and
/// rebuilds the transcript from what it prints.
fn replay_session(block: &str) -> String {
    let mut calculator = Calculator::new();
    let mut transcript = String::new();

    for input in block.lines().filter_map(|line| line.strip_prefix(PROMPT)) {
        transcript.push_str(PROMPT);
        transcript.push_str(input);
        transcript.push('\n');

        let outcome = calculator.eval_line(input);
        let printed = outcome.to_string();
        if !printed.is_empty() {
            transcript.push_str(&printed);
            transcript.push('\n');
        }
        if outcome == Outcome::Exit {
            break;
        }
    }

    transcript
}

fn assert_value(calculator: &mut Calculator, src: &str, expected: &str) {
    match calculator.eval_line(src) {
        Outcome::Value(v) => assert_eq!(v.to_string(), expected, "Wrong result for {src}"),
        other => panic!("Line {src:?} did not produce a value: {other:?}"),
    }
}

fn assert_failure(calculator: &mut Calculator, src: &str, kind: ErrorKind) {
    match calculator.eval_line(src) {
        Outcome::Error(e) => assert_eq!(e.kind(), kind, "Wrong error for {src}: {e}"),
        other => panic!("Line {src:?} was expected to fail, got {other:?}"),
    }
}

#[test]
fn integer_literals_are_identity() {
    let mut calculator = Calculator::new();
    for n in [0_i64, 1, 7, 42, 1_000_000, i64::MAX] {
        assert_value(&mut calculator, &n.to_string(), &n.to_string());
    }
    for n in ["99999999999999999999", "123456789012345678901234567890123456789"] {
        assert_value(&mut calculator, n, n);
    }
}

#[test]
fn integer_arithmetic_is_unbounded() {
    let mut calculator = Calculator::new();
    assert_value(&mut calculator, "99999999999 * 99999999999", "9999999999800000000001");
    assert_value(&mut calculator, "9223372036854775807 + 1", "9223372036854775808");
    assert_value(&mut calculator, "-9223372036854775807 - 2", "-9223372036854775809");
}

#[test]
fn double_signs_cancel() {
    let mut calculator = Calculator::new();
    for n in ["3", "0", "2.5", "12"] {
        let expected = calculator.eval_line(n).to_string();
        assert_value(&mut calculator, &format!("--{n}"), &expected);
        assert_value(&mut calculator, &format!("-+-{n}"), &expected);
    }
}

#[test]
fn chained_comparisons() {
    let mut calculator = Calculator::new();
    assert_value(&mut calculator, "1 < 2 < 3", "true");
    assert_value(&mut calculator, "3 < 2 < 1", "false");
    assert_value(&mut calculator, "5 == 5", "true");
    assert_value(&mut calculator, "3 > 2 > 1", "true");
    assert_value(&mut calculator, "1 <= 1 < 2", "true");
    assert_value(&mut calculator, "2 >= 3", "false");
}

#[test]
fn comparison_chains_evaluate_every_operand() {
    let mut calculator = Calculator::new();
    assert_failure(&mut calculator, "3 < 2 < z", ErrorKind::Name);

    assert_value(&mut calculator, "x = 1", "1");
    assert_value(&mut calculator, "1 > 2 < (x = 9)", "false");
    assert_value(&mut calculator, "x", "9");
}

#[test]
fn assignment_propagation() {
    let mut calculator = Calculator::new();
    assert_value(&mut calculator, "x = 5", "5");
    assert_value(&mut calculator, "x + 1", "6");
}

#[test]
fn chained_assignment() {
    let mut calculator = Calculator::new();
    assert_value(&mut calculator, "x = y = 7", "7");
    assert_value(&mut calculator, "x", "7");
    assert_value(&mut calculator, "y", "7");
}

#[test]
fn disallowed_assignment() {
    let mut calculator = Calculator::new();
    assert_failure(&mut calculator, "1 + x = 5", ErrorKind::Syntax);
    assert_value(&mut calculator, "x = 5", "5");
    assert_failure(&mut calculator, "1 + x = 5", ErrorKind::Syntax);
    assert_failure(&mut calculator, "2 * x = 5", ErrorKind::Syntax);
    assert_value(&mut calculator, "x", "5");
}

#[test]
fn function_results_are_normalized() {
    let mut calculator = Calculator::new();
    assert_value(&mut calculator, "SQRT(4)", "2");
    assert_value(&mut calculator, "SQRT(2)", "1.414");
    assert_value(&mut calculator, "POW(2,3)", "8");
    assert_value(&mut calculator, "POW(2,0.5)", "1.414");
    assert_value(&mut calculator, "POW(10, 20)", "100000000000000000000");
    assert_value(&mut calculator, "POW(2, 63)", "9223372036854775808");
}

#[test]
fn division_is_not_normalized() {
    let mut calculator = Calculator::new();
    assert_value(&mut calculator, "5 / 2", "2.500");
    assert_value(&mut calculator, "4 / 2", "2.000");
}

#[test]
fn unbound_variable_is_a_name_error() {
    let mut calculator = Calculator::new();
    assert_failure(&mut calculator, "z", ErrorKind::Name);
    assert_failure(&mut calculator, "z + 1", ErrorKind::Name);
    assert_failure(&mut calculator, "2 * (z)", ErrorKind::Name);
}

#[test]
fn invalid_character_is_a_lex_error() {
    let mut calculator = Calculator::new();
    assert_failure(&mut calculator, "3 & 4", ErrorKind::Lex);
    assert_failure(&mut calculator, "x = 2 ^ 3", ErrorKind::Lex);
    assert!(calculator.variables().is_empty());
}

#[test]
fn arithmetic_errors() {
    let mut calculator = Calculator::new();
    assert_failure(&mut calculator, "1 / 0", ErrorKind::Arithmetic);
    assert_failure(&mut calculator, "1 / (2 - 2.0)", ErrorKind::Arithmetic);
    assert_failure(&mut calculator, "LOG(-1)", ErrorKind::Arithmetic);
}

#[test]
fn exit_ends_the_session() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.eval_line("EXIT"), Outcome::Exit);
    assert_eq!(calculator.eval_line("a = b = EXIT"), Outcome::Exit);
    assert!(calculator.variables().is_empty());
}

#[test]
fn errors_do_not_corrupt_the_store() {
    let mut calculator = Calculator::new();
    assert_value(&mut calculator, "a = 3", "3");
    assert_failure(&mut calculator, "a = 1 / 0", ErrorKind::Arithmetic);
    assert_value(&mut calculator, "a", "3");
}

#[test]
fn scripts_continue_after_errors() {
    let mut calculator = Calculator::new();
    let results = calculator.run_script("a = 2\nb\nb = a * 2\nb + a");

    let printed = results.iter().map(|r| r.outcome.to_string()).collect::<Vec<_>>();
    assert_eq!(printed, ["2", "error: name", "4", "6"]);
}
