use std::fs::{self};

use infixa::{
    config::{EvalOptions, ParenthesisPolicy, PowerMode},
    error::ErrorKind,
    evaluate, evaluate_with,
};
use walkdir::WalkDir;

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

        for (i, line) in extract_example_lines(&content).into_iter().enumerate() {
            count += 1;
            let (expression, expected) = line.rsplit_once('#')
                                             .unwrap_or_else(|| {
                                                 panic!("Example {} in {path:?} has no '# expected' part: {line}",
                                                        i + 1)
                                             });
            let expected: i64 = expected.trim()
                                        .parse()
                                        .unwrap_or_else(|e| panic!("Bad expectation in {path:?}: {line}: {e}"));
            match evaluate(expression) {
                Ok(value) => assert_eq!(value, expected, "Example {} in {path:?}: {line}", i + 1),
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, line, e),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_example_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```infixa") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "Expression: {src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_error(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "Expression {src:?} failed with: {e}"),
    }
}

const STRICT: EvalOptions = EvalOptions { parentheses: ParenthesisPolicy::Strict,
                                          power:       PowerMode::Lossy, };

const EXACT: EvalOptions = EvalOptions { parentheses: ParenthesisPolicy::Lenient,
                                         power:       PowerMode::Exact, };

#[test]
fn precedence_and_parentheses() {
    assert_value("2+3*4", 14);
    assert_value("(2+3)*4", 20);
    assert_value("2*3+4", 10);
    assert_value("2*(3+4)", 14);
    assert_value("((((7))))", 7);
    assert_value("1+2*3^2", 19);
}

#[test]
fn associativity() {
    assert_value("2^3^2", 512);
    assert_value("(2^3)^2", 64);
    assert_value("10-4-3", 3);
    assert_value("100/10/5", 2);
    assert_value("2*3%4", 2);
}

#[test]
fn unary_operators() {
    assert_value("-5+3", -2);
    assert_value("5- -3", 8);
    assert_value("2*-3", -6);
    assert_value("+7", 7);
    assert_value("- -5", 5);
    assert_value("-(2+3)", -5);
    assert_value("!0", 1);
    assert_value("!5", 0);
    assert_value("!!5", 1);
    assert_value("++5", 6);
    assert_value("--5", 4);
    assert_value("-++5", -6);
    assert_value("3*++2", 9);
}

#[test]
fn unary_binds_tighter_than_power() {
    assert_value("-2^2", 4);
    assert_value("2^-1", 0);
    assert_value("-(2^2)", -4);
}

#[test]
fn integer_division_and_remainder() {
    assert_value("10/3", 3);
    assert_value("-7/2", -3);
    assert_value("-7%2", -1);
    assert_value("7%-2", 1);
    assert_value("9%3", 0);
}

#[test]
fn comparisons_and_logic() {
    assert_value("1==1 && 2<3", 1);
    assert_value("1==2 || 2<3", 1);
    assert_value("3>=3", 1);
    assert_value("3<=2", 0);
    assert_value("2!=2", 0);
    assert_value("1<2==1", 1);
    assert_value("5>3>1", 0);
    assert_value("1||0&&0", 1);
    assert_value("3&&4", 1);
    assert_value("0||0", 0);
    assert_value("-1&&1", 1);
}

#[test]
fn whitespace_and_literals() {
    assert_value("  42  ", 42);
    assert_value("\t1 +\n2", 3);
    assert_value("007", 7);
    assert_value("9223372036854775807", i64::MAX);
}

#[test]
fn empty_input_underflows() {
    assert_error("", ErrorKind::StackUnderflow);
    assert_error("   ", ErrorKind::StackUnderflow);
    assert_error("()", ErrorKind::StackUnderflow);
}

#[test]
fn missing_operands_underflow() {
    assert_error("2+", ErrorKind::StackUnderflow);
    assert_error("*5", ErrorKind::StackUnderflow);
    assert_error("-", ErrorKind::StackUnderflow);
    assert_error("1+(2*)", ErrorKind::StackUnderflow);
}

#[test]
fn surplus_operands_are_reported() {
    assert_error("2 3", ErrorKind::TrailingOperands);
    assert_error("(2)(3)", ErrorKind::TrailingOperands);
}

#[test]
fn unrecognised_characters() {
    assert_error("2 $ 3", ErrorKind::InvalidToken);
    assert_error("x+1", ErrorKind::InvalidToken);
    assert_error("1.5", ErrorKind::InvalidToken);
}

#[test]
fn operators_without_meaning() {
    assert_error("5--3", ErrorKind::UnknownOperator);
    assert_error("5++3", ErrorKind::UnknownOperator);
    assert_error("5!3", ErrorKind::UnknownOperator);
    assert_error("1 & 2", ErrorKind::UnknownOperator);
    assert_error("1 | 2", ErrorKind::UnknownOperator);
    assert_error("1 = 1", ErrorKind::UnknownOperator);
    assert_error("1===1", ErrorKind::UnknownOperator);
}

#[test]
fn division_by_zero() {
    assert_error("5/0", ErrorKind::DivisionByZero);
    assert_error("5%0", ErrorKind::DivisionByZero);
    assert_error("5/(3-3)", ErrorKind::DivisionByZero);
    assert_error("0^-1", ErrorKind::DivisionByZero);
    assert_error("0 && 1/0", ErrorKind::DivisionByZero);
}

#[test]
fn overflow_is_reported() {
    assert_error("99999999999999999999", ErrorKind::LiteralTooLarge);
    assert_error("9223372036854775807 + 1", ErrorKind::Overflow);
    assert_error("-9223372036854775807 - 2", ErrorKind::Overflow);
    assert_error("4611686018427387904 * 2", ErrorKind::Overflow);
    assert_error("++9223372036854775807", ErrorKind::Overflow);
    assert_error("2^63", ErrorKind::Overflow);
    assert_value("2^62", 4_611_686_018_427_387_904);
}

#[test]
fn lenient_parentheses() {
    assert_value("1+2)", 3);
    assert_value("(1+2))*3", 9);
    assert_error("(1+2", ErrorKind::InvalidToken);
    assert_error("((1+2)", ErrorKind::InvalidToken);
}

#[test]
fn strict_parentheses() {
    assert_eq!(evaluate_with("(1+2)*3", &STRICT).unwrap(), 9);

    for src in ["1+2)", "(1+2", "((1+2)", ")("] {
        let err = evaluate_with(src, &STRICT).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnboundedParenthesis, "Expression: {src}");
    }
}

#[test]
fn power_modes() {
    assert_value("2^10", 1024);
    assert_eq!(evaluate_with("2^10", &EXACT).unwrap(), 1024);
    assert_eq!(evaluate_with("(-1)^-3", &EXACT).unwrap(), -1);
    assert_eq!(evaluate_with("2^-2", &EXACT).unwrap(), 0);
    assert_eq!(evaluate_with("0^0", &EXACT).unwrap(), 1);
    assert_value("0^0", 1);

    // The floating-point path is exact only up to 2^53.
    let exact = evaluate_with("3^39", &EXACT).unwrap();
    let lossy = evaluate("3^39").unwrap();
    assert_eq!(exact, 4_052_555_153_018_976_267);
    assert_ne!(exact, lossy);
    assert!((exact - lossy).abs() < 1024);

    let err = evaluate_with("3^40", &EXACT).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
fn error_messages() {
    assert_eq!(evaluate("5/0").unwrap_err().to_string(), "Division by zero.");
    assert_eq!(evaluate("2 $ 3").unwrap_err().to_string(),
               "Invalid token '$' at offset 2.");
    assert_eq!(evaluate("5--3").unwrap_err().to_string(),
               "Unknown operator '--' at offset 1.");
    assert_eq!(evaluate("2+").unwrap_err().to_string(),
               "Stack underflow: needed 2 operand(s) but found 1.");
    assert_eq!(evaluate("(1+2").unwrap_err().to_string(), "Invalid token in postfix: (.");
    assert_eq!(evaluate_with("1)", &STRICT).unwrap_err().to_string(),
               "Unbalanced parenthesis: unmatched ')'.");
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["2+3*4", "-5+3", "2^3^2", "5/0", "2 $ 3"] {
        let first = evaluate(src);
        for _ in 0..5 {
            assert_eq!(evaluate(src), first, "Expression: {src}");
        }
    }
}
