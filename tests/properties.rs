//! Property-based tests for the evaluation pipeline.
//!
//! Random expression trees are rendered to text, run through the full
//! tokenize / convert / evaluate pipeline, and compared against a direct
//! recursive evaluation of the same tree using the same operator semantics.

use infixa::{
    config::{EvalOptions, PowerMode},
    error::ErrorKind,
    evaluate, evaluate_with,
    interpreter::evaluator::{binary::core::apply_binary, unary::apply_unary},
    token::{BinaryOperator, Operator, UnaryOperator},
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Tree {
    Number(i64),
    Unary(UnaryOperator, Box<Tree>),
    Binary(BinaryOperator, Box<Tree>, Box<Tree>),
}

// -- Strategies --

fn unary_operator() -> impl Strategy<Value = UnaryOperator> {
    prop::sample::select(vec![UnaryOperator::Plus,
                              UnaryOperator::Negate,
                              UnaryOperator::Not,
                              UnaryOperator::Increment,
                              UnaryOperator::Decrement])
}

fn binary_operator() -> impl Strategy<Value = BinaryOperator> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Pow,
        Sub,
    };
    prop::sample::select(vec![Add, Sub, Mul, Div, Mod, Pow, Less, Greater, LessEqual,
                              GreaterEqual, Equal, NotEqual, And, Or])
}

fn tree() -> impl Strategy<Value = Tree> {
    let leaf = (0i64..20).prop_map(Tree::Number);
    leaf.prop_recursive(5, 48, 2, |inner| {
            prop_oneof![(unary_operator(), inner.clone()).prop_map(|(op, operand)| {
                                                               Tree::Unary(op, Box::new(operand))
                                                           }),
                        (binary_operator(), inner.clone(), inner).prop_map(|(op, lhs, rhs)| {
                            Tree::Binary(op, Box::new(lhs), Box::new(rhs))
                        })]
        })
}

// -- Reference evaluation and rendering --

fn eval_tree(tree: &Tree, power: PowerMode) -> Result<i64, ErrorKind> {
    match tree {
        Tree::Number(n) => Ok(*n),
        Tree::Unary(op, operand) => {
            apply_unary(*op, eval_tree(operand, power)?).map_err(|e| e.kind())
        },
        Tree::Binary(op, lhs, rhs) => {
            let lhs = eval_tree(lhs, power)?;
            let rhs = eval_tree(rhs, power)?;
            apply_binary(*op, lhs, rhs, power).map_err(|e| e.kind())
        },
    }
}

/// Renders with a parenthesis around every operand.
fn render_parenthesized(tree: &Tree) -> String {
    match tree {
        Tree::Number(n) => n.to_string(),
        Tree::Unary(op, operand) => format!("{op}({})", render_parenthesized(operand)),
        Tree::Binary(op, lhs, rhs) => {
            format!("({}) {op} ({})", render_parenthesized(lhs), render_parenthesized(rhs))
        },
    }
}

fn precedence(tree: &Tree) -> u8 {
    match tree {
        Tree::Number(_) => u8::MAX,
        Tree::Unary(op, _) => Operator::Unary(*op).descriptor().precedence,
        Tree::Binary(op, ..) => Operator::Binary(*op).descriptor().precedence,
    }
}

/// Renders with only the parentheses precedence and associativity require.
fn render_minimal(tree: &Tree) -> String {
    fn wrap(tree: &Tree, needed: bool) -> String {
        if needed { format!("({})", render_minimal(tree)) } else { render_minimal(tree) }
    }

    match tree {
        Tree::Number(n) => n.to_string(),
        Tree::Unary(op, operand) => {
            let own = Operator::Unary(*op).descriptor().precedence;
            format!("{op} {}", wrap(operand, precedence(operand) < own))
        },
        Tree::Binary(op, lhs, rhs) => {
            let own = Operator::Binary(*op).descriptor().precedence;
            let right_assoc = matches!(op, BinaryOperator::Pow);
            let lhs = wrap(lhs, precedence(lhs) < own || (precedence(lhs) == own && right_assoc));
            let rhs = wrap(rhs, precedence(rhs) < own || (precedence(rhs) == own && !right_assoc));
            format!("{lhs} {op} {rhs}")
        },
    }
}

fn options(power: PowerMode) -> EvalOptions {
    EvalOptions { power,
                  ..EvalOptions::default() }
}

proptest! {
    #[test]
    fn parenthesized_matches_tree(tree in tree(), exact in any::<bool>()) {
        let power = if exact { PowerMode::Exact } else { PowerMode::Lossy };
        let source = render_parenthesized(&tree);
        let actual = evaluate_with(&source, &options(power)).map_err(|e| e.kind());
        prop_assert_eq!(actual, eval_tree(&tree, power), "source: {}", source);
    }

    #[test]
    fn minimal_matches_tree(tree in tree(), exact in any::<bool>()) {
        let power = if exact { PowerMode::Exact } else { PowerMode::Lossy };
        let source = render_minimal(&tree);
        let actual = evaluate_with(&source, &options(power)).map_err(|e| e.kind());
        prop_assert_eq!(actual, eval_tree(&tree, power), "source: {}", source);
    }

    #[test]
    fn evaluation_is_idempotent(tree in tree()) {
        let source = render_minimal(&tree);
        let first = evaluate(&source);
        prop_assert_eq!(evaluate(&source), first.clone());
        prop_assert_eq!(evaluate(&source), first);
    }

    #[test]
    fn arbitrary_text_never_panics(source in "[0-9+\\-*/%^!<>=&|() a]{0,24}") {
        let _ = evaluate(&source);
    }
}
