/// The evaluator module reduces a postfix sequence to a value.
///
/// The evaluator walks a postfix token sequence with an operand stack and
/// applies each operator as it is reached. It also defines the semantics of
/// every operator, which other evaluators can reuse.
///
/// # Responsibilities
/// - Evaluates postfix sequences, checking operand counts.
/// - Implements integer arithmetic, comparisons and logic.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text.
///
/// The lexer reads the raw expression and produces a sequence of tokens:
/// numbers, parentheses, and operators already tagged as unary or binary.
/// This is the first stage of evaluation.
///
/// # Responsibilities
/// - Recognises lexemes with longest-match on two-character operators.
/// - Decides unary versus binary for sign-like operators.
/// - Reports unrecognised characters and oversized literals with offsets.
pub mod lexer;
/// The converter module reorders tokens into postfix notation.
///
/// Implements the shunting-yard algorithm on top of the precedence table.
///
/// # Responsibilities
/// - Emits operands in order and operators after their operands.
/// - Honours precedence, associativity and parentheses.
/// - Applies the configured policy to unmatched parentheses.
pub mod converter;
/// The precedence module holds the static operator table.
///
/// Maps every operator to its precedence, associativity and arity.
pub mod precedence;
