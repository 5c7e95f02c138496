use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use infixa::{
    compile,
    config::{EvalOptions, ParenthesisPolicy, PowerMode},
    interpreter::evaluator::core::evaluate_postfix,
    token::render,
};

/// infixa evaluates integer infix expressions: arithmetic, powers,
/// comparisons, boolean logic and unary operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Report unmatched parentheses as errors instead of ignoring them.
    #[arg(long)]
    strict_parens: bool,

    /// Compute `^` with exact integer arithmetic instead of floating point.
    #[arg(long)]
    exact_pow: bool,

    /// Print the postfix form of each expression before its result.
    #[arg(long)]
    postfix: bool,

    /// Expression to evaluate once. Without it, an interactive session
    /// starts.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

impl Args {
    const fn options(&self) -> EvalOptions {
        let parentheses = if self.strict_parens {
            ParenthesisPolicy::Strict
        } else {
            ParenthesisPolicy::Lenient
        };
        let power = if self.exact_pow { PowerMode::Exact } else { PowerMode::Lossy };
        EvalOptions { parentheses, power }
    }
}

/// Words that end an interactive session. Matched exactly.
const EXIT_COMMANDS: [&str; 2] = ["exit", "EXIT"];

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let options = args.options();

    if let Some(expression) = &args.expression {
        return match run(expression, &options, args.postfix) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
                ExitCode::SUCCESS
            },
            Err(message) => {
                eprintln!("Error: {message}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = repl(&options, args.postfix) {
        eprintln!("Failed to read from standard input: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Evaluates one expression and returns the lines to print.
///
/// In one-shot mode the result is printed bare; the postfix form, if asked
/// for, comes first.
fn run(expression: &str, options: &EvalOptions, show_postfix: bool) -> Result<Vec<String>, String> {
    let postfix = compile(expression, options).map_err(|e| e.to_string())?;
    let result = evaluate_postfix(&postfix, options).map_err(|e| e.to_string())?;

    let mut lines = Vec::with_capacity(2);
    if show_postfix {
        lines.push(format!("Postfix: {}", render(&postfix)));
    }
    lines.push(result.to_string());
    Ok(lines)
}

/// Reads expressions line by line until an exit command or end of input.
fn repl(options: &EvalOptions, show_postfix: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Infix Expression Evaluator!")?;
    writeln!(stdout,
             "Supported: + - * / % ^ (), comparisons, logical (&&, ||), unary (!, ++, --, -, +)")?;
    writeln!(stdout, "Type 'exit' to quit.")?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "Expression: ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;
        let expression = line.trim_end_matches('\r');

        if EXIT_COMMANDS.contains(&expression) {
            return Ok(());
        }

        match run(expression, options, show_postfix) {
            Ok(mut output) => {
                if let Some(result) = output.pop() {
                    for line in output {
                        writeln!(stdout, "{line}")?;
                    }
                    writeln!(stdout, "Result: {result}")?;
                }
            },
            Err(message) => writeln!(stdout, "Error: {message}")?,
        }
    }
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=infixa=debug` or `RUST_LOG=infixa=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
