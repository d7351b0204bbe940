use std::{fs, process::ExitCode};

use clap::Parser;
use linecalc::{Calculator, LineOutcome, Outcome};
use rustyline::{DefaultEditor, error::ReadlineError};

/// linecalc evaluates arithmetic and comparison expressions line by line,
/// keeping variables between lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linecalc to read a script file instead of an expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prompt shown by the interactive session.
    #[arg(short, long, default_value = ">>> ")]
    prompt: String,

    /// Expression to evaluate, or the script path with `--file`. Without it
    /// an interactive session is started.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        return interactive(&args.prompt);
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    run_script(&script)
}

/// Evaluates every line of `script`, printing values to stdout and errors to
/// stderr. Fails if any line failed.
fn run_script(script: &str) -> ExitCode {
    let mut calculator = Calculator::new();
    let mut failed = false;

    for LineOutcome { line, outcome } in calculator.run_script(script) {
        match outcome {
            Outcome::Value(value) => println!("{value}"),
            Outcome::Error(e) => {
                eprintln!("Error on line {line}: {e}");
                failed = true;
            },
            Outcome::Exit | Outcome::Empty => {},
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn interactive(prompt: &str) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            return ExitCode::FAILURE;
        },
    };
    let mut calculator = Calculator::new();

    loop {
        match editor.readline(prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    eprintln!("Error (history): {e}");
                }

                match calculator.eval_line(&line) {
                    Outcome::Value(value) => println!("{value}"),
                    Outcome::Error(e) => {
                        let indent = prompt.chars().count() + e.column(&line);
                        eprintln!("{:indent$}^", "");
                        eprintln!("Error: {e}");
                    },
                    Outcome::Exit => break,
                    Outcome::Empty => {},
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error (I/O): {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
