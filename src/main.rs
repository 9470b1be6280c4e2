use clap::Parser;
use lispcore::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::PathBuf;

/// A small tree-walking Scheme-flavored Lisp interpreter.
#[derive(Parser, Debug)]
#[command(name = "lispcore")]
#[command(version)]
#[command(about = "A small tree-walking Scheme-flavored Lisp interpreter")]
struct CliArgs {
    /// Script file to execute (optional; starts a REPL if omitted).
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let interpreter = Interpreter::new();

    if let Some(script_path) = args.script {
        run_script(&script_path, &interpreter)?;
        return Ok(());
    }

    run_repl(&interpreter)
}

/// Executes every top-level datum in a script file in order, stopping at
/// the first error.
fn run_script(path: &PathBuf, interpreter: &Interpreter) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read script file {}: {}", path.display(), e))?;

    let mut remaining = contents.as_str();
    loop {
        remaining = skip_whitespace_and_comments(remaining);
        if remaining.is_empty() {
            break;
        }

        let end = find_datum_end(remaining)
            .map_err(|e| format!("parse error in {}: {}", path.display(), e))?;
        let (datum_text, rest) = remaining.split_at(end);
        remaining = rest;

        interpreter
            .run(datum_text)
            .map_err(|e| format!("{}", e))?;
    }

    Ok(())
}

fn run_repl(interpreter: &Interpreter) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), DefaultHistory> =
        Editor::with_config(config).map_err(|e| format!("failed to initialize REPL: {}", e))?;

    let history_file = ".lispcore_history";
    let _ = rl.load_history(history_file);

    println!("lispcore — a small tree-walking Lisp");
    println!("Enter an expression, or Ctrl-D to exit.");

    loop {
        let readline = rl.readline("lisp> ");

        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                match interpreter.run(&line) {
                    Ok(result) => println!("=> {}", result),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
    Ok(())
}

fn skip_whitespace_and_comments(input: &str) -> &str {
    let mut remaining = input;
    loop {
        remaining = remaining.trim_start();
        if remaining.starts_with(';') {
            match remaining.find('\n') {
                Some(pos) => remaining = &remaining[pos + 1..],
                None => remaining = "",
            }
        } else {
            break;
        }
    }
    remaining
}

/// Finds the byte length of the next complete datum: a parenthesized form
/// (tracking nesting depth) or a single bare token.
fn find_datum_end(input: &str) -> Result<usize, String> {
    let chars: Vec<char> = input.char_indices().map(|(_, c)| c).collect();
    let mut i = 0;

    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    if i >= chars.len() {
        return Err("empty input".to_string());
    }

    if chars[i] == '\'' {
        i += 1;
    }

    if i < chars.len() && chars[i] == '(' {
        let mut depth = 0;
        while i < chars.len() {
            match chars[i] {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(char_len(&chars[..=i]));
                    }
                }
                _ => {}
            }
            i += 1;
        }
        Err("unterminated list".to_string())
    } else {
        while i < chars.len() && !chars[i].is_whitespace() && chars[i] != ')' {
            i += 1;
        }
        Ok(char_len(&chars[..i]))
    }
}

fn char_len(chars: &[char]) -> usize {
    chars.iter().map(|c| c.len_utf8()).sum()
}
