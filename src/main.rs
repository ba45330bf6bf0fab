use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use reckon::{evaluate_line, interpreter::symbol_table::SymbolTable};

/// reckon is a small interactive interpreter for arithmetic expressions with
/// session variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to run a file instead of a single expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// An expression to evaluate, or a file path with --file.
    contents: Option<String>,
}

/// What the session should do after one line has been handled.
enum Flow {
    Continue,
    Stop,
}

fn main() {
    let args = Args::parse();
    let mut table = SymbolTable::new();

    match args.contents {
        Some(contents) if args.file => run_file(&contents, &mut table),
        Some(contents) => match evaluate_line(&contents, &mut table) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        },
        None => run_repl(&mut table),
    }
}

fn run_repl(table: &mut SymbolTable) {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        if line.trim().is_empty() {
            continue;
        }
        if let Flow::Stop = handle_line(&line, table) {
            break;
        }
    }
}

fn run_file(path: &str, table: &mut SymbolTable) {
    let script = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        std::process::exit(1);
    });

    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Flow::Stop = handle_line(line, table) {
            break;
        }
    }
}

fn handle_line(line: &str, table: &mut SymbolTable) -> Flow {
    match line.trim() {
        "exit" => return Flow::Stop,
        ".state" => print_state(table),
        ".clear" => {
            table.clear();
            println!("Cleared memory");
        },
        line => match evaluate_line(line, table) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        },
    }

    Flow::Continue
}

fn print_state(table: &SymbolTable) {
    let mut entries = table.snapshot();
    if entries.is_empty() {
        println!("No variables stored");
        return;
    }

    entries.sort_by(|left, right| left.0.cmp(&right.0));
    for (name, value) in entries {
        println!("{name}: {value}");
    }
}
