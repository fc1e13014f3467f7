use std::{
    env,
    io::{self, BufRead},
    process::ExitCode,
};

use intcalc::{evaluate, render_error};

/// Prints the value of `expression`, or its diagnostic on stderr.
fn run(expression: &str) -> bool {
    match evaluate(expression) {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(error) => {
            eprint!("{}", render_error(&error, expression));
            false
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut failed = false;

    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(error) => {
                    eprintln!("Failed to read stdin: {}", error);
                    return ExitCode::FAILURE;
                }
            };

            if !line.trim().is_empty() && !run(&line) {
                failed = true;
            }
        }
    } else {
        for expression in &args {
            if !run(expression) {
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
