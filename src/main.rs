/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line driver: runs a script file or an interactive
 *           prompt over the Briar front end.
 *
 * License:
 * This file is part of the Briar programming language project.
 *
 * Briar is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser as ArgParser;

use briar::ast::AstPrinter;
use briar::diagnostics::Reporter;
use briar::lexer;
use briar::parser;

/// Exit code for a command-line usage error.
const EX_USAGE: i32 = 64;

/// Exit code when a script reported any diagnostic.
const EX_DATAERR: i32 = 65;

/// briar parses an expression script and prints its syntax tree.
#[derive(ArgParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to run; starts the interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Print the scanned token stream as JSON before parsing.
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed syntax tree as JSON instead of the s-expression
    /// form.
    #[arg(long)]
    dump_ast: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp || err.kind() == ErrorKind::DisplayVersion =>
        {
            let _ = err.print();
            return;
        }
        Err(err) => {
            let _ = err.print();
            process::exit(EX_USAGE);
        }
    };

    match &args.script {
        Some(path) => run_file(path, &args),
        None => run_prompt(&args),
    }
}

/// Reads a whole script, runs it once, and exits non-zero if anything was
/// reported.
fn run_file(path: &PathBuf, args: &Args) {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Could not read '{}': {}", path.display(), err);
        process::exit(EX_USAGE);
    });

    let mut reporter = Reporter::new();
    run(&source, args, &mut reporter);

    if reporter.had_error() {
        process::exit(EX_DATAERR);
    }
}

/// The interactive prompt: one expression per line, errors forgiven
/// between lines.
fn run_prompt(args: &Args) {
    let mut reporter = Reporter::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        run(&line, args, &mut reporter);
        reporter.reset();
    }
}

/// Runs one source buffer through the pipeline and prints the result.
fn run(source: &str, args: &Args, reporter: &mut Reporter) {
    let tokens = lexer::tokenize(source, reporter);

    if args.dump_tokens {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Could not serialize tokens: {}", err),
        }
    }

    let expr = parser::parse(tokens, reporter);

    // Diagnostics were already printed as they were reported; a run that
    // produced any must not be used further.
    if reporter.had_error() {
        return;
    }

    if let Some(expr) = expr {
        if args.dump_ast {
            match serde_json::to_string_pretty(&expr) {
                Ok(json) => println!("{}", json),
                Err(err) => eprintln!("Could not serialize syntax tree: {}", err),
            }
        } else {
            println!("{}", AstPrinter::new().print(&expr));
        }
    }
}
