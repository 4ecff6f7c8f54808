//! slip interpreter CLI.

use std::io;
use std::process::ExitCode;

use slipc::{apply_signatures, repl, usage_text, Command, Error, ReplOptions, Session};

fn main() -> ExitCode {
    slipc::logging::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{}", usage_text());
            return ExitCode::FAILURE;
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Repl(options) => {
            let session = Session::new(options);
            repl::run(&session, io::stdin().lock(), io::stdout().lock())
        }
        Command::Eval { source, options } => {
            let outcome = Session::new(options).eval(&source)?;
            println!("{outcome}");
            Ok(())
        }
        Command::Check { source } => {
            let ty = Session::new(ReplOptions::default()).type_of(&source)?;
            println!("{ty}");
            Ok(())
        }
        Command::Parse { source } => {
            let tree = Session::new(ReplOptions::default()).parse_tree(&source)?;
            println!("{tree}");
            Ok(())
        }
        Command::Apply { fun, arg } => {
            let applied = apply_signatures(&fun, &arg)?;
            println!("{applied}");
            Ok(())
        }
        Command::Builtins => {
            print!("{}", Session::new(ReplOptions::default()).builtins());
            Ok(())
        }
        Command::Help => {
            print!("{}", usage_text());
            Ok(())
        }
        Command::Version => {
            println!("slip {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
