//! Read-eval-print loop.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::session::Session;

const HELP: &str = "\
Enter an expression such as (+ 1 2) to evaluate it.

Commands:
  :type <expr>    Show the type of an expression
  :parse <expr>   Show the parse tree of an expression
  :builtins       List the registered functions
  :help           Show this message
  :quit           Leave the REPL (end of input also works)";

/// What one input line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Eval(&'a str),
    Type(&'a str),
    Parse(&'a str),
    Builtins,
    Help,
    Quit,
    Unknown(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    let Some(meta) = line.strip_prefix(':') else {
        return Line::Eval(line);
    };

    let (name, rest) = meta
        .split_once(char::is_whitespace)
        .map_or((meta, ""), |(name, rest)| (name, rest.trim()));
    match name {
        "type" | "t" => Line::Type(rest),
        "parse" | "p" => Line::Parse(rest),
        "builtins" | "b" => Line::Builtins,
        "help" | "h" | "?" => Line::Help,
        "quit" | "q" => Line::Quit,
        _ => Line::Unknown(name),
    }
}

/// Run the loop until `:quit` or end of input.
///
/// Results go to `output`; errors are reported there too, as
/// `error: <message>`, and the loop carries on.
pub fn run(session: &Session, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let prompt = &session.options().prompt;
    write!(output, "{prompt}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let reply = match classify(&line) {
            Line::Blank => None,
            Line::Quit => break,
            Line::Eval(source) => Some(session.eval(source).map(|outcome| outcome.to_string())),
            Line::Type(source) => Some(session.type_of(source).map(|ty| ty.show())),
            Line::Parse(source) => Some(session.parse_tree(source)),
            Line::Builtins => Some(Ok(session.builtins().trim_end().to_owned())),
            Line::Help => Some(Ok(HELP.to_owned())),
            Line::Unknown(name) => Some(Ok(format!(
                "error: unknown command `:{name}` (try :help)"
            ))),
        };

        match reply {
            Some(Ok(text)) => writeln!(output, "{text}")?,
            Some(Err(err)) => {
                tracing::debug!(%err, "line failed");
                writeln!(output, "error: {err}")?;
            }
            None => {}
        }
        write!(output, "{prompt}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
