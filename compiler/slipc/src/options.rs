//! Command line parsing.

use crate::error::{Error, Result};

/// Settings shared by the REPL and one-shot evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplOptions {
    /// Type check each expression before evaluating it.
    pub check: bool,
    /// Print the inferred type next to each value.
    pub show_types: bool,
    pub prompt: String,
}

impl Default for ReplOptions {
    fn default() -> Self {
        ReplOptions {
            check: true,
            show_types: false,
            prompt: "> ".to_owned(),
        }
    }
}

impl ReplOptions {
    /// Apply one `--flag`. Returns `false` if the flag is not an option.
    fn apply_flag(&mut self, flag: &str) -> bool {
        if flag == "--no-check" {
            self.check = false;
        } else if flag == "--types" || flag == "-t" {
            self.show_types = true;
        } else if let Some(prompt) = flag.strip_prefix("--prompt=") {
            prompt.clone_into(&mut self.prompt);
        } else {
            return false;
        }
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl(ReplOptions),
    /// Check and evaluate one expression.
    Eval { source: String, options: ReplOptions },
    /// Print the type of one expression.
    Check { source: String },
    /// Print the parse tree of one expression.
    Parse { source: String },
    /// Print the prototype of applying one signature to another.
    Apply { fun: String, arg: String },
    Builtins,
    Help,
    Version,
}

impl Command {
    /// Parse the arguments that follow the program name.
    pub fn parse(args: &[String]) -> Result<Command> {
        let Some((command, rest)) = args.split_first() else {
            return Ok(Command::Repl(ReplOptions::default()));
        };

        match command.as_str() {
            "repl" => {
                let (options, positional) = split_options(rest)?;
                if let Some(extra) = positional.first() {
                    return Err(usage(format!("unexpected argument `{extra}`")));
                }
                Ok(Command::Repl(options))
            }
            "eval" => {
                let (options, positional) = split_options(rest)?;
                let source = expression(&positional, "slip eval <expr>")?;
                Ok(Command::Eval { source, options })
            }
            "check" => {
                let (_, positional) = split_options(rest)?;
                let source = expression(&positional, "slip check <expr>")?;
                Ok(Command::Check { source })
            }
            "parse" => {
                let (_, positional) = split_options(rest)?;
                let source = expression(&positional, "slip parse <expr>")?;
                Ok(Command::Parse { source })
            }
            "apply" => match rest {
                [fun, arg] => Ok(Command::Apply {
                    fun: fun.clone(),
                    arg: arg.clone(),
                }),
                _ => Err(usage(
                    "Usage: slip apply <fn-signature> <arg-signature>".to_owned(),
                )),
            },
            "builtins" => Ok(Command::Builtins),
            "help" | "--help" | "-h" => Ok(Command::Help),
            "version" | "--version" | "-V" => Ok(Command::Version),
            flag if flag.starts_with('-') => {
                let (options, positional) = split_options(args)?;
                if let Some(extra) = positional.first() {
                    return Err(usage(format!("unexpected argument `{extra}`")));
                }
                Ok(Command::Repl(options))
            }
            other => Err(usage(format!("unknown command `{other}`"))),
        }
    }
}

/// Separate option flags from positional arguments.
fn split_options(args: &[String]) -> Result<(ReplOptions, Vec<&str>)> {
    let mut options = ReplOptions::default();
    let mut positional = Vec::new();
    for arg in args {
        if arg.starts_with("--") || arg == "-t" {
            if !options.apply_flag(arg) {
                return Err(usage(format!("unknown option `{arg}`")));
            }
        } else {
            positional.push(arg.as_str());
        }
    }
    Ok((options, positional))
}

/// Positional arguments joined into one expression.
fn expression(positional: &[&str], usage_line: &str) -> Result<String> {
    if positional.is_empty() {
        return Err(usage(format!("Usage: {usage_line}")));
    }
    Ok(positional.join(" "))
}

fn usage(message: String) -> Error {
    Error::Usage(message)
}

/// Text printed by `slip help`.
pub fn usage_text() -> String {
    "\
slip: a tiny curried expression language

Usage: slip [command] [options]

Commands:
  repl                        Start the interactive loop (default)
  eval <expr>                 Type check and evaluate one expression
  check <expr>                Print the type of one expression
  parse <expr>                Print the parse tree of one expression
  apply <fn-sig> <arg-sig>    Apply a signature to an argument signature
  builtins                    List the registered functions
  help                        Show this help message
  version                     Show version information

Options (repl, eval):
  --no-check                  Evaluate without type checking first
  --types, -t                 Print each value's type
  --prompt=<text>             REPL prompt (default: \"> \")

Environment:
  SLIP_LOG, RUST_LOG          Tracing filter, e.g. SLIP_LOG=slip_eval=debug
  SLIP_LOG_TREE               Render traces as an indented span tree
"
    .to_owned()
}
