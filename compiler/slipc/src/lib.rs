//! The `slip` command line.
//!
//! ```text
//! text ──► slip_parse::parse ──► Value
//!                                  │
//!                                  ├──► slip_types::check ──► Prototype
//!                                  │
//!                                  └──► slip_eval::Interpreter ──► Dynamic
//! ```
//!
//! [`Session`] strings the phases together for one registry, [`repl::run`]
//! drives it line by line and [`Command`] is the parsed command line.

mod error;
pub mod logging;
mod options;
pub mod repl;
mod session;

pub use error::{Error, Result};
pub use options::{usage_text, Command, ReplOptions};
pub use session::{apply_signatures, Outcome, Session};
