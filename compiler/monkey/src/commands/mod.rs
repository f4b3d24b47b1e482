//! Command handlers for the Monkey CLI.
//!
//! Each `*_file` function is what the binary calls: it reads the file,
//! prints results, and exits the process with status 1 on failure. The
//! `*_source` functions underneath do the work on a string and return what
//! would be printed, which is how the tests drive them.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use repl::{run_repl, start, PROMPT};
pub use run::{run_file, run_source};

/// Read a source file, exiting with a message on stderr if it can't be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Render parse errors as `error: <message> at <line>:<col>`.
pub(crate) fn format_parse_errors(
    source: &str,
    errors: &[monkey_parse::ParseError],
) -> Vec<String> {
    errors
        .iter()
        .map(|error| {
            let (line, col) = error.span.line_col(source);
            format!("error: {error} at {line}:{col}")
        })
        .collect()
}
