//! The `run` command: parse and evaluate a Monkey source file.

use monkey_eval::{stdout_handler, Interpreter, SharedPrintHandler, Value};

use super::{format_parse_errors, read_file};

/// Run a source file. `puts` output goes to stdout; errors go to stderr and
/// exit with status 1.
pub fn run_file(path: &str) {
    let content = read_file(path);
    tracing::debug!(path, bytes = content.len(), "running file");

    if let Err(lines) = run_source(&content, stdout_handler()) {
        for line in lines {
            eprintln!("{line}");
        }
        std::process::exit(1);
    }
}

/// Parse and evaluate `source` in a fresh interpreter.
///
/// Every parse error is reported and nothing is evaluated if there is any.
/// On success, returns the program's value.
pub fn run_source(
    source: &str,
    print_handler: SharedPrintHandler,
) -> Result<Option<Value>, Vec<String>> {
    let output = monkey_parse::parse(source);
    if output.has_errors() {
        return Err(format_parse_errors(source, &output.errors));
    }

    let mut interpreter = Interpreter::with_print_handler(print_handler);
    interpreter
        .eval_program(&output.program)
        .map_err(|error| vec![format!("ERROR: {error}")])
}
