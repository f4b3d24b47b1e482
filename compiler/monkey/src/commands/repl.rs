//! Interactive read-eval-print loop.
//!
//! Each line is parsed as a whole program and evaluated in one interpreter,
//! so bindings carry over from line to line.

use std::io::{self, BufRead, Write};

use monkey_eval::{stdout_handler, Interpreter, SharedPrintHandler};

pub const PROMPT: &str = ">> ";

/// Run the REPL on the process's stdin and stdout.
pub fn run_repl() {
    println!("Monkey {} (:quit to exit)", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(error) = start(stdin.lock(), &mut stdout, stdout_handler()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

/// Run the REPL over `input`, writing prompts and results to `output`.
///
/// `puts` output goes to `print_handler`. Returns at end of input or on
/// `:quit`.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    print_handler: SharedPrintHandler,
) -> io::Result<()> {
    let mut interpreter = Interpreter::with_print_handler(print_handler);
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match line.trim() {
            "" => continue,
            ":quit" => return Ok(()),
            ":env" => {
                for name in interpreter.environment().names() {
                    writeln!(output, "{name}")?;
                }
                continue;
            }
            _ => {}
        }

        let parsed = monkey_parse::parse(&line);
        if parsed.has_errors() {
            print_parser_errors(output, &parsed.error_messages())?;
            continue;
        }

        match interpreter.eval_program(&parsed.program) {
            Ok(Some(value)) => writeln!(output, "{}", value.inspect())?,
            Ok(None) => {}
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}

fn print_parser_errors<W: Write>(output: &mut W, messages: &[String]) -> io::Result<()> {
    writeln!(output, "Woops! We ran into some monkey business here!")?;
    writeln!(output, " parser errors:")?;
    for message in messages {
        writeln!(output, "\t{message}")?;
    }
    Ok(())
}
