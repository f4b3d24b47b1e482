//! Monkey interpreter CLI.

use monkey::commands::{lex_file, parse_file, run_file, run_repl};

fn main() {
    monkey::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        run_repl();
        return;
    };

    match command.as_str() {
        "repl" => run_repl(),
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey run <file.mk>");
                std::process::exit(1);
            };
            run_file(path);
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey lex <file.mk>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey parse <file.mk>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare script path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("mk"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command] [file]");
    println!();
    println!("Commands:");
    println!("  repl               Start the interactive prompt (default)");
    println!("  run <file.mk>      Run a Monkey program");
    println!("  <file.mk>          Same as `run <file.mk>`");
    println!("  lex <file.mk>      Tokenize and display tokens");
    println!("  parse <file.mk>    Parse and display each statement");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("REPL commands:");
    println!("  :env               List bindings in the global environment");
    println!("  :quit              Leave the REPL (so does end of input)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=monkey_eval=debug) to trace evaluation.");
}
