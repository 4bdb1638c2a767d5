use std::{fs, io, process::ExitCode};

use clap::Parser;
use treelox::runner::Runner;

/// Exit status when the script file cannot be read (`EX_NOINPUT`).
const EXIT_NO_INPUT: u8 = 66;

/// treelox runs Lox scripts with a tree-walking interpreter. Without
/// CONTENTS it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells treelox to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the value of the last top-level expression statement
    /// once the script has finished.
    #[arg(short, long)]
    pipe_mode: bool,

    /// An inline script, or the path of a script with `--file`.
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        return repl();
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::from(EXIT_NO_INPUT);
            },
        }
    } else {
        contents
    };

    match Runner::new(io::stdout()).run(&script) {
        Ok(value) => {
            if args.pipe_mode
               && let Some(v) = value
            {
                println!("{v}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        },
    }
}

/// Runs an interactive session on stdin. A failure to read a line is
/// reported and ends the session unsuccessfully.
fn repl() -> ExitCode {
    match Runner::new(io::stdout()).repl(io::stdin().lock(), io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nFailed to read input: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Installs a stderr log subscriber, but only if `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
