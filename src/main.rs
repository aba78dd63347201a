use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use meh::{
    interpreter::{lexer::tokenize, parser::parse},
    run,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MEH_LOG=meh=trace`.
const LOG_ENV: &str = "MEH_LOG";

/// meh is a small scripting language with first-class functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells meh to treat CONTENTS as a path to a script instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the value of the last top-level statement.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints the token stream instead of running the script.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the syntax tree instead of running the script.
    #[arg(long)]
    ast: bool,

    /// Raises log verbosity; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The script, or a path with `--file`. Read from standard input when
    /// omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    install_tracing(args.verbose);

    let (name, source) = match read_script(&args) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.tokens {
        for token in tokenize(&name, source.as_bytes()) {
            println!("{token}");
        }
        return ExitCode::SUCCESS;
    }

    if args.ast {
        println!("{}", parse(&name, source.as_bytes()));
        return ExitCode::SUCCESS;
    }

    match run(&name, source.as_bytes()) {
        Ok(result) => {
            if args.pipe_mode {
                println!("{}", result.program_output());
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn read_script(args: &Args) -> Result<(String, String), String> {
    match (&args.contents, args.file) {
        (Some(path), true) => {
            fs::read_to_string(path).map(|source| (path.clone(), source))
                                    .map_err(|e| format!("Failed to read the input file '{path}': {e}"))
        },
        (Some(script), false) => Ok(("<args>".to_string(), script.clone())),
        (None, _) => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)
                       .map_err(|e| format!("Failed to read standard input: {e}"))?;
            Ok(("stdin".to_string(), source))
        },
    }
}

fn install_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(io::stderr)
                                     .try_init();
}
