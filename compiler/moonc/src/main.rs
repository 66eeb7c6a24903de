//! Moon lexer CLI.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use moonc::CliError;

fn main() -> ExitCode {
    moonc::init_tracing();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = moonc::run(std::env::args_os().skip(1), &mut out)
        .and_then(|()| out.flush().map_err(CliError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
