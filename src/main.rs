//! Interactive console entry point.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twenty_one::{Session, StdConsole, TableOptions};

fn main() -> ExitCode {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut session = Session::new(TableOptions::default(), StdConsole, seed);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("The game cannot continue: {err}");
            ExitCode::FAILURE
        }
    }
}
