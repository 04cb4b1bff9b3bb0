//! The interactive read-eval-print loop.
//!
//! Reads one command per line from stdin, dispatches it against the
//! in-memory address book, and prints the reply to stdout. The loop is
//! single-threaded and blocks on each read; `close`, `exit`, or end of
//! input terminates it. Nothing is persisted on exit.

use crate::book::AddressBook;
use crate::commands::{dispatch, Dispatch};
use crate::config::Config;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Banner printed once at startup.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Farewell printed on exit.
pub const GOODBYE: &str = "Good bye!";

const PROMPT: &str = "Enter a command: ";

/// Loop state; the exit keywords and end of input transition to
/// `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Terminated,
}

/// Run the loop over stdin/stdout until `close`/`exit` or end of input.
pub fn run(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_with(stdin.lock(), &mut stdout, config)
}

/// Loop body over an explicit reader and writer, so tests can drive it
/// with in-memory buffers.
pub fn run_with<R, W>(mut input: R, output: &mut W, config: &Config) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut book = AddressBook::new();
    let mut state = LoopState::Running;
    let mut line = String::new();

    writeln!(output, "{}", WELCOME)?;

    while state == LoopState::Running {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like an explicit exit.
            debug!("end of input, terminating");
            writeln!(output, "{}", GOODBYE)?;
            state = LoopState::Terminated;
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match dispatch(trimmed, &mut book, config) {
            Dispatch::Reply(reply) => {
                if !reply.is_empty() {
                    writeln!(output, "{}", reply)?;
                }
            }
            Dispatch::Exit => {
                writeln!(output, "{}", GOODBYE)?;
                state = LoopState::Terminated;
            }
        }
    }

    Ok(())
}
