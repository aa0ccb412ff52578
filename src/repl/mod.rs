//! Interactive command loop.
//!
//! One command per line: the line is split on whitespace, the first token
//! selects a handler from a lookup table, and the argument count is checked
//! uniformly before the handler runs. Every per-command error is converted
//! to a one-line `Error: ...` response at this single boundary; the loop
//! itself only ends on `close`/`exit` (or end of input).

mod handlers;

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Mutable state of one interactive session.
pub struct Session {
    book: AddressBook,
    birthday_window_days: i64,
}

impl Session {
    /// Create a session over a loaded (or fresh) address book.
    pub fn new(book: AddressBook, birthday_window_days: i64) -> Self {
        Self {
            book,
            birthday_window_days,
        }
    }

    /// The session's address book, for persistence and inspection.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

/// What a dispatched line asks the loop to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// One-line (possibly multi-line) response to print.
    Reply(String),
    /// The session should persist and terminate.
    Exit,
    /// Blank input; print nothing and re-prompt.
    Silent,
}

/// Handler signature shared by every table entry.
type Handler = fn(&[&str], &mut Session, NaiveDate) -> CommandResult<String>;

/// One entry of the command lookup table.
struct CommandSpec {
    name: &'static str,
    required_args: usize,
    handler: Handler,
}

/// Every recognized command except `close`/`exit`, which end the loop
/// instead of producing a response.
const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        required_args: 0,
        handler: handlers::hello,
    },
    CommandSpec {
        name: "add",
        required_args: 2,
        handler: handlers::add_contact,
    },
    CommandSpec {
        name: "change",
        required_args: 3,
        handler: handlers::change_phone,
    },
    CommandSpec {
        name: "phone",
        required_args: 1,
        handler: handlers::show_phones,
    },
    CommandSpec {
        name: "all",
        required_args: 0,
        handler: handlers::show_all,
    },
    CommandSpec {
        name: "add-birthday",
        required_args: 2,
        handler: handlers::add_birthday,
    },
    CommandSpec {
        name: "show-birthday",
        required_args: 1,
        handler: handlers::show_birthday,
    },
    CommandSpec {
        name: "birthdays",
        required_args: 0,
        handler: handlers::birthdays,
    },
];

/// Parse one input line and run the selected command against the session.
///
/// `today` anchors all date arithmetic so callers (and tests) control the
/// clock. Handler errors are rendered here and never propagate further.
pub fn dispatch(line: &str, session: &mut Session, today: NaiveDate) -> Outcome {
    let mut parts = line.split_whitespace();
    let command = match parts.next() {
        Some(command) => command,
        None => return Outcome::Silent,
    };
    let args: Vec<&str> = parts.collect();

    if command == "close" || command == "exit" {
        return Outcome::Exit;
    }

    let spec = match COMMANDS.iter().find(|c| c.name == command) {
        Some(spec) => spec,
        None => return Outcome::Reply("Invalid command.".to_string()),
    };

    debug!(command, args = args.len(), "dispatching");

    // Uniform arity check; extra arguments beyond the required count are
    // ignored by the handlers.
    let result = if args.len() < spec.required_args {
        Err(CommandError::MissingArguments)
    } else {
        (spec.handler)(&args, session, today)
    };

    Outcome::Reply(match result {
        Ok(response) => response,
        Err(e) => format!("Error: {}", e),
    })
}

/// Run the read-eval-print loop until `close`/`exit` or end of input.
///
/// Reads commands from `input` and writes prompts and responses to
/// `output`; the caller persists the book afterwards.
pub fn run(session: &mut Session, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut lines = input.lines();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // End of input behaves like `exit`: the caller still saves.
            None => break,
        };

        match dispatch(&line, session, Local::now().date_naive()) {
            Outcome::Reply(response) => writeln!(output, "{}", response)?,
            Outcome::Silent => {}
            Outcome::Exit => break,
        }
    }

    writeln!(output, "Good bye!")?;
    Ok(())
}
