//! Commands and outcomes for the application state machine.
//!
//! Typed command handlers decouple the session from any particular front
//! end. Textual input validation happens here, at the collaborator
//! boundary; the core only ever sees well-formed integers.

use std::time::Duration;

use thiserror::Error;

/// Errors from parsing a line of user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// The line was empty or whitespace.
    #[error("empty input")]
    Empty,

    /// The verb is not one of the known commands.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// `add` was given something that does not parse as an integer.
    #[error("not a valid integer: {0}")]
    InvalidInteger(String),
}

/// A request against the application state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Encode a plaintext, store it as the next case, then poll rotation.
    EncodeAndStore {
        /// Plaintext integer to encode.
        plaintext: i64,
    },

    /// Decode every stored case through the current key state.
    ProcessAll,

    /// Report the recorded encode and process timing sequences.
    ShowTimings,

    /// Leave the interactive loop.
    Quit,
}

impl Command {
    /// Parse a line of user input.
    ///
    /// Grammar: `add <integer>`, `process`, `timings`, `quit` / `exit`.
    /// Anything after the recognized tokens is ignored.
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(CommandParseError::Empty);
        };
        match verb {
            "add" => {
                let argument = parts.next().unwrap_or("");
                argument
                    .parse::<i64>()
                    .map(|plaintext| Command::EncodeAndStore { plaintext })
                    .map_err(|_| CommandParseError::InvalidInteger(argument.to_string()))
            },
            "process" => Ok(Command::ProcessAll),
            "timings" => Ok(Command::ShowTimings),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// The result of handling a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A case was encoded and appended to the ledger.
    CaseStored {
        /// Identifier assigned to the stored case.
        case_id: u64,
        /// Encoded value appended to the ledger.
        encoded_value: i64,
        /// Whether the post-store rotation poll replaced the key pair.
        rotated: bool,
        /// Wall-clock duration of the encode call.
        elapsed: Duration,
    },

    /// Every stored case was decoded through the current key state.
    CasesProcessed {
        /// `(case_id, decoded_value)` pairs in insertion order.
        results: Vec<(u64, i64)>,
        /// Wall-clock duration of the batch decode.
        elapsed: Duration,
    },

    /// Recorded timing sequences.
    Timings {
        /// One duration per encode call, in call order.
        encode: Vec<Duration>,
        /// One duration per process-all call, in call order.
        process: Vec<Duration>,
    },

    /// Nothing to do; the caller should leave its loop.
    Quit,
}
