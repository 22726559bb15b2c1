//! Application layer for ringledger.
//!
//! A pure state machine plus a production environment, consumed by the
//! line-oriented CLI binary. The state machine owns the whole interactive
//! session: encode-and-store with timing capture, a rotation poll after
//! every store, and batch recovery through the current key state.
//!
//! # Components
//!
//! - [`App`]: command-in/outcome-out state machine, no I/O
//! - [`Command`] / [`Outcome`]: typed command handlers; textual input
//!   validation stops here and never reaches the core
//! - [`SystemEnv`]: production clock and OS randomness

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod app;
mod command;
mod system_env;

pub use app::App;
pub use command::{Command, CommandParseError, Outcome};
pub use system_env::SystemEnv;
