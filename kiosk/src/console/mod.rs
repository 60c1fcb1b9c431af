//! Text console: views, command parsing and dispatch

pub mod command;
pub mod render;
pub mod shell;

pub use command::{AdminCommand, Command, ParseError};
pub use shell::{AdminShell, CustomerShell, Outcome};
