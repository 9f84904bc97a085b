// src/cli/mod.rs
pub mod args;
pub mod commands;
pub mod shell;

pub use commands::{ParseError, ShellCommand};
pub use shell::{Flow, Shell};
