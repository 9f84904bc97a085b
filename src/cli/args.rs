// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Start without the demo folders, tags and notes
    #[arg(long, global = true)]
    pub empty: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (shell or list)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Edit notes interactively, one command per line
    Shell {
        /// Read commands from this file instead of stdin
        #[arg(value_name = "SCRIPT")]
        script: Option<PathBuf>,
    },

    /// Print the visible note list once
    List {
        /// Only notes whose title or content contains this text
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Only notes in this folder
        #[arg(long, value_name = "NAME", conflicts_with = "tag")]
        folder: Option<String>,

        /// Only notes carrying this tag
        #[arg(long, value_name = "NAME")]
        tag: Option<String>,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },
}
