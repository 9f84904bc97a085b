// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::{debug, info};

use crate::application::{Clock, EntityStore, NotesSession, SystemClock};
use crate::cli::args::{Args, Command};
use crate::cli::Shell;
use crate::infrastructure::{seed_demo, Config};
use crate::ports::TextPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeeper with arguments");

    let config = Config::load_or_default(args.config.as_deref())?;
    debug!(?config, "Loaded configuration");

    let session = build_session(&config, args.empty, SystemClock)?;

    match args.command {
        Command::Shell { script } => {
            let input: Box<dyn BufRead> = match script {
                Some(path) => {
                    info!(?path, "Running shell script");
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open script: {}", path.display()))?;
                    Box::new(BufReader::new(file))
                }
                None => Box::new(io::stdin().lock()),
            };
            let mut shell = Shell::new(session, config.defaults.tag_color.clone());
            shell.run(input, io::stdout().lock())
        }
        Command::List {
            search,
            folder,
            tag,
            json,
        } => {
            let session = apply_list_filters(session, search, folder, tag)?;
            let presenter = TextPresenter::new();
            if json {
                println!("{}", presenter.render_json(&session)?);
            } else {
                print!("{}", presenter.render_list(&session));
            }
            Ok(())
        }
    }
}

/// Create a session from `config`, seeded with demo content unless `empty`
pub fn build_session(config: &Config, empty: bool, clock: impl Clock + 'static) -> Result<NotesSession> {
    let mut store = EntityStore::with_settings(config.store_settings(), Box::new(clock));
    if config.seed.demo && !empty {
        seed_demo(&mut store).context("Failed to seed demo content")?;
    }
    Ok(NotesSession::new(store))
}

fn apply_list_filters(
    mut session: NotesSession,
    search: Option<String>,
    folder: Option<String>,
    tag: Option<String>,
) -> Result<NotesSession> {
    if let Some(name) = folder {
        let id = session
            .store()
            .folder_by_name(&name)
            .map(|f| f.id.clone())
            .ok_or_else(|| anyhow!("No folder named '{name}'"))?;
        session.select_folder(&id);
    }
    if let Some(name) = tag {
        let id = session
            .store()
            .tag_by_name(&name)
            .map(|t| t.id.clone())
            .ok_or_else(|| anyhow!("No tag named '{name}'"))?;
        session.select_tag(&id);
    }
    if let Some(text) = search {
        session.set_search(&text);
    }
    Ok(session)
}
