// src/cli/shell.rs
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

use crate::application::NotesSession;
use crate::cli::commands::{ShellCommand, HELP};
use crate::domain::{NoteId, NotePatch};
use crate::ports::TextPresenter;

/// Whether the shell keeps reading after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// Line-oriented front end over a [`NotesSession`]
pub struct Shell {
    session: NotesSession,
    presenter: TextPresenter,
    tag_color: String,
}

impl Shell {
    pub fn new(session: NotesSession, tag_color: impl Into<String>) -> Self {
        Self {
            session,
            presenter: TextPresenter::new(),
            tag_color: tag_color.into(),
        }
    }

    pub fn session(&self) -> &NotesSession {
        &self.session
    }

    /// Read commands until `quit` or end of input, writing replies to `output`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() || line.trim_start().starts_with("//") {
                continue;
            }
            match line.parse::<ShellCommand>() {
                Ok(command) => match self.execute(command) {
                    Flow::Continue(reply) => output.write_all(reply.as_bytes())?,
                    Flow::Quit => break,
                },
                Err(err) => writeln!(output, "{err}. Type 'help' for commands.")?,
            }
        }
        output.flush()?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, command: ShellCommand) -> Flow {
        let reply = match command {
            ShellCommand::New => {
                self.session.create_note();
                self.render_selected()
            }
            ShellCommand::Title(title) => self.edit_selected(NotePatch::new().title(title)),
            ShellCommand::Content(content) => self.edit_selected(NotePatch::new().content(content)),
            ShellCommand::Move(name) => match self.session.store().folder_by_name(&name) {
                Some(folder) => {
                    let patch = NotePatch::new().folder(folder.id.clone());
                    self.edit_selected(patch)
                }
                None => format!("No folder named '{name}'.\n"),
            },
            ShellCommand::ToggleTag(name) => self.toggle_tag(&name),
            ShellCommand::Remove => match self.selected_id() {
                Some(id) => {
                    self.session.delete_note(&id);
                    self.presenter.render_list(&self.session)
                }
                None => no_selection(),
            },
            ShellCommand::Select(n) => {
                let id = self
                    .session
                    .visible_notes()
                    .get(n - 1)
                    .map(|note| note.id.clone());
                match id {
                    Some(id) => {
                        self.session.select_note(&id);
                        self.render_selected()
                    }
                    None => format!("There is no note {n} in the list.\n"),
                }
            }
            ShellCommand::Folder(name) => match self.session.store().folder_by_name(&name) {
                Some(folder) => {
                    let id = folder.id.clone();
                    self.session.select_folder(&id);
                    self.presenter.render_list(&self.session)
                }
                None => format!("No folder named '{name}'.\n"),
            },
            ShellCommand::MakeFolder(name) => match self.session.create_folder(&name) {
                Some(_) => self.presenter.render_folders(&self.session),
                None => format!("Cannot create folder '{}': empty or already exists.\n", name.trim()),
            },
            ShellCommand::RemoveFolder(name) => match self.session.store().folder_by_name(&name) {
                Some(folder) if folder.builtin => format!("'{}' cannot be deleted.\n", folder.name),
                Some(folder) => {
                    let id = folder.id.clone();
                    self.session.delete_folder(&id);
                    self.presenter.render_folders(&self.session)
                }
                None => format!("No folder named '{name}'.\n"),
            },
            ShellCommand::Filter(name) => match self.session.store().tag_by_name(&name) {
                Some(tag) => {
                    let id = tag.id.clone();
                    self.session.select_tag(&id);
                    self.presenter.render_list(&self.session)
                }
                None => format!("No tag named '{name}'.\n"),
            },
            ShellCommand::MakeTag { name, color } => {
                let color = color.unwrap_or_else(|| self.tag_color.clone());
                match self.session.create_tag(&name, &color) {
                    Some(_) => self.presenter.render_tags(&self.session),
                    None => format!("Cannot create tag '{}': empty or already exists.\n", name.trim()),
                }
            }
            ShellCommand::RemoveTag(name) => match self.session.store().tag_by_name(&name) {
                Some(tag) => {
                    let id = tag.id.clone();
                    self.session.delete_tag(&id);
                    self.presenter.render_tags(&self.session)
                }
                None => format!("No tag named '{name}'.\n"),
            },
            ShellCommand::Search(text) => {
                self.session.set_search(&text);
                self.presenter.render_list(&self.session)
            }
            ShellCommand::List => self.presenter.render_list(&self.session),
            ShellCommand::Show => self.render_selected(),
            ShellCommand::Folders => self.presenter.render_folders(&self.session),
            ShellCommand::Tags => self.presenter.render_tags(&self.session),
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Flow::Quit,
        };
        Flow::Continue(reply)
    }

    fn selected_id(&self) -> Option<NoteId> {
        self.session.selected_note().map(|note| note.id.clone())
    }

    fn edit_selected(&mut self, patch: NotePatch) -> String {
        match self.selected_id() {
            Some(id) => {
                self.session.update_note(&id, patch);
                self.render_selected()
            }
            None => no_selection(),
        }
    }

    fn toggle_tag(&mut self, name: &str) -> String {
        let Some(tag) = self.session.store().tag_by_name(name).map(|t| t.id.clone()) else {
            return format!("No tag named '{name}'.\n");
        };
        match self.selected_id() {
            Some(id) => {
                self.session.toggle_tag(&id, &tag);
                self.render_selected()
            }
            None => no_selection(),
        }
    }

    fn render_selected(&self) -> String {
        match self.session.selected_note() {
            Some(note) => self.presenter.render_note(&self.session, note),
            None => {
                debug!("Nothing selected to show");
                no_selection()
            }
        }
    }
}

fn no_selection() -> String {
    "Select or create a note to start editing.\n".to_string()
}
