// src/cli/commands.rs
use std::str::FromStr;
use thiserror::Error;

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    New,
    Title(String),
    Content(String),
    Move(String),
    ToggleTag(String),
    Remove,
    Select(usize),
    Folder(String),
    MakeFolder(String),
    RemoveFolder(String),
    Filter(String),
    MakeTag { name: String, color: Option<String> },
    RemoveTag(String),
    Search(String),
    List,
    Show,
    Folders,
    Tags,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),
    #[error("Not a note number: {0}")]
    InvalidIndex(String),
}

pub const HELP: &str = "\
new                     create a note in the active folder
title <text>            retitle the selected note
content <text>          replace the selected note's body (\\n for newlines)
move <folder>           move the selected note to a folder
tag <tag>               toggle a tag on the selected note
rm                      delete the selected note
select <n>              select the n-th note of the list
folder <name>           show only notes in a folder
mkfolder <name>         create a folder
rmfolder <name>         delete a folder
filter <tag>            show only notes with a tag
mktag <name> [#color]   create a tag
rmtag <name>            delete a tag
search [text]           filter by text; no text clears the search
ls | show | folders | tags | help | quit
";

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb {
            "" => return Err(ParseError::Empty),
            "new" => ShellCommand::New,
            "title" => ShellCommand::Title(rest.to_string()),
            "content" => ShellCommand::Content(unescape(rest)),
            "move" => ShellCommand::Move(required("move", rest)?),
            "tag" => ShellCommand::ToggleTag(required("tag", rest)?),
            "rm" => ShellCommand::Remove,
            "select" => {
                let raw = required("select", rest)?;
                match raw.parse::<usize>() {
                    Ok(n) if n > 0 => ShellCommand::Select(n),
                    _ => return Err(ParseError::InvalidIndex(raw)),
                }
            }
            "folder" => ShellCommand::Folder(required("folder", rest)?),
            "mkfolder" => ShellCommand::MakeFolder(required("mkfolder", rest)?),
            "rmfolder" => ShellCommand::RemoveFolder(required("rmfolder", rest)?),
            "filter" => ShellCommand::Filter(required("filter", rest)?),
            "mktag" => {
                let raw = required("mktag", rest)?;
                match raw.rsplit_once(char::is_whitespace) {
                    Some((name, color)) if color.starts_with('#') => ShellCommand::MakeTag {
                        name: name.trim().to_string(),
                        color: Some(color.to_string()),
                    },
                    _ => ShellCommand::MakeTag { name: raw, color: None },
                }
            }
            "rmtag" => ShellCommand::RemoveTag(required("rmtag", rest)?),
            "search" => ShellCommand::Search(rest.to_string()),
            "ls" => ShellCommand::List,
            "show" => ShellCommand::Show,
            "folders" => ShellCommand::Folders,
            "tags" => ShellCommand::Tags,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn required(verb: &'static str, rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(verb))
    } else {
        Ok(rest.to_string())
    }
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("new", ShellCommand::New)]
    #[case("  ls  ", ShellCommand::List)]
    #[case("title Weekly plan", ShellCommand::Title("Weekly plan".into()))]
    #[case("content a\\nb", ShellCommand::Content("a\nb".into()))]
    #[case("select 2", ShellCommand::Select(2))]
    #[case("mkfolder Side projects", ShellCommand::MakeFolder("Side projects".into()))]
    #[case("search", ShellCommand::Search(String::new()))]
    #[case("exit", ShellCommand::Quit)]
    fn test_parse_command(#[case] line: &str, #[case] expected: ShellCommand) {
        assert_eq!(line.parse::<ShellCommand>(), Ok(expected));
    }

    #[rstest]
    #[case("mktag Urgent #ffca28", "Urgent", Some("#ffca28"))]
    #[case("mktag Very urgent #f00", "Very urgent", Some("#f00"))]
    #[case("mktag Someday maybe", "Someday maybe", None)]
    fn test_parse_mktag(#[case] line: &str, #[case] name: &str, #[case] color: Option<&str>) {
        let expected = ShellCommand::MakeTag {
            name: name.to_string(),
            color: color.map(str::to_string),
        };
        assert_eq!(line.parse::<ShellCommand>(), Ok(expected));
    }

    #[rstest]
    #[case("", ParseError::Empty)]
    #[case("frobnicate", ParseError::Unknown("frobnicate".into()))]
    #[case("move", ParseError::MissingArgument("move"))]
    #[case("select 0", ParseError::InvalidIndex("0".into()))]
    #[case("select two", ParseError::InvalidIndex("two".into()))]
    fn test_parse_errors(#[case] line: &str, #[case] expected: ParseError) {
        assert_eq!(line.parse::<ShellCommand>(), Err(expected));
    }
}
