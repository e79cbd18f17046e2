//! Line-oriented commands read by the binary from stdin

use std::str::FromStr;

use shared::{IndustryFilter, SharedError};

use crate::controller::DirectoryCommand;

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Forward to the controller
    Directory(DirectoryCommand),
    /// Print the current view again
    Show,
    Quit,
}

impl FromStr for CliCommand {
    type Err = SharedError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (verb, rest) = match line.trim_start().split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (line.trim(), ""),
        };

        let invalid = || SharedError::InvalidCommand {
            input: line.to_string(),
        };

        let command = match verb {
            // Everything after "search " is the raw input, spaces included
            "search" => DirectoryCommand::SetSearchInput(rest.to_string()),
            "industry" => {
                let name = rest.trim();
                if name.is_empty() {
                    return Err(invalid());
                }
                if name.eq_ignore_ascii_case("all") {
                    DirectoryCommand::SelectIndustry(IndustryFilter::All)
                } else {
                    DirectoryCommand::SelectIndustry(IndustryFilter::from(name))
                }
            }
            "verified" => DirectoryCommand::SetVerifiedOnly(parse_switch(rest).ok_or_else(invalid)?),
            "pending" => DirectoryCommand::SetPendingOnly(parse_switch(rest).ok_or_else(invalid)?),
            "clear" => DirectoryCommand::ClearFilters,
            "reload" => DirectoryCommand::Reload,
            "show" => return Ok(CliCommand::Show),
            "quit" | "exit" => return Ok(CliCommand::Quit),
            _ => return Err(invalid()),
        };

        Ok(CliCommand::Directory(command))
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}
