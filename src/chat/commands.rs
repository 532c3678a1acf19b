//! Slash command parsing for the chat application.
//!
//! Lines that start with `/` stand in for the page's buttons and links; every
//! other line is typed into the input field and submitted.

use crate::chat::modal::ClickTarget;

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Upload the file at the given path.
    Upload(String),

    /// Clear the server session and reload the page.
    Refresh,

    /// Open the help modal.
    Help,

    /// Press the modal's dismiss control.
    Close,

    /// Re-render the whole visual log.
    Log,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command,
/// or `None` if it should be sent as a message.
///
/// # Examples
///
/// ```
/// # use docchat::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/upload report.pdf").is_some());
/// assert!(parse_command("What does the report say?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    let rest = input.strip_prefix('/')?;
    let mut parts = rest.splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "upload" => match argument {
            Some(path) => ChatCommand::Upload(path.to_string()),
            None => ChatCommand::Invalid("/upload requires a file path".to_string()),
        },
        "refresh" | "reset" => ChatCommand::Refresh,
        "help" | "?" => ChatCommand::Help,
        "close" => ChatCommand::Close,
        "log" | "history" => ChatCommand::Log,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// What a line typed while the modal is open does.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModalInput {
    /// Forward a click to the modal.
    Click(ClickTarget),
    /// Exit the chat application.
    Quit,
}

/// Maps a line typed while the modal is open.
///
/// An empty line is a click on the backdrop and `/close` presses the dismiss
/// control. Quitting still works; anything else lands on the modal's content.
pub fn parse_modal_input(input: &str) -> ModalInput {
    if input.trim().is_empty() {
        return ModalInput::Click(ClickTarget::Backdrop);
    }
    match parse_command(input) {
        Some(ChatCommand::Quit) => ModalInput::Quit,
        Some(ChatCommand::Close) => ModalInput::Click(ClickTarget::CloseControl),
        _ => ModalInput::Click(ClickTarget::Content),
    }
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /upload <path>         Upload a .pdf, .txt, .csv or .docx file for the chat to use
  /refresh               Clear the server session and start over
  /log                   Show the whole conversation again
  /help                  Show this help
  /close                 Close this help
  /quit                  Exit the chat
Anything else is sent as a message."#
}
