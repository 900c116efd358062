use super::CommandResult;
use crate::core::controller::SessionController;

pub type CommandHandler = fn(&mut SessionController, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
    pub handler: CommandHandler,
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    pub input: &'a str,
    pub args: &'a str,
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static Command> {
    all_commands()
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "/help",
        help: "Show available commands and usage information.",
        handler: super::handle_help,
    },
    Command {
        name: "profile",
        usage: "/profile [id]",
        help: "Switch the assistant profile, or list profiles.",
        handler: super::handle_profile,
    },
    Command {
        name: "character",
        usage: "/character [id]",
        help: "Switch the assistant character, or list characters.",
        handler: super::handle_character,
    },
    Command {
        name: "status",
        usage: "/status",
        help: "Show the active profile and character.",
        handler: super::handle_status,
    },
    Command {
        name: "sync",
        usage: "/sync",
        help: "Ask the backend to re-sync its knowledge files.",
        handler: super::handle_sync,
    },
    Command {
        name: "voice",
        usage: "/voice",
        help: "Voice input (not available in this build).",
        handler: super::handle_voice,
    },
    Command {
        name: "clear",
        usage: "/clear",
        help: "Delete the conversation history (asks for confirmation).",
        handler: super::handle_clear,
    },
    Command {
        name: "quit",
        usage: "/quit",
        help: "Leave the chat.",
        handler: super::handle_quit,
    },
];
