//! Slash-command parsing and dispatch.
//!
//! Commands are resolved locally first: unknown profile or character ids are
//! rejected here with a notice and never reach the network. Operations that
//! need the transport come back to the chat loop as [`CommandResult`]
//! variants so the loop can await them.

mod registry;

pub use registry::{all_commands, CommandInvocation};

use crate::core::controller::SessionController;
use crate::core::messages;
use crate::core::profile::{Character, Profile};

pub enum CommandResult {
    Continue,
    ProcessAsMessage(String),
    SwitchProfile(Profile),
    SwitchCharacter(Character),
    ForceSync,
    RequestClear,
    Quit,
}

pub fn process_input(controller: &mut SessionController, input: &str) -> CommandResult {
    let trimmed = input.trim();

    if !trimmed.starts_with('/') {
        return CommandResult::ProcessAsMessage(input.to_string());
    }

    let mut parts = trimmed[1..].splitn(2, ' ');
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(input.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    if let Some(command) = registry::find_command(command_name) {
        let invocation = CommandInvocation {
            input: trimmed,
            args,
        };
        (command.handler)(controller, invocation)
    } else {
        CommandResult::ProcessAsMessage(input.to_string())
    }
}

pub(super) fn handle_help(
    controller: &mut SessionController,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let mut help = String::from("Available commands:");
    for command in all_commands() {
        help.push_str(&format!("\n  {:<16} {}", command.usage, command.help));
    }
    controller.notice(&help);
    CommandResult::Continue
}

pub(super) fn handle_profile(
    controller: &mut SessionController,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    if invocation.args.is_empty() {
        let ids: Vec<&str> = Profile::ALL.iter().map(|p| p.id()).collect();
        controller.notice(&format!(
            "Active profile: {}. Available: {}",
            controller.session().active_profile.id(),
            ids.join(", ")
        ));
        return CommandResult::Continue;
    }
    match Profile::parse(invocation.args) {
        Ok(profile) => CommandResult::SwitchProfile(profile),
        Err(e) => {
            controller.notice(&e);
            CommandResult::Continue
        }
    }
}

pub(super) fn handle_character(
    controller: &mut SessionController,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    if invocation.args.is_empty() {
        let ids: Vec<&str> = Character::ALL.iter().map(|c| c.id()).collect();
        controller.notice(&format!(
            "Active character: {}. Available: {}",
            controller.session().active_character.id(),
            ids.join(", ")
        ));
        return CommandResult::Continue;
    }
    match Character::parse(invocation.args) {
        Ok(character) => CommandResult::SwitchCharacter(character),
        Err(e) => {
            controller.notice(&e);
            CommandResult::Continue
        }
    }
}

pub(super) fn handle_status(
    controller: &mut SessionController,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let session = controller.session();
    let status = format!(
        "Profile: {} ({})\nCharacter: {} ({})",
        session.active_profile.display_name(),
        session.active_profile.id(),
        session.active_character.display_name(),
        session.active_character.id()
    );
    controller.notice(&status);
    CommandResult::Continue
}

pub(super) fn handle_sync(
    _controller: &mut SessionController,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    CommandResult::ForceSync
}

pub(super) fn handle_voice(
    controller: &mut SessionController,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    controller.notice(messages::VOICE_UNAVAILABLE);
    CommandResult::Continue
}

pub(super) fn handle_clear(
    _controller: &mut SessionController,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    CommandResult::RequestClear
}

pub(super) fn handle_quit(
    _controller: &mut SessionController,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    CommandResult::Quit
}
