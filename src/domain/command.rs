use std::str::FromStr;
use thiserror::Error;

/// Slash commands the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketCommand {
    SetupTickets,
    Ping,
    Close,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown command '{0}'")]
pub struct UnknownCommand(String);

impl TicketCommand {
    pub const ALL: [TicketCommand; 3] = [
        TicketCommand::SetupTickets,
        TicketCommand::Ping,
        TicketCommand::Close,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TicketCommand::SetupTickets => "setup-tickets",
            TicketCommand::Ping => "ping",
            TicketCommand::Close => "close",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            TicketCommand::SetupTickets => "Creates a ticket panel.",
            TicketCommand::Ping => "Replies with bot latency.",
            TicketCommand::Close => "Closes the current ticket.",
        }
    }
}

impl FromStr for TicketCommand {
    type Err = UnknownCommand;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        TicketCommand::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or_else(|| UnknownCommand(name.to_string()))
    }
}
