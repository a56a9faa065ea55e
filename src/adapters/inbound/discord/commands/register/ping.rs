use crate::domain::command::TicketCommand;
use serenity::all::CreateCommand;

pub fn register() -> CreateCommand {
    let command = TicketCommand::Ping;
    CreateCommand::new(command.name()).description(command.description())
}
