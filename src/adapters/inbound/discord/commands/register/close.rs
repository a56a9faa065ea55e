use crate::domain::command::TicketCommand;
use serenity::all::CreateCommand;

pub fn register() -> CreateCommand {
    let command = TicketCommand::Close;
    CreateCommand::new(command.name())
        .description(command.description())
        .dm_permission(false)
}
