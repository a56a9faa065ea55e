use crate::domain::command::TicketCommand;
use serenity::all::{ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

pub fn register() -> CreateCommand {
    let command = TicketCommand::SetupTickets;
    CreateCommand::new(command.name())
        .description(command.description())
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel to post the ticket panel in",
            )
            .channel_types(vec![ChannelType::Text])
            .required(false),
        )
}
