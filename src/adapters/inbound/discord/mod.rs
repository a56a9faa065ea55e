pub mod client;
mod commands;
mod components;
mod utils;

use crate::adapters::inbound::discord::commands::interaction::DiscordCommand;
use crate::adapters::inbound::discord::commands::register::{close, ping, setup_tickets};
use crate::adapters::inbound::discord::components::interaction::DiscordComponent;
use crate::adapters::outbound::guild::DiscordGuild;
use crate::config::Presence;
use crate::domain::app::App;
use crate::domain::command::TicketCommand;
use crate::domain::functions;
use crate::domain::functions::setup::SetupOptions;
use crate::domain::panel::TICKET_MENU_ID;
use async_trait::async_trait;
use serenity::all::{
    Command, CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    EventHandler, GuildId, Interaction, OnlineStatus, Ready,
};
use utils::parse;

pub struct Handler {
    app: App,
    command_guild: Option<GuildId>,
    presence: Presence,
}

impl Handler {
    pub fn new(app: App, command_guild: Option<GuildId>, presence: Presence) -> Self {
        Self {
            app,
            command_guild,
            presence,
        }
    }

    async fn command(&self, ctx: Context, command: CommandInteraction) {
        if command.user.bot {
            return;
        }

        log::info!(
            "Received command: {:?} from {}",
            command.data.name,
            command.channel_id,
        );

        let kind = match command.data.name.parse::<TicketCommand>() {
            Ok(kind) => kind,
            Err(err) => {
                log::warn!("{err}");
                return;
            }
        };

        match kind {
            TicketCommand::Ping => {
                let interaction = DiscordCommand::new(ctx, command);
                functions::ping::run(&interaction).await;
            }
            TicketCommand::SetupTickets => {
                let options = match parse::options::<SetupOptions>(command.data.options()) {
                    Ok(options) => options,
                    Err(err) => {
                        log::warn!("{err}");
                        return;
                    }
                };
                let Some(guild) = discord_guild(&ctx, command.guild_id) else {
                    return;
                };
                let interaction = DiscordCommand::new(ctx, command);
                self.app.setup_panel(&interaction, &guild, options).await;
            }
            TicketCommand::Close => {
                let Some(guild) = discord_guild(&ctx, command.guild_id) else {
                    return;
                };
                let interaction = DiscordCommand::new(ctx, command);
                self.app.close_ticket(&interaction, &guild).await;
            }
        }
    }

    async fn component(&self, ctx: Context, component: ComponentInteraction) {
        if component.user.bot || component.data.custom_id != TICKET_MENU_ID {
            return;
        }

        let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind else {
            return;
        };
        let Some(selected) = values.first().cloned() else {
            return;
        };

        log::info!(
            "Received ticket selection: {selected} from {}",
            component.user.tag(),
        );

        let Some(guild) = discord_guild(&ctx, component.guild_id) else {
            return;
        };
        let interaction = DiscordComponent::new(ctx, component);
        self.app.open_ticket(&interaction, &guild, &selected).await;
    }
}

fn discord_guild(ctx: &Context, guild_id: Option<GuildId>) -> Option<DiscordGuild> {
    if guild_id.is_none() {
        log::warn!("Ignoring ticket interaction outside of a guild");
    }
    guild_id.map(|guild_id| DiscordGuild::new(ctx.clone(), guild_id))
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        log::info!("Logged in as {}", ready.user.tag());
        ctx.set_presence(Some(utils::activity(&self.presence)), OnlineStatus::Online);

        let commands = vec![
            setup_tickets::register(),
            ping::register(),
            close::register(),
        ];
        let registered = match self.command_guild {
            Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
            None => Command::set_global_commands(&ctx.http, commands).await,
        };

        match registered {
            Ok(commands) => log::info!("Registered {} commands", commands.len()),
            Err(err) => log::error!("Could not register commands {err:?}"),
        }

        log::info!("Bot ready!");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => self.command(ctx, command).await,
            Interaction::Component(component) => self.component(ctx, component).await,
            _ => (),
        }
    }
}
