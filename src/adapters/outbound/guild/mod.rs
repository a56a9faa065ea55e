mod message;

use crate::adapters::outbound::guild::message::{panel_embed, panel_menu, welcome_embed};
use crate::domain::panel::Panel;
use crate::domain::ticket::{Access, Overwrite, OverwriteTarget, TicketChannel, Welcome};
use crate::ports::outbound::guild::{Guild, GuildError};
use async_trait::async_trait;
use serenity::all::{
    ChannelId, ChannelType, Context, CreateChannel, CreateMessage, GuildId, PermissionOverwrite,
    PermissionOverwriteType, Permissions, RoleId, UserId,
};

pub struct DiscordGuild {
    ctx: Context,
    guild_id: GuildId,
}

impl DiscordGuild {
    pub fn new(ctx: Context, guild_id: GuildId) -> Self {
        Self { ctx, guild_id }
    }

    async fn send(&self, channel: u64, message: CreateMessage) -> Result<(), GuildError> {
        ChannelId::new(channel)
            .send_message(&self.ctx.http, message)
            .await
            .map(|_| ())
            .map_err(|why| GuildError::new(why.to_string()))
    }
}

fn permissions(access: Access) -> Permissions {
    let mut permissions = Permissions::empty();
    if access.view {
        permissions |= Permissions::VIEW_CHANNEL;
    }
    if access.send {
        permissions |= Permissions::SEND_MESSAGES;
    }
    permissions
}

/// Channels of every kind are matched, not only text channels.
fn channel_named<'a>(
    channels: impl IntoIterator<Item = (u64, &'a str)>,
    name: &str,
) -> Option<u64> {
    channels
        .into_iter()
        .find(|(_, channel)| *channel == name)
        .map(|(id, _)| id)
}

fn permission_overwrite(overwrite: Overwrite) -> PermissionOverwrite {
    let kind = match overwrite.target {
        OverwriteTarget::Role(id) => PermissionOverwriteType::Role(RoleId::new(id)),
        OverwriteTarget::Member(id) => PermissionOverwriteType::Member(UserId::new(id)),
    };

    PermissionOverwrite {
        allow: permissions(overwrite.allow),
        deny: permissions(overwrite.deny),
        kind,
    }
}

#[async_trait]
impl Guild for DiscordGuild {
    async fn find_channel(&self, name: &str) -> Result<Option<u64>, GuildError> {
        let channels = self
            .guild_id
            .channels(&self.ctx.http)
            .await
            .map_err(|why| GuildError::new(why.to_string()))?;

        Ok(channel_named(
            channels
                .values()
                .map(|channel| (channel.id.get(), channel.name.as_str())),
            name,
        ))
    }

    async fn create_ticket_channel(&self, ticket: &TicketChannel) -> Result<u64, GuildError> {
        let overwrites = ticket
            .overwrites(self.guild_id.get())
            .into_iter()
            .map(permission_overwrite)
            .collect::<Vec<_>>();

        let builder = CreateChannel::new(&ticket.name)
            .kind(ChannelType::Text)
            .category(ChannelId::new(ticket.parent))
            .permissions(overwrites);

        let channel = self
            .guild_id
            .create_channel(&self.ctx.http, builder)
            .await
            .map_err(|why| GuildError::new(why.to_string()))?;

        log::info!("Created ticket channel #{} ({})", channel.name, channel.id);
        Ok(channel.id.get())
    }

    async fn delete_channel(&self, channel: u64) -> Result<(), GuildError> {
        ChannelId::new(channel)
            .delete(&self.ctx.http)
            .await
            .map(|_| ())
            .map_err(|why| GuildError::new(why.to_string()))
    }

    async fn send_message(&self, channel: u64, content: String) -> Result<(), GuildError> {
        self.send(channel, CreateMessage::new().content(content))
            .await
    }

    async fn send_welcome(&self, channel: u64, welcome: &Welcome) -> Result<(), GuildError> {
        let message = CreateMessage::new()
            .content(&welcome.content)
            .embed(welcome_embed(welcome));
        self.send(channel, message).await
    }

    async fn send_panel(&self, channel: u64, panel: &Panel) -> Result<(), GuildError> {
        let message = CreateMessage::new()
            .embed(panel_embed(panel))
            .components(vec![panel_menu(panel)]);
        self.send(channel, message).await
    }
}
