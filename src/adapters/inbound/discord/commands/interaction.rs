use crate::adapters::inbound::discord::utils::{channel_name, requester, shard_latency};
use crate::domain::ticket::Requester;
use crate::domain::utils::snowflake_timestamp_ms;
use crate::ports::inbound::client::{InteractionError, SlashCommand, TicketInteraction};
use async_trait::async_trait;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse,
};
use std::time::Duration;
use tokio::time::Instant;

pub struct DiscordCommand {
    ctx: Context,
    command: CommandInteraction,
}

impl DiscordCommand {
    pub fn new(ctx: Context, command: CommandInteraction) -> Self {
        Self { ctx, command }
    }

    async fn send_message(
        &self,
        message: CreateInteractionResponseMessage,
    ) -> Result<(), InteractionError> {
        let start = Instant::now();
        if let Err(why) = self
            .command
            .create_response(&self.ctx, CreateInteractionResponse::Message(message))
            .await
        {
            Err(InteractionError::new(why.to_string()))
        } else {
            log::info!(
                "Discord RTT took {}ms to answer /{} in {}",
                start.elapsed().as_millis(),
                self.command.data.name,
                self.command.channel_id,
            );
            Ok(())
        }
    }
}

#[async_trait]
impl TicketInteraction for DiscordCommand {
    fn requester(&self) -> Requester {
        requester(&self.command.user)
    }

    async fn reply_ephemeral(&self, message: String) -> Result<(), InteractionError> {
        let message = CreateInteractionResponseMessage::new()
            .content(message)
            .ephemeral(true);
        self.send_message(message).await
    }
}

#[async_trait]
impl SlashCommand for DiscordCommand {
    fn channel_id(&self) -> u64 {
        self.command.channel_id.get()
    }

    fn created_at_ms(&self) -> i64 {
        snowflake_timestamp_ms(self.command.id.get())
    }

    async fn channel_name(&self) -> Option<String> {
        let partial = self
            .command
            .channel
            .as_ref()
            .and_then(|channel| channel.name.clone());

        match partial {
            Some(name) => Some(name),
            None => channel_name(&self.ctx, self.command.channel_id).await,
        }
    }

    async fn gateway_latency(&self) -> Option<Duration> {
        shard_latency(&self.ctx).await
    }

    async fn reply(&self, message: String) -> Result<(), InteractionError> {
        let message = CreateInteractionResponseMessage::new().content(message);
        self.send_message(message).await
    }

    async fn reply_and_fetch_timestamp(&self, message: String) -> Result<i64, InteractionError> {
        self.reply(message).await?;

        let response = self
            .command
            .get_response(&self.ctx.http)
            .await
            .map_err(|why| InteractionError::new(why.to_string()))?;

        Ok(snowflake_timestamp_ms(response.id.get()))
    }

    async fn edit_reply(&self, message: String) -> Result<(), InteractionError> {
        self.command
            .edit_response(&self.ctx, EditInteractionResponse::new().content(message))
            .await
            .map(|_| ())
            .map_err(|why| InteractionError::new(why.to_string()))
    }
}
