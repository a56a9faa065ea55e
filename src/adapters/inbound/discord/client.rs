use crate::adapters::inbound::discord::Handler;
use crate::config::Config;
use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use async_trait::async_trait;
use serenity::all::{ApplicationId, GatewayIntents, GuildId, ShardManager};
use serenity::prelude::TypeMapKey;
use serenity::Client as DiscordClient;
use std::sync::Arc;

/// Gives event handlers access to shard heartbeat latencies.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

pub struct Discord(DiscordClient);

impl Discord {
    pub async fn new(app: App, config: &Config) -> Result<Self, serenity::Error> {
        let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;
        let handler = Handler::new(
            app,
            config.guild_id.map(GuildId::new),
            config.presence.clone(),
        );

        let client = DiscordClient::builder(&config.token, intents)
            .application_id(ApplicationId::new(config.application_id))
            .event_handler(handler)
            .await?;

        client
            .data
            .write()
            .await
            .insert::<ShardManagerContainer>(Arc::clone(&client.shard_manager));

        Ok(Self(client))
    }
}

#[async_trait]
impl Client for Discord {
    async fn run(&mut self) {
        if let Err(why) = self.0.start().await {
            log::error!("Error starting client - {why:?}");
        }
    }
}
