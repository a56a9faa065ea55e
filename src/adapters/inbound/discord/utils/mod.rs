pub mod parse;

use crate::adapters::inbound::discord::client::ShardManagerContainer;
use crate::config::{ActivityKind, Presence};
use crate::domain::ticket::Requester;
use serenity::all::{ActivityData, ChannelId, Context, User};
use std::sync::Arc;
use std::time::Duration;

pub fn requester(user: &User) -> Requester {
    Requester::new(user.id.get(), user.name.clone(), user.tag())
}

pub async fn channel_name(ctx: &Context, channel_id: ChannelId) -> Option<String> {
    match channel_id.to_channel(ctx).await {
        Ok(channel) => channel.guild().map(|channel| channel.name),
        Err(why) => {
            log::warn!("couldn't fetch channel {channel_id}: {why:?}");
            None
        }
    }
}

pub async fn shard_latency(ctx: &Context) -> Option<Duration> {
    let manager = Arc::clone(ctx.data.read().await.get::<ShardManagerContainer>()?);
    let runners = manager.runners.lock().await;
    runners.get(&ctx.shard_id)?.latency
}

pub fn activity(presence: &Presence) -> ActivityData {
    let text = presence.text.as_str();
    match presence.kind {
        ActivityKind::Playing => ActivityData::playing(text),
        ActivityKind::Watching => ActivityData::watching(text),
        ActivityKind::Listening => ActivityData::listening(text),
        ActivityKind::Competing => ActivityData::competing(text),
    }
}
