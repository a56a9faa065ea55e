use crate::domain::ticket::Requester;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
use mockall::{automock, mock};

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("An error occurred while responding to an interaction: {0}")]
pub struct InteractionError(String);

impl InteractionError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Any interaction a member triggers that can be answered privately.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TicketInteraction {
    fn requester(&self) -> Requester;
    async fn reply_ephemeral(&self, message: String) -> Result<(), InteractionError>;
}

/// A slash command invocation, answered in the channel it was used in.
#[async_trait]
pub trait SlashCommand: TicketInteraction {
    fn channel_id(&self) -> u64;
    /// Creation time of the interaction, in milliseconds since the Unix epoch.
    fn created_at_ms(&self) -> i64;
    async fn channel_name(&self) -> Option<String>;
    /// Last heartbeat round trip of the shard that delivered the interaction.
    async fn gateway_latency(&self) -> Option<Duration>;
    async fn reply(&self, message: String) -> Result<(), InteractionError>;
    /// Replies and returns the creation time of the reply, in milliseconds since the Unix epoch.
    async fn reply_and_fetch_timestamp(&self, message: String) -> Result<i64, InteractionError>;
    async fn edit_reply(&self, message: String) -> Result<(), InteractionError>;
}

#[cfg(test)]
mock! {
    pub Command {}

    #[async_trait]
    impl TicketInteraction for Command {
        fn requester(&self) -> Requester;
        async fn reply_ephemeral(&self, message: String) -> Result<(), InteractionError>;
    }

    #[async_trait]
    impl SlashCommand for Command {
        fn channel_id(&self) -> u64;
        fn created_at_ms(&self) -> i64;
        async fn channel_name(&self) -> Option<String>;
        async fn gateway_latency(&self) -> Option<Duration>;
        async fn reply(&self, message: String) -> Result<(), InteractionError>;
        async fn reply_and_fetch_timestamp(&self, message: String) -> Result<i64, InteractionError>;
        async fn edit_reply(&self, message: String) -> Result<(), InteractionError>;
    }
}

#[async_trait]
pub trait Client {
    async fn run(&mut self);
}
