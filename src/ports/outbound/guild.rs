use crate::domain::panel::Panel;
use crate::domain::ticket::{TicketChannel, Welcome};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error in guild operation: {0}")]
pub struct GuildError(String);

impl GuildError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Channel operations on the guild the bot serves.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Guild {
    async fn find_channel(&self, name: &str) -> Result<Option<u64>, GuildError>;
    async fn create_ticket_channel(&self, ticket: &TicketChannel) -> Result<u64, GuildError>;
    async fn delete_channel(&self, channel: u64) -> Result<(), GuildError>;
    async fn send_message(&self, channel: u64, content: String) -> Result<(), GuildError>;
    async fn send_welcome(&self, channel: u64, welcome: &Welcome) -> Result<(), GuildError>;
    async fn send_panel(&self, channel: u64, panel: &Panel) -> Result<(), GuildError>;
}
