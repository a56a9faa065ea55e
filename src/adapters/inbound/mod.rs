pub mod discord;

use crate::adapters::inbound::discord::client::Discord;
use crate::config::Config;
use crate::domain::app::App;
use crate::ports::inbound::client::Client;

pub async fn create_client(app: App, config: &Config) -> Result<impl Client, serenity::Error> {
    Discord::new(app, config).await
}
