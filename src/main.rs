use crate::adapters::inbound::create_client;
use crate::config::Config;
use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use dotenv::dotenv;

mod adapters;
mod config;
mod domain;
mod ports;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(why) => {
            log::error!("Invalid configuration - {why}");
            return;
        }
    };

    let app = App::new(config.tickets.clone());
    let mut client = match create_client(app, &config).await {
        Ok(client) => client,
        Err(why) => {
            log::error!("Error creating client - {why:?}");
            return;
        }
    };

    client.run().await;
}
