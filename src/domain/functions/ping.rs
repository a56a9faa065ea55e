use crate::ports::inbound::client::SlashCommand;
use std::time::Duration;

fn pong_message(latency_ms: i64, gateway: Option<Duration>) -> String {
    // -1 until the shard has a heartbeat acknowledged
    let api = gateway.map_or(-1, |latency| {
        i64::try_from(latency.as_millis()).unwrap_or(i64::MAX)
    });
    format!("🏓 Pong! Latency: {latency_ms}ms | API: {api}ms")
}

pub async fn run<I: SlashCommand>(interaction: &I) {
    let sent = match interaction
        .reply_and_fetch_timestamp(String::from("Pinging..."))
        .await
    {
        Ok(sent) => sent,
        Err(why) => {
            log::error!("couldn't create interaction response: {why:?}");
            return;
        }
    };

    let latency = sent - interaction.created_at_ms();
    let gateway = interaction.gateway_latency().await;

    if let Err(why) = interaction
        .edit_reply(pong_message(latency, gateway))
        .await
    {
        log::error!("couldn't edit interaction response: {why:?}");
    }
}
