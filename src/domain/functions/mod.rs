pub mod close;
pub mod open;
pub mod ping;
pub mod setup;

use crate::ports::inbound::client::TicketInteraction;
use crate::ports::outbound::guild::Guild;

async fn reply_ephemeral<I: TicketInteraction>(interaction: &I, message: String) {
    if let Err(why) = interaction.reply_ephemeral(message).await {
        log::error!("couldn't create interaction response: {why:?}");
    }
}

async fn log_to_channel<G: Guild>(guild: &G, channel: u64, message: String) {
    if let Err(why) = guild.send_message(channel, message).await {
        log::warn!("couldn't post to log channel {channel}: {why}");
    }
}
