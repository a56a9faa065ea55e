use crate::domain::app::App;
use crate::domain::functions::{log_to_channel, reply_ephemeral};
use crate::domain::ticket::is_ticket_channel;
use crate::ports::inbound::client::SlashCommand;
use crate::ports::outbound::guild::Guild;
use std::time::Duration;

const NOT_A_TICKET: &str = "❌ This is not a ticket channel!";

fn closing_message(delay: Duration) -> String {
    format!("🗑 Closing this ticket in {} seconds...", delay.as_secs())
}

impl App {
    pub async fn close_ticket<I: SlashCommand, G: Guild>(&self, interaction: &I, guild: &G) {
        let Some(name) = interaction
            .channel_name()
            .await
            .filter(|name| is_ticket_channel(name))
        else {
            reply_ephemeral(interaction, NOT_A_TICKET.to_string()).await;
            return;
        };

        if let Err(why) = interaction
            .reply(closing_message(self.settings.close_delay))
            .await
        {
            log::error!("couldn't create interaction response: {why:?}");
            return;
        }

        tokio::time::sleep(self.settings.close_delay).await;

        let channel = interaction.channel_id();
        if let Err(why) = guild.delete_channel(channel).await {
            log::debug!("ignoring failed deletion of {name}: {why}");
            return;
        }

        let requester = interaction.requester();
        log::info!("{} closed {name}", requester.tag);
        log_to_channel(
            guild,
            self.settings.log_channel,
            format!("🔒 **Ticket Closed:** #{name} by {}", requester.tag),
        )
        .await;
    }
}
