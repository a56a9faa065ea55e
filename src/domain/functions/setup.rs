use crate::domain::app::App;
use crate::domain::functions::reply_ephemeral;
use crate::domain::panel::Panel;
use crate::ports::inbound::client::SlashCommand;
use crate::ports::outbound::guild::Guild;

impl App {
    pub async fn setup_panel<I: SlashCommand, G: Guild>(
        &self,
        interaction: &I,
        guild: &G,
        options: SetupOptions,
    ) {
        let target = options
            .channel()
            .unwrap_or_else(|| interaction.channel_id());

        if let Err(why) = guild.send_panel(target, &Panel::default()).await {
            log::warn!("couldn't send ticket panel to {target}: {why}");
            reply_ephemeral(
                interaction,
                format!("❌ Could not send the ticket panel in <#{target}>."),
            )
            .await;
            return;
        }

        reply_ephemeral(interaction, format!("✅ Ticket panel sent in <#{target}>")).await;
    }
}

#[derive(Debug, Default)]
pub struct SetupOptions {
    channel: Option<u64>,
}

impl SetupOptions {
    pub fn new(channel: Option<u64>) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> Option<u64> {
        self.channel
    }
}
