use crate::adapters::inbound::discord::utils::requester;
use crate::domain::ticket::Requester;
use crate::ports::inbound::client::{InteractionError, TicketInteraction};
use async_trait::async_trait;
use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

pub struct DiscordComponent {
    ctx: Context,
    component: ComponentInteraction,
}

impl DiscordComponent {
    pub fn new(ctx: Context, component: ComponentInteraction) -> Self {
        Self { ctx, component }
    }
}

#[async_trait]
impl TicketInteraction for DiscordComponent {
    fn requester(&self) -> Requester {
        requester(&self.component.user)
    }

    async fn reply_ephemeral(&self, message: String) -> Result<(), InteractionError> {
        let message = CreateInteractionResponseMessage::new()
            .content(message)
            .ephemeral(true);

        self.component
            .create_response(&self.ctx, CreateInteractionResponse::Message(message))
            .await
            .map_err(|e| InteractionError::new(e.to_string()))
    }
}
