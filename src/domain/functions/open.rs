use crate::domain::app::App;
use crate::domain::category::TicketCategory;
use crate::domain::functions::{log_to_channel, reply_ephemeral};
use crate::domain::ticket::{TicketChannel, Welcome};
use crate::ports::inbound::client::TicketInteraction;
use crate::ports::outbound::guild::Guild;

const UNKNOWN_CATEGORY: &str = "❌ Unknown ticket category.";
const IN_PROGRESS: &str = "⏳ Your ticket is already being created.";
const CREATE_FAILED: &str = "❌ Could not create your ticket, please try again later.";

impl App {
    pub async fn open_ticket<I: TicketInteraction, G: Guild>(
        &self,
        interaction: &I,
        guild: &G,
        selected: &str,
    ) {
        let category = match selected.parse::<TicketCategory>() {
            Ok(category) => category,
            Err(why) => {
                log::warn!("{why}");
                reply_ephemeral(interaction, UNKNOWN_CATEGORY.to_string()).await;
                return;
            }
        };

        let requester = interaction.requester();
        let Some(_claim) = self.claims.try_claim(requester.id) else {
            log::info!("{} is already opening a ticket", requester.tag);
            reply_ephemeral(interaction, IN_PROGRESS.to_string()).await;
            return;
        };

        let staff_role = self.settings.staff_roles.role_for(category);
        let ticket = TicketChannel::new(&requester, self.settings.ticket_category, staff_role);

        match guild.find_channel(&ticket.name).await {
            Ok(Some(existing)) => {
                reply_ephemeral(
                    interaction,
                    format!("❌ You already have an open ticket: <#{existing}>"),
                )
                .await;
                return;
            }
            Ok(None) => (),
            Err(why) => {
                log::warn!("couldn't look up {}: {why}", ticket.name);
                reply_ephemeral(interaction, CREATE_FAILED.to_string()).await;
                return;
            }
        }

        let channel = match guild.create_ticket_channel(&ticket).await {
            Ok(channel) => channel,
            Err(why) => {
                log::warn!("couldn't create {}: {why}", ticket.name);
                reply_ephemeral(interaction, CREATE_FAILED.to_string()).await;
                return;
            }
        };
        log::info!("Created {} ({category}) for {}", ticket.name, requester.tag);

        if let Err(why) = guild
            .send_welcome(channel, &Welcome::new(requester.id, staff_role))
            .await
        {
            log::warn!("couldn't send welcome message to {channel}: {why}");
        }

        reply_ephemeral(interaction, format!("✅ Ticket created: <#{channel}>")).await;

        log_to_channel(
            guild,
            self.settings.log_channel,
            format!(
                "🆕 **Ticket Created:** <#{channel}> by {} ({category})",
                requester.tag
            ),
        )
        .await;
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::app::{App, TicketSettings};
    use crate::domain::category::StaffRoles;
    use crate::domain::ticket::{Access, OverwriteTarget, Requester, TicketChannel, Welcome};
    use crate::ports::inbound::client::MockTicketInteraction;
    use crate::ports::outbound::guild::{GuildError, MockGuild};
    use mockall::predicate::*;
    use std::time::Duration;

    const GUILD: u64 = 100;
    const LOG_CHANNEL: u64 = 200;
    const TICKET_CATEGORY: u64 = 300;
    const TECHNICAL_ROLE: u64 = 402;
    const NEW_CHANNEL: u64 = 900;

    fn create_test_app() -> App {
        App::new(TicketSettings {
            log_channel: LOG_CHANNEL,
            ticket_category: TICKET_CATEGORY,
            staff_roles: StaffRoles {
                billing: 401,
                technical: TECHNICAL_ROLE,
                general: 403,
            },
            close_delay: Duration::ZERO,
        })
    }

    fn create_test_interaction() -> MockTicketInteraction {
        let mut interaction = MockTicketInteraction::new();
        interaction
            .expect_requester()
            .return_const(Requester::new(42, "Alice", "Alice#0001"));
        interaction
    }

    #[tokio::test]
    async fn test_open_creates_ticket_channel() {
        let mut guild = MockGuild::new();
        guild
            .expect_find_channel()
            .times(1)
            .with(eq("ticket-alice"))
            .returning(|_| Ok(None));
        guild
            .expect_create_ticket_channel()
            .times(1)
            .withf(|ticket: &TicketChannel| {
                ticket.name == "ticket-alice"
                    && ticket.parent == TICKET_CATEGORY
                    && ticket.requester == 42
                    && ticket.staff_role == TECHNICAL_ROLE
            })
            .returning(|_| Ok(NEW_CHANNEL));
        guild
            .expect_send_welcome()
            .times(1)
            .withf(|channel: &u64, welcome: &Welcome| {
                *channel == NEW_CHANNEL && welcome.content == "<@42> <@&402>"
            })
            .returning(|_, _| Ok(()));
        guild
            .expect_send_message()
            .times(1)
            .with(
                eq(LOG_CHANNEL),
                eq(String::from(
                    "🆕 **Ticket Created:** <#900> by Alice#0001 (technical)",
                )),
            )
            .returning(|_, _| Ok(()));

        let mut interaction = create_test_interaction();
        interaction
            .expect_reply_ephemeral()
            .times(1)
            .with(eq(String::from("✅ Ticket created: <#900>")))
            .returning(|_| Ok(()));

        let app = create_test_app();
        app.open_ticket(&interaction, &guild, "technical").await;

        assert!(!app.claims.is_claimed(42));
    }

    #[tokio::test]
    async fn test_open_uses_three_overwrites() {
        let mut guild = MockGuild::new();
        guild.expect_find_channel().returning(|_| Ok(None));
        guild
            .expect_create_ticket_channel()
            .times(1)
            .withf(|ticket: &TicketChannel| {
                let overwrites = ticket.overwrites(GUILD);
                overwrites.len() == 3
                    && overwrites[0].target == OverwriteTarget::Role(GUILD)
                    && overwrites[0].deny == Access::VIEW
                    && overwrites[1].target == OverwriteTarget::Member(42)
                    && overwrites[1].allow == Access::VIEW_AND_SEND
                    && overwrites[2].target == OverwriteTarget::Role(401)
                    && overwrites[2].allow == Access::VIEW_AND_SEND
            })
            .returning(|_| Ok(NEW_CHANNEL));
        guild.expect_send_welcome().returning(|_, _| Ok(()));
        guild.expect_send_message().returning(|_, _| Ok(()));

        let mut interaction = create_test_interaction();
        interaction.expect_reply_ephemeral().returning(|_| Ok(()));

        let app = create_test_app();
        app.open_ticket(&interaction, &guild, "billing").await;
    }

    #[tokio::test]
    async fn test_open_existing_ticket() {
        let mut guild = MockGuild::new();
        guild
            .expect_find_channel()
            .times(1)
            .with(eq("ticket-alice"))
            .returning(|_| Ok(Some(777)));
        // Should not create anything

        let mut interaction = create_test_interaction();
        interaction
            .expect_reply_ephemeral()
            .times(1)
            .with(eq(String::from(
                "❌ You already have an open ticket: <#777>",
            )))
            .returning(|_| Ok(()));

        let app = create_test_app();
        app.open_ticket(&interaction, &guild, "general").await;

        assert!(!app.claims.is_claimed(42));
    }

    #[tokio::test]
    async fn test_open_while_claim_held() {
        let guild = MockGuild::new();

        let mut interaction = create_test_interaction();
        interaction
            .expect_reply_ephemeral()
            .times(1)
            .with(eq(String::from("⏳ Your ticket is already being created.")))
            .returning(|_| Ok(()));

        let app = create_test_app();
        let held = app.claims.try_claim(42).unwrap();
        app.open_ticket(&interaction, &guild, "general").await;

        assert!(app.claims.is_claimed(42));
        drop(held);
        assert!(!app.claims.is_claimed(42));
    }

    #[tokio::test]
    async fn test_open_unknown_category() {
        let guild = MockGuild::new();

        let mut interaction = MockTicketInteraction::new();
        interaction
            .expect_reply_ephemeral()
            .times(1)
            .with(eq(String::from("❌ Unknown ticket category.")))
            .returning(|_| Ok(()));

        let app = create_test_app();
        app.open_ticket(&interaction, &guild, "refunds").await;
    }

    #[tokio::test]
    async fn test_open_create_failure_releases_claim() {
        let mut guild = MockGuild::new();
        guild.expect_find_channel().returning(|_| Ok(None));
        guild
            .expect_create_ticket_channel()
            .times(1)
            .returning(|_| Err(GuildError::new(String::from("Missing Permissions"))));

        let mut interaction = create_test_interaction();
        interaction
            .expect_reply_ephemeral()
            .times(1)
            .with(eq(String::from(
                "❌ Could not create your ticket, please try again later.",
            )))
            .returning(|_| Ok(()));

        let app = create_test_app();
        app.open_ticket(&interaction, &guild, "technical").await;

        assert!(!app.claims.is_claimed(42));
    }

    #[tokio::test]
    async fn test_open_lookup_failure() {
        let mut guild = MockGuild::new();
        guild
            .expect_find_channel()
            .times(1)
            .returning(|_| Err(GuildError::new(String::from("timeout"))));

        let mut interaction = create_test_interaction();
        interaction
            .expect_reply_ephemeral()
            .times(1)
            .with(eq(String::from(
                "❌ Could not create your ticket, please try again later.",
            )))
            .returning(|_| Ok(()));

        let app = create_test_app();
        app.open_ticket(&interaction, &guild, "technical").await;
    }

    #[tokio::test]
    async fn test_open_survives_welcome_and_log_failure() {
        let mut guild = MockGuild::new();
        guild.expect_find_channel().returning(|_| Ok(None));
        guild
            .expect_create_ticket_channel()
            .returning(|_| Ok(NEW_CHANNEL));
        guild
            .expect_send_welcome()
            .times(1)
            .returning(|_, _| Err(GuildError::new(String::from("Unknown Channel"))));
        guild
            .expect_send_message()
            .times(1)
            .returning(|_, _| Err(GuildError::new(String::from("Unknown Channel"))));

        let mut interaction = create_test_interaction();
        interaction
            .expect_reply_ephemeral()
            .times(1)
            .with(eq(String::from("✅ Ticket created: <#900>")))
            .returning(|_| Ok(()));

        let app = create_test_app();
        app.open_ticket(&interaction, &guild, "technical").await;
    }
}
