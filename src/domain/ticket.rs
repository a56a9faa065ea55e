use crate::domain::utils::normalise_channel_name;

pub const TICKET_PREFIX: &str = "ticket-";

/// The user an interaction came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub id: u64,
    pub name: String,
    pub tag: String,
}

impl Requester {
    pub fn new(id: u64, name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tag: tag.into(),
        }
    }
}

#[must_use]
pub fn ticket_channel_name(username: &str) -> String {
    format!("{TICKET_PREFIX}{}", normalise_channel_name(username))
}

#[must_use]
pub fn is_ticket_channel(name: &str) -> bool {
    name.starts_with(TICKET_PREFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub view: bool,
    pub send: bool,
}

impl Access {
    pub const NONE: Access = Access {
        view: false,
        send: false,
    };
    pub const VIEW: Access = Access {
        view: true,
        send: false,
    };
    pub const VIEW_AND_SEND: Access = Access {
        view: true,
        send: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteTarget {
    Role(u64),
    Member(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overwrite {
    pub target: OverwriteTarget,
    pub allow: Access,
    pub deny: Access,
}

/// A private text channel to be created for one requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketChannel {
    pub name: String,
    pub parent: u64,
    pub requester: u64,
    pub staff_role: u64,
}

impl TicketChannel {
    pub fn new(requester: &Requester, parent: u64, staff_role: u64) -> Self {
        Self {
            name: ticket_channel_name(&requester.name),
            parent,
            requester: requester.id,
            staff_role,
        }
    }

    /// `everyone` is the id of the guild's @everyone role, which equals the guild id.
    #[must_use]
    pub fn overwrites(&self, everyone: u64) -> [Overwrite; 3] {
        [
            Overwrite {
                target: OverwriteTarget::Role(everyone),
                allow: Access::NONE,
                deny: Access::VIEW,
            },
            Overwrite {
                target: OverwriteTarget::Member(self.requester),
                allow: Access::VIEW_AND_SEND,
                deny: Access::NONE,
            },
            Overwrite {
                target: OverwriteTarget::Role(self.staff_role),
                allow: Access::VIEW_AND_SEND,
                deny: Access::NONE,
            },
        ]
    }
}

/// First message posted in a new ticket channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    pub content: String,
    pub title: String,
    pub description: String,
}

impl Welcome {
    pub fn new(requester: u64, staff_role: u64) -> Self {
        Self {
            content: format!("<@{requester}> <@&{staff_role}>"),
            title: String::from("🎫 New Ticket"),
            description: format!(
                "Hi <@{requester}>, please describe your issue below. \
                Our <@&{staff_role}> team will assist you soon!"
            ),
        }
    }
}
