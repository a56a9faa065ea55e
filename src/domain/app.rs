use crate::domain::category::StaffRoles;
use crate::domain::utils::claims::TicketClaims;
use std::time::Duration;

pub const DEFAULT_LOG_CHANNEL: u64 = 1_424_062_122_060_546_229;
pub const DEFAULT_TICKET_CATEGORY: u64 = 1_424_061_970_860_216_420;
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSettings {
    /// Channel ticket activity is reported to.
    pub log_channel: u64,
    /// Parent category new ticket channels are created under.
    pub ticket_category: u64,
    pub staff_roles: StaffRoles,
    /// Time between the close reply and the channel deletion.
    pub close_delay: Duration,
}

impl Default for TicketSettings {
    fn default() -> Self {
        Self {
            log_channel: DEFAULT_LOG_CHANNEL,
            ticket_category: DEFAULT_TICKET_CATEGORY,
            staff_roles: StaffRoles::default(),
            close_delay: DEFAULT_CLOSE_DELAY,
        }
    }
}

pub struct App {
    pub settings: TicketSettings,
    pub claims: TicketClaims,
}

impl App {
    pub fn new(settings: TicketSettings) -> Self {
        Self {
            settings,
            claims: TicketClaims::new(),
        }
    }
}
