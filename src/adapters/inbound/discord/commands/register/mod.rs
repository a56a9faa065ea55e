pub mod close;
pub mod ping;
pub mod setup_tickets;
