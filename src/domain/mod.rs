pub mod app;
pub mod category;
pub mod command;
pub mod functions;
pub mod panel;
pub mod ticket;
pub mod utils;
