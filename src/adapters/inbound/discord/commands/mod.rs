pub mod interaction;
pub mod options;
pub mod register;
