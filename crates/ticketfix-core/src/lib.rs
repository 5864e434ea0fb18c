pub mod config;
pub mod error;
pub mod io;
pub mod paths;
pub mod pipeline;
pub mod placeholder;
pub mod rules;
pub mod ticket;
pub mod types;
pub mod vague;

pub use error::{Result, TicketError};
