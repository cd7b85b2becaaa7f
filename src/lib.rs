//! Campaign Mailer — CSV upload to personalized transactional email.

pub mod campaign;
pub mod config;
pub mod contacts;
pub mod delivery;
pub mod error;
pub mod server;
