//! Pricing page and WhatsApp order handoff for a Pterodactyl game-hosting reseller.
//!
//! The order workflow (catalog, validation, message composition, handoff)
//! lives in plain modules that only talk to the host through
//! [`ports::PresentationPort`] and [`ports::NavigationPort`]. The web page
//! (`routes`, `handlers`, `templates`) and the CLI are two such hosts.

pub mod catalog;
pub mod composer;
pub mod config;
pub mod error;
pub mod handoff;
pub mod notify;
pub mod ports;
pub mod quick;
pub mod validator;
pub mod workflow;

pub mod handlers;
pub mod models;
pub mod routes;
pub mod templates;
pub mod utils;

pub use error::{ConfigError, OrderError};
