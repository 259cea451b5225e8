//! Boss-guessing chat bot.
//!
//! The binary is the composition root: it loads configuration, builds the
//! runtime through [`client_bootstrap::BotBuilder`], starts the liveness
//! endpoint and pumps the console transport through the dispatcher.
pub mod liveness;

pub use liveness::{LIVENESS_TEXT, router, serve_liveness};
