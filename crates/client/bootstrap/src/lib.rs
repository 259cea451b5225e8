//! Shared bootstrap utilities for the bot binary.
//!
//! Provides configuration loading, dataset loading and runtime setup so the
//! binary stays a thin composition root.
pub mod builder;
pub mod config;

pub use builder::{BotBuilder, BotSetup};
pub use config::BotConfig;
