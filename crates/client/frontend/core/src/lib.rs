//! Cross-transport primitives for presenting the game.
//!
//! Houses command parsing, the [`Dispatcher`] that maps commands onto the
//! runtime, the transport-neutral [`Reply`] model and the [`Transport`] seam
//! that concrete chat adapters implement.
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod format;
pub mod message;
pub mod reply;
pub mod transport;

pub use command::Command;
pub use config::FrontendConfig;
pub use dispatcher::Dispatcher;
pub use message::{ChannelId, InboundMessage};
pub use reply::{Color, Embed, EmbedField, Reply};
pub use transport::Transport;
