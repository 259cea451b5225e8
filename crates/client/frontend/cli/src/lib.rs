//! Console frontend for the guessing bot.
//!
//! Plays the chat transport role over stdin/stdout so the bot can run
//! without a chat platform:
//! - [`ConsoleTransport`] turns input lines into inbound messages
//! - [`serve`] pumps messages through the dispatcher, one at a time
//! - [`logging`] sets up stderr and file logging for the binary

mod console;
pub mod logging;
mod render;
mod serve;

pub use console::ConsoleTransport;
pub use render::render_reply;
pub use serve::serve;
