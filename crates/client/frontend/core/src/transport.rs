//! Trait describing a chat transport.
use anyhow::Result;
use async_trait::async_trait;

use crate::message::{ChannelId, InboundMessage};
use crate::reply::Reply;

/// Transport abstraction for chat platforms.
///
/// A transport only moves messages; all game decisions are made by the
/// [`Dispatcher`](crate::Dispatcher).
///
/// # Implementations
///
/// - `ConsoleTransport`: line-oriented stdin/stdout adapter
#[async_trait]
pub trait Transport: Send {
    /// Wait for the next inbound message.
    ///
    /// Returns `Ok(None)` once the transport is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection failed and cannot be recovered.
    async fn recv(&mut self) -> Result<Option<InboundMessage>>;

    /// Deliver a reply to a channel.
    async fn send(&mut self, channel: &ChannelId, reply: Reply) -> Result<()>;
}
