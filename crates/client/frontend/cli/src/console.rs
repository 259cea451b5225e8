//! Line-oriented console transport.
//!
//! Each input line is one chat message:
//!
//! ```text
//! alice: !start
//! bob#bot: !guess Hornet
//! !help
//! ```
//!
//! `name[#channel]: text` sets the speaker and channel; a bare line is spoken
//! by [`DEFAULT_PLAYER`] in [`DEFAULT_CHANNEL`].
use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use client_frontend_core::{ChannelId, InboundMessage, Reply, Transport};
use game_core::PlayerId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};

use crate::render::render_reply;

pub const DEFAULT_PLAYER: &str = "console";
pub const DEFAULT_CHANNEL: &str = "general";

/// Transport reading messages from `R` and writing replies to `W`.
pub struct ConsoleTransport<R, W> {
    lines: Lines<R>,
    writer: W,
    players: HashMap<String, PlayerId>,
}

impl ConsoleTransport<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    /// Transport bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: reader.lines(),
            writer,
            players: HashMap::new(),
        }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn parse_line(&mut self, line: &str) -> InboundMessage {
        let (speaker, text) = match line.split_once(':') {
            Some((head, text)) if is_speaker(head) => (head.trim(), text.trim()),
            _ => (DEFAULT_PLAYER, line.trim()),
        };

        let (name, channel) = match speaker.split_once('#') {
            Some((name, channel)) if !channel.is_empty() => (name, channel),
            Some((name, _)) => (name, DEFAULT_CHANNEL),
            None => (speaker, DEFAULT_CHANNEL),
        };

        let player = self.player_id(name);
        InboundMessage::new(player, name, ChannelId::new(channel), text)
    }

    /// Stable id per speaker name, assigned in order of first appearance.
    fn player_id(&mut self, name: &str) -> PlayerId {
        let next = PlayerId(self.players.len() as u64 + 1);
        *self.players.entry(name.to_string()).or_insert(next)
    }
}

/// A speaker prefix is a single non-command token.
fn is_speaker(head: &str) -> bool {
    let head = head.trim();
    !head.is_empty() && !head.starts_with('!') && !head.contains(char::is_whitespace)
}

#[async_trait]
impl<R, W> Transport for ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn recv(&mut self) -> Result<Option<InboundMessage>> {
        loop {
            let Some(line) = self
                .lines
                .next_line()
                .await
                .context("Failed to read from console")?
            else {
                return Ok(None);
            };

            if line.trim().is_empty() {
                continue;
            }
            return Ok(Some(self.parse_line(&line)));
        }
    }

    async fn send(&mut self, channel: &ChannelId, reply: Reply) -> Result<()> {
        let rendered = format!("[#{}] {}\n", channel, render_reply(&reply));
        self.writer
            .write_all(rendered.as_bytes())
            .await
            .context("Failed to write to console")?;
        self.writer.flush().await.context("Failed to flush console")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(input: &'static str) -> ConsoleTransport<&'static [u8], Vec<u8>> {
        ConsoleTransport::new(input.as_bytes(), Vec::new())
    }

    #[tokio::test]
    async fn parses_speakers_and_channels() {
        let mut console = transport("alice: !start\n\n  \nbob#bot: !guess Hornet\n!help\nalice: !ff\n");

        let first = console.recv().await.unwrap().unwrap();
        assert_eq!(first.player_name, "alice");
        assert_eq!(first.channel.as_str(), DEFAULT_CHANNEL);
        assert_eq!(first.text, "!start");

        let second = console.recv().await.unwrap().unwrap();
        assert_eq!(second.player_name, "bob");
        assert_eq!(second.channel.as_str(), "bot");
        assert_eq!(second.text, "!guess Hornet");
        assert_ne!(second.player, first.player);

        let third = console.recv().await.unwrap().unwrap();
        assert_eq!(third.player_name, DEFAULT_PLAYER);
        assert_eq!(third.text, "!help");

        let fourth = console.recv().await.unwrap().unwrap();
        assert_eq!(fourth.player, first.player);

        assert!(console.recv().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn colon_inside_command_is_not_a_speaker() {
        let mut console = transport("!guess Hornet: Sentinel\n");
        let message = console.recv().await.unwrap().unwrap();
        assert_eq!(message.player_name, DEFAULT_PLAYER);
        assert_eq!(message.text, "!guess Hornet: Sentinel");
    }

    #[tokio::test]
    async fn send_prefixes_channel() {
        let mut console = transport("");
        console
            .send(&ChannelId::new("general"), Reply::text("hi"))
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8(console.into_writer()).unwrap(),
            "[#general] hi\n"
        );
    }
}
