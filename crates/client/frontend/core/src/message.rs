//! Inbound chat message primitives.
use game_core::PlayerId;

/// Chat channel identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(pub String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One message delivered by a transport.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub player: PlayerId,
    /// Display name used in replies.
    pub player_name: String,
    pub channel: ChannelId,
    pub text: String,
}

impl InboundMessage {
    pub fn new(
        player: PlayerId,
        player_name: impl Into<String>,
        channel: ChannelId,
        text: impl Into<String>,
    ) -> Self {
        Self {
            player,
            player_name: player_name.into(),
            channel,
            text: text.into(),
        }
    }
}
