/// A formatted chat message addressed to a single channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub channel: String,
    pub text: String,
    /// Whether the messaging service may expand link previews.
    pub unfurl_links: bool,
}

/// Acknowledgment returned once the messaging service accepted a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReceipt {
    pub channel: String,
    /// Server-assigned message timestamp, which doubles as the message id.
    pub ts: String,
}
