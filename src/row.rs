//! Display values for one sidebar row, derived from a [`Conversation`].
//!
//! Everything here is plain data so the GTK layer only has to lay it out.

use crate::models::{Conversation, MessageKind};
use crate::utils::truncate_preview;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";
pub const PRIVATE_CHAT_NAME: &str = "Private Chat";
pub const EMPTY_PREVIEW: &str = "Say Hi!";
pub const PREVIEW_MAX_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// No message has been sent yet.
    Placeholder,
    Text(String),
    Image,
    Video,
    /// Message with a type this client does not know how to show.
    Nothing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationRow {
    pub image: String,
    pub name: String,
    pub timestamp_ms: f64,
    pub seen: bool,
    pub group: bool,
    pub online: bool,
    pub preview: Preview,
}

impl ConversationRow {
    /// `current_user` is the signed-in identity; `None` means nobody is
    /// known, so no message counts as our own.
    pub fn new(conv: &Conversation, current_user: Option<&str>) -> Self {
        let last = conv.last_message.as_ref();
        let preview = match last {
            None => Preview::Placeholder,
            Some(msg) => match msg.message_type {
                MessageKind::Text => Preview::Text(
                    msg.content
                        .as_deref()
                        .map(|c| truncate_preview(c, PREVIEW_MAX_CHARS))
                        .unwrap_or_default(),
                ),
                MessageKind::Image => Preview::Image,
                MessageKind::Video => Preview::Video,
                MessageKind::Unknown => Preview::Nothing,
            },
        };

        Self {
            image: conv
                .group_image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            name: conv
                .group_name
                .clone()
                .unwrap_or_else(|| PRIVATE_CHAT_NAME.to_string()),
            timestamp_ms: conv.last_activity(),
            seen: matches!((last, current_user), (Some(m), Some(me)) if m.sender == me),
            group: conv.is_group,
            online: conv.is_online,
            preview,
        }
    }
}
