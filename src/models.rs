use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Video,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Any tag that is not a known string (null, a number, an object) becomes
/// `Unknown` instead of failing the whole message.
fn lenient_kind<'de, D>(deserializer: D) -> Result<MessageKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub sender: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_kind")]
    pub message_type: MessageKind,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub group_image: Option<String>,
    #[serde(default)]
    pub last_message: Option<Message>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub is_group: bool,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
}

impl Conversation {
    /// Epoch milliseconds of the latest thing that happened in this conversation.
    pub fn last_activity(&self) -> f64 {
        self.last_message
            .as_ref()
            .map_or(self.creation_time, |m| m.creation_time)
    }
}

/// Most recently active first.
pub fn sort_by_activity(items: &mut [Conversation]) {
    items.sort_by(|a, b| b.last_activity().total_cmp(&a.last_activity()));
}
