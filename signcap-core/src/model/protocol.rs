use crate::model::room::RoomId;
use crate::model::snapshot::RoomSnapshot;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

impl IceServerConfig {
    pub fn stun(url: &str) -> Self {
        Self {
            urls: vec![url.to_string()],
            username: None,
            credential: None,
        }
    }
}

/// Inbound events, one variant per transport event name.
///
/// Deserialization is the validation boundary: a message with a missing or
/// wrong-typed required field (a numeric `roomId`, a non-string caption
/// `text`) fails to parse and is dropped by the transport without reaching
/// the coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all_fields = "camelCase")]
pub enum ClientEvent {
    #[serde(rename = "join")]
    Join {
        room_id: RoomId,
        #[serde(default)]
        name: String,
        #[serde(default)]
        email: String,
    },
    #[serde(rename = "leave")]
    Leave { room_id: RoomId },
    #[serde(rename = "signal:offer")]
    Offer {
        room_id: RoomId,
        offer: Value,
        #[serde(default)]
        from: Option<String>,
    },
    #[serde(rename = "signal:answer")]
    Answer {
        room_id: RoomId,
        answer: Value,
        #[serde(default)]
        from: Option<String>,
    },
    #[serde(rename = "signal:ice")]
    Ice {
        room_id: RoomId,
        candidate: Value,
        #[serde(default)]
        from: Option<String>,
    },
    #[serde(rename = "chat:message")]
    Chat {
        room_id: RoomId,
        text: String,
        #[serde(default = "default_sender")]
        sender: String,
    },
    #[serde(rename = "caption:update")]
    Caption {
        room_id: RoomId,
        text: String,
        #[serde(default = "default_lang")]
        lang: String,
    },
    #[serde(rename = "chat:typing")]
    Typing {
        room_id: RoomId,
        #[serde(default)]
        sender: Option<String>,
        #[serde(default, deserialize_with = "truthy")]
        typing: bool,
    },
}

/// Outbound events delivered to connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    #[serde(rename = "room:state")]
    RoomState(RoomSnapshot),
    #[serde(rename = "presence:join")]
    PresenceJoin { name: String, email: String },
    #[serde(rename = "presence:leave")]
    PresenceLeave {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    #[serde(rename = "signal:offer")]
    Offer {
        offer: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
    },
    #[serde(rename = "signal:answer")]
    Answer {
        answer: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
    },
    #[serde(rename = "signal:ice")]
    Ice {
        candidate: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
    },
    #[serde(rename = "chat:message")]
    Chat {
        text: String,
        sender: String,
        /// Server-assigned ISO-8601 timestamp; authoritative over anything
        /// the client supplied.
        time: String,
    },
    #[serde(rename = "caption:update")]
    Caption { text: String, lang: String },
    #[serde(rename = "chat:typing")]
    Typing {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sender: Option<String>,
        typing: bool,
    },
}

fn default_sender() -> String {
    "Guest".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

/// Truthiness coercion for the typing flag: clients send whatever their UI
/// state held (booleans, 0/1, strings), and existing clients depend on the
/// coercion.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
