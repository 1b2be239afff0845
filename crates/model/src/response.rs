use serde::{Deserialize, Serialize};

use crate::request::{Role, Turn};

/// The single reply produced by a model provider.
///
/// Providers only return the first candidate if the upstream service
/// offers several.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelReply {
    /// The author of the reply, always [`Role::Assistant`] for a
    /// well-behaved provider.
    pub role: Role,
    /// The raw reply text, untrimmed.
    pub content: String,
}

impl ModelReply {
    /// Creates an assistant reply.
    #[inline]
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

impl From<ModelReply> for Turn {
    #[inline]
    fn from(reply: ModelReply) -> Self {
        Turn::new(reply.role, reply.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_wire_format() {
        let turn = Turn::user("What can I cook with leeks?");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "role": "user",
                "content": "What can I cook with leeks?"
            })
        );

        let back: Turn = serde_json::from_value(json).unwrap();
        assert_eq!(back, turn);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let res = serde_json::from_str::<Turn>(
            r#"{"role": "tool", "content": "42"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_reply_into_turn() {
        let turn: Turn = ModelReply::assistant("## Leek Soup").into();
        assert_eq!(turn.role(), Role::Assistant);
        assert_eq!(turn.content(), "## Leek Soup");
    }
}
