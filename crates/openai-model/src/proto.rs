use recipe_chat_model::{ErrorKind, ModelReply, ModelRequest, Role, Turn};
use serde::{Deserialize, Serialize};

use crate::Error;

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatCompletion {
    pub id: Option<String>,
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ResponseMessage {
    pub role: Option<String>,
    pub content: Option<String>,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Message {
    role: &'static str,
    content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(req: &ModelRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: req.model.clone(),
        messages: req.messages.iter().map(create_message).collect(),
        stream: false,
    }
}

#[inline]
fn create_message(turn: &Turn) -> Message {
    Message {
        role: turn.role().as_str(),
        content: turn.content().to_owned(),
    }
}

/// Extracts the reply from the first choice of a completion.
pub fn first_reply(completion: ChatCompletion) -> Result<ModelReply, Error> {
    let Some(choice) = completion.choices.into_iter().next() else {
        return Err(Error::new(
            "response contains no choices",
            ErrorKind::MalformedResponse,
        ));
    };
    trace!(
        "completion {:?} finished: {:?}",
        completion.id, choice.finish_reason
    );

    // Some compatible servers omit the role, the endpoint only ever
    // answers as the assistant.
    let role = choice.message.role.as_deref().unwrap_or("assistant");
    if role != Role::Assistant.as_str() {
        return Err(Error::new(
            format!("unexpected reply role: {role}"),
            ErrorKind::MalformedResponse,
        ));
    }

    let Some(content) = choice.message.content else {
        return Err(Error::new(
            "reply has no content",
            ErrorKind::MalformedResponse,
        ));
    };
    Ok(ModelReply::assistant(content))
}
