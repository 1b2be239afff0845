mod builder;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use recipe_chat_model::{ModelRequest, Role, Turn};

use crate::conversation::{Transcript, normalize, starts_with_system};
use crate::error::Error;
use crate::model_client::ModelClient;
pub use builder::ChefBuilder;

/// The conversation normalizer and completion invoker.
///
/// A `Chef` holds nothing but immutable configuration and the model
/// provider, so it can be cloned freely and shared between tasks. Each
/// call to [`advance`](Self::advance) works on its own transcript.
#[derive(Clone)]
pub struct Chef {
    model_client: ModelClient,
    model: Arc<str>,
    instruction: Arc<str>,
}

impl Chef {
    /// Returns the model identifier sent with every request.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the instruction prepended to transcripts lacking a
    /// `system` turn.
    #[inline]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Produces the conversation including the model's next reply.
    ///
    /// The returned transcript is `transcript`, preceded by a `system` turn
    /// holding the instruction when it doesn't already start with one, and
    /// followed by the assistant reply with surrounding whitespace
    /// removed. The caller's transcript is left untouched.
    ///
    /// Exactly one request is sent to the model provider. Any failure is
    /// returned to the caller without retrying.
    pub async fn advance(
        &self,
        transcript: &[Turn],
    ) -> Result<Transcript, Error> {
        if !starts_with_system(transcript) {
            debug!(
                "prepending instruction to a transcript of {} turns",
                transcript.len()
            );
        }
        let req = ModelRequest {
            model: self.model.to_string(),
            messages: normalize(transcript, &self.instruction),
        };

        let reply = self.model_client.send_request(&req).await?;
        if reply.role != Role::Assistant {
            warn!("model provider replied as `{}`", reply.role);
            return Err(Error::UnexpectedRole(reply.role));
        }

        let mut messages = req.messages;
        messages.push(Turn::assistant(reply.content.trim()));
        Ok(messages)
    }
}
