use recipe_chat_core::conversation::Transcript;
use recipe_chat_core::{Chef, Error, Turn};

/// A chat session, like a window that displays messages and has a input box.
///
/// The session owns the transcript of one conversation and feeds it back
/// to the [`Chef`] on every message. A failed exchange leaves the
/// transcript as it was before the message was sent.
pub struct Session {
    chef: Chef,
    transcript: Transcript,
}

impl Session {
    /// Creates an empty session.
    #[inline]
    pub fn new(chef: Chef) -> Self {
        Self {
            chef,
            transcript: Transcript::new(),
        }
    }

    /// Resumes a session from a previously saved transcript.
    #[inline]
    pub fn with_transcript(chef: Chef, transcript: Transcript) -> Self {
        Self { chef, transcript }
    }

    /// Sends a message and returns the chef's reply.
    pub async fn send_message(
        &mut self,
        message: &str,
    ) -> Result<&str, Error> {
        let mut pending = self.transcript.clone();
        pending.push(Turn::user(message));

        let transcript = self.chef.advance(&pending).await?;
        trace!("transcript has {} turns", transcript.len());
        self.transcript = transcript;

        Ok(self.last_reply().unwrap_or_default())
    }

    /// Returns the content of the latest assistant turn.
    pub fn last_reply(&self) -> Option<&str> {
        self.transcript.last().map(Turn::content)
    }

    /// Returns the whole conversation so far.
    #[inline]
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Forgets the conversation.
    #[inline]
    pub fn reset(&mut self) {
        self.transcript.clear();
    }
}
