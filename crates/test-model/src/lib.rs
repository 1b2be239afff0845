//! A local fake model for testing purpose.

mod preset;

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use recipe_chat_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelReply, ModelRequest,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct Script {
    steps: Vec<PresetResponse>,
    step_idx: usize,
    attempts: u64,
    received: Vec<ModelRequest>,
}

impl Script {
    fn next_reply(&mut self) -> Result<ModelReply, Error> {
        let Some(step) = self.steps.get(self.step_idx) else {
            return Err(Error {
                message: "no enough steps",
                kind: ErrorKind::Other,
            });
        };

        let failing = match step.failures {
            Some(0) => true,
            Some(failures) => self.attempts < failures,
            None => false,
        };
        if failing {
            self.attempts += 1;
            return Err(Error {
                message: "preset failure",
                kind: step.failure.into(),
            });
        }

        let reply = ModelReply {
            role: step.role,
            content: step.content.clone(),
        };
        self.step_idx += 1;
        self.attempts = 0;
        Ok(reply)
    }
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the script, which is how the
/// model should respond to each request in order. Every request consumes
/// one step once it succeeds; a failing step is retried on the next
/// request. If there are no enough steps in the script, an error will be
/// returned.
///
/// Every received request is recorded and can be inspected with
/// [`TestModelProvider::received_requests`]. Clones share the same script.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Arc<Mutex<Script>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_response_step(&mut self, preset: PresetResponse) {
        self.script().steps.push(preset);
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns all requests received so far, oldest first.
    pub fn received_requests(&self) -> Vec<ModelRequest> {
        self.script().received.clone()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, Self::Error>> + Send + 'static
    {
        let result = {
            let mut script = self.script();
            script.received.push(req.clone());
            script.next_reply()
        };
        let delay = self.delay;
        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }
            result
        }
    }
}
