use std::pin::Pin;
use std::sync::Arc;

use recipe_chat_model::{
    ModelProvider, ModelProviderError, ModelReply, ModelRequest,
};
use tracing::Instrument;

type SendRequestResult = Result<ModelReply, Box<dyn ModelProviderError>>;
type BoxedSendRequestFuture =
    Pin<Box<dyn Future<Output = SendRequestResult> + Send>>;
type HandlerFn =
    Arc<dyn Fn(&ModelRequest) -> BoxedSendRequestFuture + Send + Sync>;

/// A wrapper around a model provider that provides a type-erased
/// interface for the other modules.
#[derive(Clone)]
pub struct ModelClient {
    handler_fn: HandlerFn,
}

impl ModelClient {
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `Chef` doesn't have a
        // generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req: &ModelRequest| {
            trace!("got a request: {:?}", req);
            let span = trace_span!(
                "model client req",
                model = %req.model,
                turns = req.messages.len(),
            );
            let fut = provider.send_request(req);
            Box::pin(
                async move {
                    match fut.await {
                        Ok(reply) => {
                            trace!("got a reply: {reply:?}");
                            Ok(reply)
                        }
                        Err(err) => {
                            error!("got an error: {err:?}");
                            Err(Box::new(err) as Box<dyn ModelProviderError>)
                        }
                    }
                }
                .instrument(span),
            )
        });
        Self { handler_fn }
    }

    /// Sends a request and waits for the reply.
    ///
    /// Exactly one call reaches the provider, failures are returned as
    /// they are.
    #[inline]
    pub async fn send_request(
        &self,
        req: &ModelRequest,
    ) -> Result<ModelReply, Box<dyn ModelProviderError>> {
        (self.handler_fn)(req).await
    }
}
