use std::sync::Arc;

use recipe_chat_model::ModelProvider;

use super::Chef;
use crate::config::Config;
use crate::model_client::ModelClient;
use crate::prompt::INSTRUCTION_TEXT;

/// [`Chef`] builder.
pub struct ChefBuilder {
    pub(crate) model_client: ModelClient,
    pub(crate) model: Option<String>,
    pub(crate) instruction: Option<String>,
}

impl ChefBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            model_client: ModelClient::new(provider),
            model: None,
            instruction: None,
        }
    }

    /// Creates a new builder with the specified model provider, targeting
    /// the model named by `config`.
    #[inline]
    pub fn from_config<P: ModelProvider + 'static>(
        config: &Config,
        provider: P,
    ) -> Self {
        Self::with_model_provider(provider).with_model(config.model())
    }

    /// Sets the model identifier. Defaults to
    /// [`Config::DEFAULT_MODEL`].
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Replaces the built-in instruction text. A blank instruction is
    /// ignored.
    #[inline]
    pub fn with_instruction<S: Into<String>>(
        mut self,
        instruction: S,
    ) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Builds the chef.
    #[inline]
    pub fn build(self) -> Chef {
        let model = self
            .model
            .unwrap_or_else(|| Config::DEFAULT_MODEL.to_owned());
        let instruction = self
            .instruction
            .filter(|instruction| !instruction.trim().is_empty())
            .unwrap_or_else(|| INSTRUCTION_TEXT.to_owned());
        Chef {
            model_client: self.model_client,
            model: Arc::from(model),
            instruction: Arc::from(instruction),
        }
    }
}
