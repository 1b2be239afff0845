//! Process configuration, resolved once at startup.

use std::env::{self, VarError};

pub use recipe_chat_model::ConfigError;

/// Settings of the conversation core.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    model: String,
}

impl Config {
    /// The model used when `MODEL_NAME` is unset.
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-mini";

    /// Creates a configuration targeting `model`.
    #[inline]
    pub fn with_model<S: Into<String>>(model: S) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Resolves the configuration from the process environment.
    ///
    /// A `.env` file in the working directory (or any parent) is loaded
    /// first. Variables already present in the environment win over the
    /// file.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => warn!("failed to load .env file: {err}"),
        }
        Self::from_lookup(|key| env::var(key))
    }

    /// Same as [`from_env`](Self::from_env), but reads variables through
    /// `lookup` and never touches `.env` files.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let model = match lookup("MODEL_NAME") {
            Ok(model) if model.trim().is_empty() => {
                return Err(ConfigError::new(
                    "MODEL_NAME",
                    "is set but empty",
                ));
            }
            Ok(model) => model.trim().to_owned(),
            Err(VarError::NotPresent) => Self::DEFAULT_MODEL.to_owned(),
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::new(
                    "MODEL_NAME",
                    "is not valid unicode",
                ));
            }
        };
        Ok(Self { model })
    }

    /// Returns the model identifier.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_model(Self::DEFAULT_MODEL)
    }
}
