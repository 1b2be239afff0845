//! Conversation core: keeps the chef's instruction at the head of every
//! transcript and asks the model provider for the next reply.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod chef;
pub mod config;
pub mod conversation;
mod error;
mod model_client;
mod prompt;

pub use chef::{Chef, ChefBuilder};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use prompt::INSTRUCTION_TEXT;
pub use recipe_chat_model::{ErrorKind, Role, Turn};
