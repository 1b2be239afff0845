//! An out-of-the-box recipe chatbot that assembles the conversation core
//! and the OpenAI-compatible model provider.
//!
//! The crate includes a CLI tool for using in the terminal. And you can also
//! use it as a library to bring the chef into your own host apps.

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

mod session;

pub use session::Session;

/// Re-exports of [`recipe_chat_core`] crate.
pub mod core {
    pub use recipe_chat_core::*;
}

/// Re-exports of [`recipe_chat_openai_model`] crate.
pub mod openai {
    pub use recipe_chat_openai_model::*;
}
