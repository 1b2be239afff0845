//! An abstraction layer for chat-completion providers.
//!
//! This crate establishes the narrow protocol between the conversation
//! core and whatever model provider backs it: send a model identifier
//! together with the ordered turns of a conversation, receive exactly one
//! reply or an error.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to. Concrete providers
//! (and fakes for testing) live in their own crates.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
