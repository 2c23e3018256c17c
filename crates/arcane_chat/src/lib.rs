//! Arcane Chat State
//!
//! Controller-level state for the chat screen: closed message sum types
//! and an observable [`ChatStore`] owning the message list and draft
//! input. Widgets and platform bridges read snapshots and subscribe for
//! changes; nothing outside the store mutates its state.

pub mod message;
pub mod store;

pub use message::{ChatMessage, MessageBlock, Role};
pub use store::{ChatStore, SubscriptionId};
