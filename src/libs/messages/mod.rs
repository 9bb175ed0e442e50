//! Centralized application messaging.
//!
//! Every user-facing string lives in the [`Message`] enum, with formatting in
//! `display` and output routing in `macros`. Code never embeds literal UI
//! strings; it picks a variant and hands it to one of the `msg_*` macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
