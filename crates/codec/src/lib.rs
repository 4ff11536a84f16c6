//! FIX tag=value codec used by the log printer.
//!
//! [`Message::decode`] parses one raw message under a [`Context`], and
//! [`registry::display_name`] maps a message type tag to its display name.
//! Every message type the decoder accepts is present in the registry.

pub mod context;
pub mod error;
pub mod field;
pub mod message;
pub mod registry;

pub use context::Context;
pub use error::{ContextError, DecodeError};
pub use field::{Field, tags};
pub use message::{Message, MessageBuilder, PIPE, SOH};
