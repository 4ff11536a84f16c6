//! Seams between the replay loop and the protocol codec
//!
//! The loop only needs a message type tag and a one-line rendering, so any
//! codec can be plugged in by implementing [`Decoder`] and [`TypeNames`].

use std::fmt::Display;

use fixlog_codec::{Context, DecodeError, Message, registry};

/// Decoded message as seen by the loop
pub trait DecodedMessage: Display {
    fn msg_type(&self) -> &str;
}

/// Trait for decoding one raw line (offset already removed)
pub trait Decoder {
    type Message: DecodedMessage;
    type Error: Display;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Message, Self::Error>;
}

/// Message type tag to display name lookup used by the summary report
pub trait TypeNames {
    fn display_name(&self, msg_type: &str) -> Option<&str>;
}

impl DecodedMessage for Message {
    fn msg_type(&self) -> &str {
        Message::msg_type(self)
    }
}

/// FIX tag=value decoder bound to one decode context
#[derive(Debug, Clone, Default)]
pub struct FixDecoder {
    context: Context,
}

impl FixDecoder {
    pub fn new(context: Context) -> Self {
        Self { context }
    }
}

impl Decoder for FixDecoder {
    type Message = Message;
    type Error = DecodeError;

    fn decode(&self, bytes: &[u8]) -> Result<Message, DecodeError> {
        Message::decode(bytes, &self.context)
    }
}

/// Names from the FIX message type registry
#[derive(Debug, Clone, Copy, Default)]
pub struct FixTypeNames;

impl TypeNames for FixTypeNames {
    fn display_name(&self, msg_type: &str) -> Option<&str> {
        registry::display_name(msg_type)
    }
}
