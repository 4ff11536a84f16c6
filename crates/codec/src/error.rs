#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Empty message")]
    Empty,

    #[error("Malformed field at byte {position}: missing '='")]
    MalformedField { position: usize },

    #[error("Invalid tag: {tag:?}")]
    InvalidTag { tag: String },

    #[error("Invalid value for tag {tag}: {value:?}")]
    InvalidValue { tag: u32, value: String },

    #[error("Value of tag {tag} is not valid UTF-8")]
    NotUtf8 { tag: u32 },

    #[error("Missing required field {tag}")]
    MissingField { tag: u32 },

    #[error("Expected tag {expected}, found {found}")]
    UnexpectedField { expected: u32, found: u32 },

    #[error("Field {tag} follows the checksum")]
    FieldAfterChecksum { tag: u32 },

    #[error("BeginString mismatch: expected {expected}, got {found}")]
    BeginStringMismatch { expected: String, found: String },

    #[error("BodyLength mismatch: declared {declared}, actual {actual}")]
    BodyLengthMismatch { declared: usize, actual: usize },

    #[error("CheckSum mismatch: declared {declared:03}, computed {computed:03}")]
    ChecksumMismatch { declared: u8, computed: u8 },

    #[error("Unknown message type: {0:?}")]
    UnknownMessageType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("Unsupported FIX version: {0}")]
    UnsupportedVersion(String),
}
