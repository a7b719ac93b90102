use crate::fields::FieldError;

/// Errors that can occur in session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Transport-level error (opening or closing the device link).
    #[error("transport error: {0}")]
    Transport(#[from] meshwire_transport::TransportError),

    /// Frame-level error.
    #[error("frame error: {0}")]
    Frame(#[from] meshwire_frame::FrameError),

    /// Outgoing message could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] prost::EncodeError),

    /// Incoming payload is not a valid message.
    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The device never reported its own node number.
    #[error("device did not report its node number")]
    NodeUnresolved,

    #[error("channel {0} not found")]
    ChannelNotFound(i32),

    #[error("no channels found")]
    NoChannelsFound,

    #[error("no radio config found")]
    ConfigNotFound,

    #[error("no nodes found")]
    NoNodesFound,

    #[error("owner not found")]
    OwnerNotFound,

    #[error("cannot delete primary channel")]
    CannotDeletePrimaryChannel,

    #[error("channel {0} is disabled")]
    ChannelDisabled(i32),

    /// The target channel slot is already in use.
    #[error("channel {0} already exists")]
    ChannelExists(i32),

    /// No config or module section has a field with this name.
    #[error("unknown config field: {0}")]
    UnknownField(String),

    /// A field-level set was rejected.
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("message too long: {len} bytes (max {max})")]
    MessageTooLong { len: usize, max: usize },

    #[error("name too short: must be more than 2 characters")]
    NameTooShort,
}

impl SessionError {
    /// True for the "asked the device, it had nothing" family.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NodeUnresolved
                | Self::ChannelNotFound(_)
                | Self::NoChannelsFound
                | Self::ConfigNotFound
                | Self::NoNodesFound
                | Self::OwnerNotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
