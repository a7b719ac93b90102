//! Request/response sessions with a mesh radio.
//!
//! This is the layer callers use. Open a [`Session`] on a serial path or IP
//! address, then query identity, channels, config and nodes, or push
//! owner, channel, config and position changes. Each request is one framed
//! `ToRadio` write followed by a read cycle that collects the `FromRadio`
//! replies.

pub mod config;
pub mod error;
pub mod fields;
pub mod packet;
pub mod session;

pub use config::{SessionConfig, DEFAULT_WANT_CONFIG_ID, MAX_TEXT_LEN};
pub use error::{Result, SessionError};
pub use fields::{
    set_config_field, set_field, set_module_field, FieldError, FieldKind, FieldSetter, FieldTable,
    FieldValue,
};
pub use packet::{
    build_admin_envelope, build_data_envelope, build_text_message, build_want_config, PacketIds,
};
pub use session::{RadioConfig, Session};
