//! Host-side driver for mesh radio devices.
//!
//! meshwire talks to radio firmware over a serial line or its TCP service
//! port, using sync-byte, length-prefixed frames that carry protobuf
//! messages.
//!
//! # Crate Structure
//!
//! - [`transport`] — Serial and TCP transports, target classification
//! - [`frame`] — Frame encoding and stream resynchronization
//! - [`proto`] — Firmware protobuf messages
//! - [`session`] — Request/response sessions (behind `session` feature)

/// Re-export transport types.
pub mod transport {
    pub use meshwire_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use meshwire_frame::*;
}

/// Re-export protobuf message types.
pub mod proto {
    pub use meshwire_proto::*;
}

/// Re-export session types (requires `session` feature).
#[cfg(feature = "session")]
pub mod session {
    pub use meshwire_session::*;
}
