//! Device transport abstraction.
//!
//! Provides a unified interface over the two ways a radio is reachable:
//! - a local serial device (USB CDC / UART)
//! - a TCP socket on the device's service port
//!
//! This is the lowest layer of meshwire. Everything else builds on top of
//! the [`Transport`] trait and the [`Link`] type provided here.

pub mod config;
pub mod error;
pub mod serial;
pub mod target;
pub mod tcp;
pub mod traits;

pub use config::{SerialProfile, TransportConfig, DEFAULT_TCP_PORT};
pub use error::{Result, TransportError};
pub use serial::SerialTransport;
pub use target::Target;
pub use tcp::TcpTransport;
pub use traits::{Link, Transport};
