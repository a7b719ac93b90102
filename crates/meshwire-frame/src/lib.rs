//! Length-prefixed message framing for mesh radio streams.
//!
//! Every message on the wire is framed with:
//! - Two sync bytes (`0x94 0xC3`) for stream synchronization
//! - A 2-byte big-endian payload length (at most 512)
//!
//! There is no trailer and no checksum, so the decoder resynchronizes on
//! the sync bytes and drops anything that does not fit the header.

pub mod codec;
pub mod error;
pub mod reader;
pub mod sync;
pub mod writer;

pub use codec::{encode_frame, FrameConfig, HEADER_SIZE, MAX_PAYLOAD, START1, START2};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use sync::FrameSync;
pub use writer::FrameWriter;
