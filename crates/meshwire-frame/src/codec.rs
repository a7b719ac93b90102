use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};

/// First sync byte.
pub const START1: u8 = 0x94;

/// Second sync byte.
pub const START2: u8 = 0xC3;

/// Frame header: sync (2) + length (2) = 4 bytes.
pub const HEADER_SIZE: usize = 4;

/// Largest payload the device firmware accepts or emits.
pub const MAX_PAYLOAD: usize = 512;

/// Consecutive identical bytes after which a read cycle is considered idle.
pub const DEFAULT_REPEAT_BYTE_LIMIT: usize = 20;

/// Encode a payload into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────────┬───────────┬─────────────────┐
/// │ Sync (2B)    │ Length    │ Payload         │
/// │ 0x94 0xC3    │ (2B BE)   │ (Length bytes)  │
/// └──────────────┴───────────┴─────────────────┘
/// ```
///
/// No length validation happens here; [`FrameWriter`](crate::FrameWriter)
/// enforces [`MAX_PAYLOAD`] before encoding. Only the low 16 bits of the
/// length are written.
pub fn encode_frame(payload: &[u8], dst: &mut BytesMut) {
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_u8(START1);
    dst.put_u8(START2);
    dst.put_u16(payload.len() as u16);
    dst.put_slice(payload);
}

/// Payload length announced by a complete header.
pub(crate) fn header_len(header: &[u8]) -> usize {
    ((u16::from(header[2]) << 8) | u16::from(header[3])) as usize
}

/// Configuration for the frame reader and writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Maximum payload size in bytes. Default: 512.
    pub max_payload_size: usize,
    /// End a read cycle once more than this many consecutive reads return
    /// the same byte. `None` relies on transport deadlines alone.
    /// Default: `Some(20)`.
    pub repeat_byte_limit: Option<usize>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD,
            repeat_byte_limit: Some(DEFAULT_REPEAT_BYTE_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let mut buf = BytesMut::new();
        encode_frame(&[0xAA, 0xBB], &mut buf);
        assert_eq!(buf.as_ref(), &[0x94, 0xC3, 0x00, 0x02, 0xAA, 0xBB]);
    }

    #[test]
    fn length_is_big_endian() {
        let payload = vec![0u8; 0x01F4];
        let mut buf = BytesMut::new();
        encode_frame(&payload, &mut buf);
        assert_eq!(&buf[..HEADER_SIZE], &[0x94, 0xC3, 0x01, 0xF4]);
        assert_eq!(header_len(&buf), 500);
    }

    #[test]
    fn header_len_uses_both_bytes() {
        // A narrowing shift would lose the high byte and read 0x58 here.
        assert_eq!(header_len(&[START1, START2, 0x02, 0x58]), 600);
    }

    #[test]
    fn empty_payload() {
        let mut buf = BytesMut::new();
        encode_frame(b"", &mut buf);
        assert_eq!(buf.as_ref(), &[0x94, 0xC3, 0x00, 0x00]);
    }

    #[test]
    fn config_from_json() {
        let cfg: FrameConfig = serde_json::from_str(r#"{"repeat_byte_limit": null}"#).unwrap();
        assert_eq!(cfg.max_payload_size, MAX_PAYLOAD);
        assert_eq!(cfg.repeat_byte_limit, None);
    }
}
