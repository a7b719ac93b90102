use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use crate::codec::{header_len, HEADER_SIZE, MAX_PAYLOAD, START1, START2};

/// Byte-at-a-time frame synchronizer.
///
/// Bytes are appended to a working buffer and checked against the header
/// as they arrive. Any violation (wrong sync byte, oversized length)
/// discards the whole buffer and scanning restarts with the next byte.
/// A frame is emitted only once exactly `length + 4` bytes have been
/// collected since the last sync, so partial payloads never escape.
#[derive(Debug)]
pub struct FrameSync {
    buf: BytesMut,
    max_payload: usize,
}

impl Default for FrameSync {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSync {
    /// Create a synchronizer with the firmware's 512-byte payload bound.
    pub fn new() -> Self {
        Self::with_max_payload(MAX_PAYLOAD)
    }

    /// Create a synchronizer with an explicit payload bound.
    pub fn with_max_payload(max_payload: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(HEADER_SIZE + max_payload),
            max_payload,
        }
    }

    /// Feed one byte. Returns the payload when it completes a frame.
    pub fn push(&mut self, byte: u8) -> Option<Bytes> {
        let pos = self.buf.len();
        self.buf.put_u8(byte);

        match pos {
            0 if byte != START1 => self.discard("not at frame start"),
            1 if byte != START2 => self.discard("bad second sync byte"),
            0..=2 => {}
            _ => {
                let len = header_len(&self.buf);
                if pos == HEADER_SIZE - 1 && len > self.max_payload {
                    debug!(len, max = self.max_payload, "oversized frame length");
                    self.discard("oversized length");
                } else if pos + 1 == len + HEADER_SIZE {
                    let frame = self.buf.split().freeze();
                    return Some(frame.slice(HEADER_SIZE..));
                }
            }
        }
        None
    }

    /// Feed a run of bytes, collecting every completed payload in order.
    pub fn push_slice(&mut self, bytes: &[u8]) -> Vec<Bytes> {
        bytes.iter().filter_map(|&b| self.push(b)).collect()
    }

    /// Number of bytes collected toward the current frame.
    pub fn buffered_len(&self) -> usize {
        self.buf.len()
    }

    /// Drop any partially collected frame.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    fn discard(&mut self, reason: &'static str) {
        trace!(reason, dropped = self.buf.len(), "frame sync reset");
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::*;
    use crate::codec::encode_frame;

    fn wire(payload: &[u8]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        encode_frame(payload, &mut buf);
        buf.to_vec()
    }

    #[test]
    fn roundtrip_boundary_sizes() {
        for size in [0usize, 1, MAX_PAYLOAD] {
            let payload: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
            let mut sync = FrameSync::new();
            let frames = sync.push_slice(&wire(&payload));
            assert_eq!(frames.len(), 1, "size {size}");
            assert_eq!(frames[0].as_ref(), payload.as_slice());
            assert_eq!(sync.buffered_len(), 0);
        }
    }

    #[test]
    fn payload_over_bound_is_rejected() {
        let payload = vec![0x11; MAX_PAYLOAD + 1];
        let mut sync = FrameSync::new();
        assert!(sync.push_slice(&wire(&payload)).is_empty());
    }

    #[test]
    fn garbage_prefix_is_skipped() {
        let mut sync = FrameSync::new();
        let frames = sync.push_slice(&[0x00, 0x94, 0xC3, 0x00, 0x02, 0xAA, 0xBB]);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_ref(), &[0xAA, 0xBB]);
    }

    #[test]
    fn bad_second_sync_byte_discards_buffer() {
        let mut sync = FrameSync::new();
        assert!(sync.push(0x94).is_none());
        assert!(sync.push(0x00).is_none());
        assert_eq!(sync.buffered_len(), 0);

        let frames = sync.push_slice(&wire(b"ok"));
        assert_eq!(frames[0].as_ref(), b"ok");
    }

    #[test]
    fn concatenated_frames_in_order() {
        let mut bytes = wire(b"first");
        bytes.extend(wire(b"second"));

        let mut sync = FrameSync::new();
        let frames = sync.push_slice(&bytes);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].as_ref(), b"first");
        assert_eq!(frames[1].as_ref(), b"second");
    }

    #[test]
    fn oversized_length_resyncs_immediately() {
        let mut sync = FrameSync::new();
        // Header claims 600 bytes.
        assert!(sync.push_slice(&[0x94, 0xC3, 0x02, 0x58]).is_empty());
        assert_eq!(sync.buffered_len(), 0);

        let frames = sync.push_slice(&wire(&[0x01, 0x02, 0x03]));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_ref(), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn partial_frame_is_not_emitted() {
        let bytes = wire(b"hello");
        let mut sync = FrameSync::new();
        assert!(sync.push_slice(&bytes[..bytes.len() - 1]).is_empty());
        assert_eq!(sync.buffered_len(), bytes.len() - 1);

        sync.reset();
        assert_eq!(sync.buffered_len(), 0);
    }

    #[test]
    fn sync_bytes_inside_payload_are_data() {
        let payload = [0x94, 0xC3, 0x94, 0xC3];
        let mut sync = FrameSync::new();
        let frames = sync.push_slice(&wire(&payload));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_ref(), &payload);
    }
}
