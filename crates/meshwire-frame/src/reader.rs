use bytes::Bytes;
use meshwire_transport::Transport;
use tracing::{debug, trace};

use crate::codec::FrameConfig;
use crate::error::Result;
use crate::sync::FrameSync;

/// Collects complete frames from a [`Transport`], one read cycle at a time.
///
/// A read cycle pulls single bytes until the device goes quiet: end of
/// stream, an elapsed read deadline, or (when enabled) a long run of one
/// repeated byte value. Frames left incomplete at that point are dropped.
pub struct FrameReader<T> {
    inner: T,
    config: FrameConfig,
}

impl<T: Transport> FrameReader<T> {
    /// Create a new frame reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new frame reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self { inner, config }
    }

    /// Run one read cycle and return the payloads seen, in receipt order.
    ///
    /// An empty result is not an error. Deadline expiry and end of stream
    /// end the cycle normally; any other transport failure is returned.
    pub fn read_cycle(&mut self) -> Result<Vec<Bytes>> {
        let mut sync = FrameSync::with_max_payload(self.config.max_payload_size);
        let mut frames = Vec::new();
        let mut byte = [0u8; 1];
        let mut previous = None;
        let mut run = 0usize;

        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => {
                    trace!("end of stream");
                    break;
                }
                Ok(_) => {}
                Err(err) if err.is_idle() => {
                    trace!("read deadline elapsed");
                    break;
                }
                Err(err) => return Err(err.into()),
            }

            let b = byte[0];
            run = if previous == Some(b) { run + 1 } else { 1 };
            previous = Some(b);
            if let Some(limit) = self.config.repeat_byte_limit {
                if run > limit {
                    debug!(byte = b, run, "repeated byte run, treating device as idle");
                    break;
                }
            }

            if let Some(frame) = sync.push(b) {
                debug!(len = frame.len(), "received frame");
                frames.push(frame);
            }
        }

        if sync.buffered_len() > 0 {
            debug!(dropped = sync.buffered_len(), "incomplete frame at end of read cycle");
        }
        Ok(frames)
    }

    /// Borrow the underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner transport.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current frame reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}
