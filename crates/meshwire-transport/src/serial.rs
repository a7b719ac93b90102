use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, trace};

use crate::config::TransportConfig;
use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Serial transport to a locally attached device.
///
/// The line is always 8-N-1 without flow control; the speed comes from the
/// configured [`SerialProfile`](crate::SerialProfile). Reads block for at
/// most the port's inter-character timeout.
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>,
    path: String,
    settle: Duration,
}

impl SerialTransport {
    /// Open the serial device at `path` (blocking).
    pub fn open(path: &str, config: &TransportConfig) -> Result<Self> {
        let baud_rate = config.serial_profile.baud_rate();
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(Parity::None)
            .flow_control(FlowControl::None)
            .timeout(config.serial_timeout)
            .open()
            .map_err(|source| TransportError::Open {
                path: path.to_string(),
                source,
            })?;

        debug!(path, baud_rate, "opened serial device");
        Ok(Self {
            port: Some(port),
            path: path.to_string(),
            settle: config.serial_settle,
        })
    }

    /// The device path this transport was opened on.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port.as_mut().ok_or(TransportError::Closed)
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let settle = self.settle;
        let port = self.port()?;
        port.write_all(buf).map_err(TransportError::from_io)?;
        port.flush().map_err(TransportError::from_io)?;
        // The firmware drops input that arrives while it is still parsing.
        if !settle.is_zero() {
            trace!(?settle, "waiting for device to process write");
            std::thread::sleep(settle);
        }
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let port = self.port()?;
        loop {
            match port.read(buf) {
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::from_io(err)),
            }
        }
    }

    fn close(&mut self) {
        if self.port.take().is_some() {
            debug!(path = %self.path, "closed serial device");
        }
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("path", &self.path)
            .field("open", &self.port.is_some())
            .finish()
    }
}
