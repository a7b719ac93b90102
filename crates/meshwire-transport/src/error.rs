use std::net::SocketAddr;

/// Errors that can occur in device transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the serial device at the given path.
    #[error("failed to open serial device {path}: {source}")]
    Open {
        path: String,
        source: serialport::Error,
    },

    /// Failed to connect to the network device.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The serial driver reported an error after the port was opened.
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    /// An I/O error occurred on the transport stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The read or write deadline elapsed before the operation completed.
    #[error("transport deadline exceeded")]
    DeadlineExceeded,

    /// The transport has been closed.
    #[error("transport closed")]
    Closed,
}

impl TransportError {
    /// Classify an I/O error, splitting deadline expiry from hard failures.
    pub fn from_io(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => {
                TransportError::DeadlineExceeded
            }
            _ => TransportError::Io(err),
        }
    }

    /// True when the error only signals that the device went quiet.
    ///
    /// Readers treat this as the end of a read cycle rather than a failure.
    pub fn is_idle(&self) -> bool {
        matches!(self, TransportError::DeadlineExceeded)
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_out_maps_to_deadline() {
        let err = TransportError::from_io(std::io::Error::from(std::io::ErrorKind::TimedOut));
        assert!(err.is_idle());

        let err = TransportError::from_io(std::io::Error::from(std::io::ErrorKind::WouldBlock));
        assert!(matches!(err, TransportError::DeadlineExceeded));
    }

    #[test]
    fn hard_failures_stay_io() {
        let err = TransportError::from_io(std::io::Error::from(
            std::io::ErrorKind::ConnectionReset,
        ));
        assert!(matches!(err, TransportError::Io(_)));
        assert!(!err.is_idle());
    }
}
