use tracing::info;

use crate::config::TransportConfig;
use crate::error::Result;
use crate::serial::SerialTransport;
use crate::target::Target;
use crate::tcp::TcpTransport;

/// A half-duplex byte pipe to a device.
///
/// Implementations own exactly one physical connection. Reads report
/// end-of-stream as `Ok(0)` and an elapsed deadline as
/// [`TransportError::DeadlineExceeded`](crate::TransportError::DeadlineExceeded);
/// both are normal loop-termination signals for callers.
pub trait Transport {
    /// Write the whole buffer (blocking).
    fn write_all(&mut self, buf: &[u8]) -> Result<()>;

    /// Read up to `buf.len()` bytes (blocking until data, deadline or EOF).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Release the connection. Calling this more than once is a no-op.
    fn close(&mut self);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write_all(buf)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write_all(buf)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// A connected device link, either serial or TCP.
///
/// This is the transport [`Link::open`] hands out for a [`Target`].
pub struct Link {
    inner: LinkInner,
}

enum LinkInner {
    Serial(SerialTransport),
    Tcp(TcpTransport),
}

impl Link {
    /// Open the transport matching `target`.
    pub fn open(target: &Target, config: &TransportConfig) -> Result<Self> {
        let inner = match target {
            Target::Serial(path) => LinkInner::Serial(SerialTransport::open(path, config)?),
            Target::Network(ip) => LinkInner::Tcp(TcpTransport::connect(*ip, config)?),
        };
        info!(%target, "device link open");
        Ok(Self { inner })
    }

    /// Classify `addr` and open it.
    pub fn open_addr(addr: &str, config: &TransportConfig) -> Result<Self> {
        Self::open(&Target::parse(addr), config)
    }

    /// Transport name for diagnostics.
    pub fn transport_name(&self) -> &'static str {
        match &self.inner {
            LinkInner::Serial(_) => "serial",
            LinkInner::Tcp(_) => "tcp",
        }
    }
}

impl From<SerialTransport> for Link {
    fn from(transport: SerialTransport) -> Self {
        Self {
            inner: LinkInner::Serial(transport),
        }
    }
}

impl From<TcpTransport> for Link {
    fn from(transport: TcpTransport) -> Self {
        Self {
            inner: LinkInner::Tcp(transport),
        }
    }
}

impl Transport for Link {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        match &mut self.inner {
            LinkInner::Serial(port) => port.write_all(buf),
            LinkInner::Tcp(stream) => stream.write_all(buf),
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match &mut self.inner {
            LinkInner::Serial(port) => port.read(buf),
            LinkInner::Tcp(stream) => stream.read(buf),
        }
    }

    fn close(&mut self) {
        match &mut self.inner {
            LinkInner::Serial(port) => port.close(),
            LinkInner::Tcp(stream) => stream.close(),
        }
    }
}

impl std::fmt::Debug for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            LinkInner::Serial(port) => f.debug_tuple("Link").field(port).finish(),
            LinkInner::Tcp(stream) => f.debug_tuple("Link").field(stream).finish(),
        }
    }
}
