use std::io::{ErrorKind, Read, Write};
use std::net::{IpAddr, Shutdown, SocketAddr, TcpStream};
use std::time::Duration;

use tracing::debug;

use crate::config::TransportConfig;
use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// TCP transport to a network-attached device.
///
/// Every write and read arms its own deadline, so a silent device surfaces
/// as [`TransportError::DeadlineExceeded`] instead of blocking forever.
pub struct TcpTransport {
    stream: Option<TcpStream>,
    addr: SocketAddr,
    write_timeout: Duration,
    read_timeout: Duration,
}

impl TcpTransport {
    /// Connect to `ip` on the configured service port (blocking).
    pub fn connect(ip: IpAddr, config: &TransportConfig) -> Result<Self> {
        Self::connect_addr(SocketAddr::new(ip, config.tcp_port), config)
    }

    /// Connect to an explicit socket address (blocking).
    pub fn connect_addr(addr: SocketAddr, config: &TransportConfig) -> Result<Self> {
        let stream =
            TcpStream::connect(addr).map_err(|source| TransportError::Connect { addr, source })?;
        // Frames are tiny and latency-bound.
        stream.set_nodelay(true)?;
        debug!(%addr, "connected to device over tcp");
        Ok(Self {
            stream: Some(stream),
            addr,
            write_timeout: config.write_timeout,
            read_timeout: config.read_timeout,
        })
    }

    /// The remote address.
    pub fn peer_addr(&self) -> SocketAddr {
        self.addr
    }

    fn stream(&mut self) -> Result<&mut TcpStream> {
        self.stream.as_mut().ok_or(TransportError::Closed)
    }
}

impl Transport for TcpTransport {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let timeout = self.write_timeout;
        let stream = self.stream()?;
        stream.set_write_timeout(Some(timeout))?;
        stream.write_all(buf).map_err(TransportError::from_io)?;
        stream.flush().map_err(TransportError::from_io)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let timeout = self.read_timeout;
        let stream = self.stream()?;
        stream.set_read_timeout(Some(timeout))?;
        loop {
            match stream.read(buf) {
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::from_io(err)),
            }
        }
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(Shutdown::Both);
            debug!(addr = %self.addr, "closed tcp transport");
        }
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for TcpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcpTransport")
            .field("addr", &self.addr)
            .field("open", &self.stream.is_some())
            .finish()
    }
}
