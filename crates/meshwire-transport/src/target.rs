use std::fmt;
use std::net::IpAddr;

/// Where a device is reachable.
///
/// Classification is purely syntactic: anything that parses as an IP
/// address is a network device, everything else is a serial device path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A local serial device such as `/dev/ttyUSB0` or `COM3`.
    Serial(String),
    /// A device reachable over TCP.
    Network(IpAddr),
}

impl Target {
    /// Classify a connection address.
    pub fn parse(addr: &str) -> Self {
        let addr = addr.trim();
        match addr.parse::<IpAddr>() {
            Ok(ip) => Target::Network(ip),
            Err(_) => Target::Serial(addr.to_string()),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Target::Network(_))
    }
}

impl From<&str> for Target {
    fn from(addr: &str) -> Self {
        Target::parse(addr)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Serial(path) => write!(f, "serial:{path}"),
            Target::Network(ip) => write!(f, "tcp:{ip}"),
        }
    }
}
