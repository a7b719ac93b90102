use std::time::Duration;

use serde::{Deserialize, Serialize};

/// TCP port the device firmware listens on.
pub const DEFAULT_TCP_PORT: u16 = 4403;

/// Serial line speed profile.
///
/// Firmware revisions differ in the console speed they expose; callers pick
/// the profile that matches the firmware on the other end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerialProfile {
    /// 115200 baud, 8-N-1.
    #[default]
    Standard,
    /// 921600 baud, 8-N-1.
    HighSpeed,
}

impl SerialProfile {
    pub fn baud_rate(self) -> u32 {
        match self {
            SerialProfile::Standard => 115_200,
            SerialProfile::HighSpeed => 921_600,
        }
    }
}

/// Configuration shared by the serial and TCP transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Port used when the target is an IP address. Default: 4403.
    pub tcp_port: u16,
    /// Line speed for serial targets.
    pub serial_profile: SerialProfile,
    /// Deadline applied before every TCP write. Default: 1s.
    pub write_timeout: Duration,
    /// Deadline applied before every TCP read. Default: 2s.
    pub read_timeout: Duration,
    /// Serial inter-character timeout. Default: 100ms.
    pub serial_timeout: Duration,
    /// Pause after each serial write while the device processes it. Default: 100ms.
    pub serial_settle: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tcp_port: DEFAULT_TCP_PORT,
            serial_profile: SerialProfile::Standard,
            write_timeout: Duration::from_secs(1),
            read_timeout: Duration::from_secs(2),
            serial_timeout: Duration::from_millis(100),
            serial_settle: Duration::from_millis(100),
        }
    }
}
