use std::time::Duration;

use meshwire_frame::FrameConfig;
use meshwire_transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Config id sent with want-config requests.
pub const DEFAULT_WANT_CONFIG_ID: u32 = 42;

/// Largest text payload the firmware accepts in one packet.
pub const MAX_TEXT_LEN: usize = 240;

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub transport: TransportConfig,
    pub frame: FrameConfig,
    /// Id echoed by the device when a config dump completes. Default: 42.
    pub want_config_id: u32,
    /// Info cycles a typed query runs before giving up. Default: 5.
    pub query_attempts: usize,
    /// Pause between typed query attempts. Default: 50ms.
    pub retry_delay: Duration,
    /// Text message limit in bytes. Default: 240.
    pub max_text_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            transport: TransportConfig::default(),
            frame: FrameConfig::default(),
            want_config_id: DEFAULT_WANT_CONFIG_ID,
            query_attempts: 5,
            retry_delay: Duration::from_millis(50),
            max_text_len: MAX_TEXT_LEN,
        }
    }
}
