//! Protobuf messages exchanged with mesh radio firmware.
//!
//! The schema is owned by the firmware project. This crate declares the
//! subset the host side sends and receives, with field numbers and wire
//! types matching the firmware definitions so messages round-trip
//! byte-exactly. Unknown fields and oneof members sent by newer firmware
//! are skipped on decode.
//!
//! - [`mesh`] — host envelopes (`ToRadio`/`FromRadio`), packets, nodes
//! - [`channel`] — channel definitions and shareable channel sets
//! - [`config`] — device configuration sections
//! - [`module_config`] — optional firmware module configuration
//! - [`admin`] — administrative commands carried on the admin port

pub mod admin;
pub mod channel;
pub mod config;
pub mod mesh;
pub mod module_config;

pub use admin::{AdminMessage, AdminVariant, ConfigType, ModuleConfigType};
pub use channel::{Channel, ChannelRole, ChannelSet, ChannelSettings, ModuleSettings};
pub use config::{
    BluetoothConfig, Config, ConfigSection, DeviceConfig, DisplayConfig, LoRaConfig,
    ModemPreset, NetworkConfig, PositionConfig, PowerConfig,
};
pub use mesh::{
    Data, DeviceMetadata, FromRadio, FromRadioVariant, Heartbeat, MeshPacket, MyNodeInfo,
    NodeInfo, PacketPayload, PortNum, Position, ToRadio, ToRadioVariant, User, BROADCAST_ADDR,
    DEFAULT_HOP_LIMIT,
};
pub use module_config::{
    AmbientLightingConfig, AudioConfig, CannedMessageConfig, DetectionSensorConfig,
    ExternalNotificationConfig, ModuleConfig, ModuleSection, MqttConfig, NeighborInfoConfig,
    PaxcounterConfig, RangeTestConfig, RemoteHardwareConfig, SerialConfig, StoreForwardConfig,
    TelemetryConfig,
};

/// Re-exported so callers can encode and decode without naming prost.
pub use prost::Message;
