//! Administrative commands carried on the admin port.

use crate::channel::Channel;
use crate::config::Config;
use crate::mesh::{DeviceMetadata, Position, User};
use crate::module_config::ModuleConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ConfigType {
    DeviceConfig = 0,
    PositionConfig = 1,
    PowerConfig = 2,
    NetworkConfig = 3,
    DisplayConfig = 4,
    LoraConfig = 5,
    BluetoothConfig = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ModuleConfigType {
    MqttConfig = 0,
    SerialConfig = 1,
    ExtnotifConfig = 2,
    StoreforwardConfig = 3,
    RangetestConfig = 4,
    TelemetryConfig = 5,
    CannedmsgConfig = 6,
    AudioConfig = 7,
    RemotehardwareConfig = 8,
    NeighborinfoConfig = 9,
    AmbientlightingConfig = 10,
    DetectionsensorConfig = 11,
    PaxcounterConfig = 12,
}

/// One administrative request or response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AdminMessage {
    /// Replay-protection token echoed from the last admin response.
    #[prost(bytes = "vec", tag = "101")]
    pub session_passkey: Vec<u8>,
    #[prost(
        oneof = "AdminVariant",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 12, 13, 32, 33, 34, 35, 38, 41, 42, 64, 65, 97, 98, 99, 100"
    )]
    pub payload_variant: Option<AdminVariant>,
}

impl From<AdminVariant> for AdminMessage {
    fn from(variant: AdminVariant) -> Self {
        Self {
            session_passkey: Vec::new(),
            payload_variant: Some(variant),
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum AdminVariant {
    /// One-based channel index.
    #[prost(uint32, tag = "1")]
    GetChannelRequest(u32),
    #[prost(message, tag = "2")]
    GetChannelResponse(Channel),
    #[prost(bool, tag = "3")]
    GetOwnerRequest(bool),
    #[prost(message, tag = "4")]
    GetOwnerResponse(User),
    #[prost(enumeration = "ConfigType", tag = "5")]
    GetConfigRequest(i32),
    #[prost(message, tag = "6")]
    GetConfigResponse(Config),
    #[prost(enumeration = "ModuleConfigType", tag = "7")]
    GetModuleConfigRequest(i32),
    #[prost(message, tag = "8")]
    GetModuleConfigResponse(ModuleConfig),
    #[prost(bool, tag = "12")]
    GetDeviceMetadataRequest(bool),
    #[prost(message, tag = "13")]
    GetDeviceMetadataResponse(DeviceMetadata),
    #[prost(message, tag = "32")]
    SetOwner(User),
    #[prost(message, tag = "33")]
    SetChannel(Channel),
    #[prost(message, tag = "34")]
    SetConfig(Config),
    #[prost(message, tag = "35")]
    SetModuleConfig(ModuleConfig),
    #[prost(uint32, tag = "38")]
    RemoveByNodenum(u32),
    /// Store a position on the device and enable fixed-position mode.
    #[prost(message, tag = "41")]
    SetFixedPosition(Position),
    #[prost(bool, tag = "42")]
    RemoveFixedPosition(bool),
    #[prost(bool, tag = "64")]
    BeginEditSettings(bool),
    #[prost(bool, tag = "65")]
    CommitEditSettings(bool),
    #[prost(int32, tag = "97")]
    RebootSeconds(i32),
    #[prost(int32, tag = "98")]
    ShutdownSeconds(i32),
    #[prost(int32, tag = "99")]
    FactoryResetConfig(i32),
    #[prost(int32, tag = "100")]
    NodedbReset(i32),
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;
    use crate::channel::ChannelRole;

    #[test]
    fn delete_channel_command_bytes() {
        let msg = AdminMessage::from(AdminVariant::SetChannel(Channel {
            index: 2,
            settings: None,
            role: ChannelRole::Disabled as i32,
        }));
        // tag 33 (0x8A 0x02), len 2, { index = 2 }
        assert_eq!(msg.encode_to_vec(), vec![0x8A, 0x02, 0x02, 0x08, 0x02]);
    }

    #[test]
    fn owner_response_decodes() {
        let msg = AdminMessage::from(AdminVariant::GetOwnerResponse(User {
            long_name: "Base Camp".into(),
            short_name: "Bas".into(),
            ..User::default()
        }));
        let decoded = AdminMessage::decode(msg.encode_to_vec().as_slice()).unwrap();
        match decoded.payload_variant {
            Some(AdminVariant::GetOwnerResponse(user)) => assert_eq!(user.short_name, "Bas"),
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn config_request_carries_enum_value() {
        let msg = AdminMessage::from(AdminVariant::GetConfigRequest(
            ConfigType::LoraConfig as i32,
        ));
        assert_eq!(msg.encode_to_vec(), vec![0x28, 0x05]);
    }
}
