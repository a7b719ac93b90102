//! Host envelopes and mesh packet types.

use crate::channel::Channel;
use crate::config::Config;
use crate::module_config::ModuleConfig;

/// Destination address meaning "every node".
pub const BROADCAST_ADDR: u32 = 0xFFFF_FFFF;

/// Hop limit the firmware applies when the host leaves it unset.
pub const DEFAULT_HOP_LIMIT: u32 = 3;

/// Application port a packet payload is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PortNum {
    UnknownApp = 0,
    TextMessageApp = 1,
    RemoteHardwareApp = 2,
    PositionApp = 3,
    NodeinfoApp = 4,
    RoutingApp = 5,
    AdminApp = 6,
    TextMessageCompressedApp = 7,
    WaypointApp = 8,
    AudioApp = 9,
    DetectionSensorApp = 10,
    ReplyApp = 32,
    IpTunnelApp = 33,
    PaxcounterApp = 34,
    SerialApp = 64,
    StoreForwardApp = 65,
    RangeTestApp = 66,
    TelemetryApp = 67,
    ZpsApp = 68,
    SimulatorApp = 69,
    TracerouteApp = 70,
    NeighborinfoApp = 71,
    AtakPlugin = 72,
    MapReportApp = 73,
    PrivateApp = 256,
    AtakForwarder = 257,
    Max = 511,
}

/// Message from the host to the radio.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ToRadio {
    #[prost(oneof = "ToRadioVariant", tags = "1, 3, 4, 7")]
    pub payload_variant: Option<ToRadioVariant>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum ToRadioVariant {
    /// A packet to send over the mesh (or to the local node).
    #[prost(message, tag = "1")]
    Packet(MeshPacket),
    /// Ask the radio to dump its identity, config, channels and node DB.
    #[prost(uint32, tag = "3")]
    WantConfigId(u32),
    #[prost(bool, tag = "4")]
    Disconnect(bool),
    #[prost(message, tag = "7")]
    Heartbeat(Heartbeat),
}

/// Keep-alive for TCP and serial API clients.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Heartbeat {
    #[prost(uint32, tag = "1")]
    pub nonce: u32,
}

/// Message from the radio to the host.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FromRadio {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(oneof = "FromRadioVariant", tags = "2, 3, 4, 5, 7, 8, 9, 10, 13")]
    pub payload_variant: Option<FromRadioVariant>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum FromRadioVariant {
    #[prost(message, tag = "2")]
    Packet(MeshPacket),
    /// Identity of the node the host is attached to.
    #[prost(message, tag = "3")]
    MyInfo(MyNodeInfo),
    #[prost(message, tag = "4")]
    NodeInfo(NodeInfo),
    #[prost(message, tag = "5")]
    Config(Config),
    /// Marks the end of a want-config dump; echoes the request id.
    #[prost(uint32, tag = "7")]
    ConfigCompleteId(u32),
    #[prost(bool, tag = "8")]
    Rebooted(bool),
    #[prost(message, tag = "9")]
    ModuleConfig(ModuleConfig),
    #[prost(message, tag = "10")]
    Channel(Channel),
    #[prost(message, tag = "13")]
    Metadata(DeviceMetadata),
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MeshPacket {
    #[prost(fixed32, tag = "1")]
    pub from: u32,
    #[prost(fixed32, tag = "2")]
    pub to: u32,
    #[prost(uint32, tag = "3")]
    pub channel: u32,
    #[prost(fixed32, tag = "6")]
    pub id: u32,
    #[prost(fixed32, tag = "7")]
    pub rx_time: u32,
    #[prost(float, tag = "8")]
    pub rx_snr: f32,
    #[prost(uint32, tag = "9")]
    pub hop_limit: u32,
    #[prost(bool, tag = "10")]
    pub want_ack: bool,
    #[prost(int32, tag = "11")]
    pub priority: i32,
    #[prost(int32, tag = "12")]
    pub rx_rssi: i32,
    #[prost(bool, tag = "14")]
    pub via_mqtt: bool,
    #[prost(uint32, tag = "15")]
    pub hop_start: u32,
    #[prost(oneof = "PacketPayload", tags = "4, 5")]
    pub payload_variant: Option<PacketPayload>,
}

impl MeshPacket {
    /// The decoded payload, if the packet is not encrypted.
    pub fn decoded(&self) -> Option<&Data> {
        match &self.payload_variant {
            Some(PacketPayload::Decoded(data)) => Some(data),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum PacketPayload {
    #[prost(message, tag = "4")]
    Decoded(Data),
    #[prost(bytes, tag = "5")]
    Encrypted(Vec<u8>),
}

/// Application payload of a packet.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Data {
    #[prost(enumeration = "PortNum", tag = "1")]
    pub portnum: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
    #[prost(bool, tag = "3")]
    pub want_response: bool,
    #[prost(fixed32, tag = "4")]
    pub dest: u32,
    #[prost(fixed32, tag = "5")]
    pub source: u32,
    #[prost(fixed32, tag = "6")]
    pub request_id: u32,
    #[prost(fixed32, tag = "7")]
    pub reply_id: u32,
    #[prost(fixed32, tag = "8")]
    pub emoji: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MyNodeInfo {
    #[prost(uint32, tag = "1")]
    pub my_node_num: u32,
    #[prost(uint32, tag = "8")]
    pub reboot_count: u32,
    #[prost(uint32, tag = "11")]
    pub min_app_version: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeInfo {
    #[prost(uint32, tag = "1")]
    pub num: u32,
    #[prost(message, optional, tag = "2")]
    pub user: Option<User>,
    #[prost(message, optional, tag = "3")]
    pub position: Option<Position>,
    #[prost(float, tag = "4")]
    pub snr: f32,
    #[prost(fixed32, tag = "5")]
    pub last_heard: u32,
    #[prost(uint32, tag = "7")]
    pub channel: u32,
    #[prost(bool, tag = "8")]
    pub via_mqtt: bool,
    #[prost(uint32, optional, tag = "9")]
    pub hops_away: Option<u32>,
    #[prost(bool, tag = "10")]
    pub is_favorite: bool,
}

/// Public identity of a node's owner.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct User {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub long_name: String,
    #[prost(string, tag = "3")]
    pub short_name: String,
    #[prost(bytes = "vec", tag = "4")]
    pub macaddr: Vec<u8>,
    #[prost(int32, tag = "5")]
    pub hw_model: i32,
    #[prost(bool, tag = "6")]
    pub is_licensed: bool,
    #[prost(int32, tag = "7")]
    pub role: i32,
    #[prost(bytes = "vec", tag = "8")]
    pub public_key: Vec<u8>,
}

/// Position in degrees * 1e-7 and meters above MSL.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Position {
    #[prost(sfixed32, optional, tag = "1")]
    pub latitude_i: Option<i32>,
    #[prost(sfixed32, optional, tag = "2")]
    pub longitude_i: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub altitude: Option<i32>,
    #[prost(fixed32, tag = "4")]
    pub time: u32,
    #[prost(int32, tag = "5")]
    pub location_source: i32,
    #[prost(int32, tag = "6")]
    pub altitude_source: i32,
    #[prost(fixed32, tag = "7")]
    pub timestamp: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceMetadata {
    #[prost(string, tag = "1")]
    pub firmware_version: String,
    #[prost(uint32, tag = "2")]
    pub device_state_version: u32,
    #[prost(bool, tag = "3")]
    pub can_shutdown: bool,
    #[prost(bool, tag = "4")]
    pub has_wifi: bool,
    #[prost(bool, tag = "5")]
    pub has_bluetooth: bool,
    #[prost(bool, tag = "6")]
    pub has_ethernet: bool,
    #[prost(int32, tag = "7")]
    pub role: i32,
    #[prost(uint32, tag = "8")]
    pub position_flags: u32,
    #[prost(int32, tag = "9")]
    pub hw_model: i32,
    #[prost(bool, tag = "10")]
    pub has_remote_hardware: bool,
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;

    #[test]
    fn want_config_wire_bytes() {
        let msg = ToRadio {
            payload_variant: Some(ToRadioVariant::WantConfigId(42)),
        };
        // field 3, varint 42
        assert_eq!(msg.encode_to_vec(), vec![0x18, 0x2A]);
    }

    #[test]
    fn my_info_decodes_from_firmware_bytes() {
        // FromRadio { id: 1, my_info { my_node_num: 0x12345678 } }
        let bytes = [0x08, 0x01, 0x1A, 0x06, 0x08, 0xF8, 0xAC, 0xD1, 0x91, 0x01];
        let msg = FromRadio::decode(&bytes[..]).unwrap();
        match msg.payload_variant {
            Some(FromRadioVariant::MyInfo(info)) => assert_eq!(info.my_node_num, 0x1234_5678),
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn unknown_variant_decodes_as_none() {
        // field 6 (log record) is not modelled here.
        let bytes = [0x32, 0x00];
        let msg = FromRadio::decode(&bytes[..]).unwrap();
        assert!(msg.payload_variant.is_none());
    }

    #[test]
    fn packet_addresses_are_fixed32() {
        let packet = MeshPacket {
            to: BROADCAST_ADDR,
            ..MeshPacket::default()
        };
        assert_eq!(packet.encode_to_vec(), vec![0x15, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn portnum_accessor() {
        let data = Data {
            portnum: PortNum::AdminApp as i32,
            ..Data::default()
        };
        assert_eq!(data.portnum(), PortNum::AdminApp);
    }
}
