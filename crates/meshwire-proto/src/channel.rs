//! Channel definitions.

use crate::config::LoRaConfig;

/// How a channel slot is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ChannelRole {
    /// Slot is unused.
    Disabled = 0,
    /// Slot 0; carries the radio's default traffic.
    Primary = 1,
    Secondary = 2,
}

/// One channel slot as reported or configured on the radio.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Channel {
    #[prost(int32, tag = "1")]
    pub index: i32,
    #[prost(message, optional, tag = "2")]
    pub settings: Option<ChannelSettings>,
    #[prost(enumeration = "ChannelRole", tag = "3")]
    pub role: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelSettings {
    #[prost(uint32, tag = "1")]
    pub channel_num: u32,
    /// Pre-shared key; empty means no encryption, one byte selects a
    /// well-known default key.
    #[prost(bytes = "vec", tag = "2")]
    pub psk: Vec<u8>,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(fixed32, tag = "4")]
    pub id: u32,
    #[prost(bool, tag = "5")]
    pub uplink_enabled: bool,
    #[prost(bool, tag = "6")]
    pub downlink_enabled: bool,
    #[prost(message, optional, tag = "7")]
    pub module_settings: Option<ModuleSettings>,
}

/// Per-channel settings consumed by firmware modules.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleSettings {
    #[prost(uint32, tag = "1")]
    pub position_precision: u32,
    #[prost(bool, tag = "2")]
    pub is_client_muted: bool,
}

/// The set of channels (plus radio parameters) encoded in a share URL.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelSet {
    #[prost(message, repeated, tag = "1")]
    pub settings: Vec<ChannelSettings>,
    #[prost(message, optional, tag = "2")]
    pub lora_config: Option<LoRaConfig>,
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;

    #[test]
    fn disabled_is_the_default_role() {
        let channel = Channel::default();
        assert_eq!(channel.role(), ChannelRole::Disabled);
    }

    #[test]
    fn unknown_role_value_reads_as_default() {
        let channel = Channel {
            role: 9,
            ..Channel::default()
        };
        assert_eq!(channel.role(), ChannelRole::Disabled);
    }

    #[test]
    fn channel_set_round_trips() {
        let set = ChannelSet {
            settings: vec![
                ChannelSettings {
                    name: "base".into(),
                    psk: vec![1],
                    ..ChannelSettings::default()
                },
                ChannelSettings {
                    name: "ops".into(),
                    module_settings: Some(ModuleSettings {
                        position_precision: 13,
                        is_client_muted: false,
                    }),
                    ..ChannelSettings::default()
                },
            ],
            lora_config: None,
        };
        let decoded = ChannelSet::decode(set.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, set);
    }
}
