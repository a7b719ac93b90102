//! Device configuration sections.
//!
//! The radio reports each section as its own `Config` message during a
//! want-config dump, and accepts one section per `set_config` command.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Config {
    #[prost(oneof = "ConfigSection", tags = "1, 2, 3, 4, 5, 6, 7")]
    pub payload_variant: Option<ConfigSection>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum ConfigSection {
    #[prost(message, tag = "1")]
    Device(DeviceConfig),
    #[prost(message, tag = "2")]
    Position(PositionConfig),
    #[prost(message, tag = "3")]
    Power(PowerConfig),
    #[prost(message, tag = "4")]
    Network(NetworkConfig),
    #[prost(message, tag = "5")]
    Display(DisplayConfig),
    #[prost(message, tag = "6")]
    Lora(LoRaConfig),
    #[prost(message, tag = "7")]
    Bluetooth(BluetoothConfig),
}

impl ConfigSection {
    /// Section name as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Device(_) => "device",
            Self::Position(_) => "position",
            Self::Power(_) => "power",
            Self::Network(_) => "network",
            Self::Display(_) => "display",
            Self::Lora(_) => "lora",
            Self::Bluetooth(_) => "bluetooth",
        }
    }
}

impl From<ConfigSection> for Config {
    fn from(section: ConfigSection) -> Self {
        Self {
            payload_variant: Some(section),
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceConfig {
    #[prost(int32, tag = "1")]
    pub role: i32,
    #[prost(bool, tag = "2")]
    pub serial_enabled: bool,
    #[prost(bool, tag = "3")]
    pub debug_log_enabled: bool,
    #[prost(uint32, tag = "4")]
    pub button_gpio: u32,
    #[prost(uint32, tag = "5")]
    pub buzzer_gpio: u32,
    #[prost(int32, tag = "6")]
    pub rebroadcast_mode: i32,
    #[prost(uint32, tag = "7")]
    pub node_info_broadcast_secs: u32,
    #[prost(bool, tag = "8")]
    pub double_tap_as_button_press: bool,
    #[prost(bool, tag = "9")]
    pub is_managed: bool,
    #[prost(bool, tag = "10")]
    pub disable_triple_click: bool,
    #[prost(string, tag = "11")]
    pub tzdef: String,
    #[prost(bool, tag = "12")]
    pub led_heartbeat_disabled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionConfig {
    #[prost(uint32, tag = "1")]
    pub position_broadcast_secs: u32,
    #[prost(bool, tag = "2")]
    pub position_broadcast_smart_enabled: bool,
    /// Use the position stored on the device instead of GPS.
    #[prost(bool, tag = "3")]
    pub fixed_position: bool,
    #[prost(bool, tag = "4")]
    pub gps_enabled: bool,
    #[prost(uint32, tag = "5")]
    pub gps_update_interval: u32,
    #[prost(uint32, tag = "6")]
    pub gps_attempt_time: u32,
    #[prost(uint32, tag = "7")]
    pub position_flags: u32,
    #[prost(uint32, tag = "8")]
    pub rx_gpio: u32,
    #[prost(uint32, tag = "9")]
    pub tx_gpio: u32,
    #[prost(uint32, tag = "10")]
    pub broadcast_smart_minimum_distance: u32,
    #[prost(uint32, tag = "11")]
    pub broadcast_smart_minimum_interval_secs: u32,
    #[prost(uint32, tag = "12")]
    pub gps_en_gpio: u32,
    #[prost(int32, tag = "13")]
    pub gps_mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PowerConfig {
    #[prost(bool, tag = "1")]
    pub is_power_saving: bool,
    #[prost(uint32, tag = "2")]
    pub on_battery_shutdown_after_secs: u32,
    #[prost(float, tag = "3")]
    pub adc_multiplier_override: f32,
    #[prost(uint32, tag = "4")]
    pub wait_bluetooth_secs: u32,
    #[prost(uint32, tag = "6")]
    pub sds_secs: u32,
    #[prost(uint32, tag = "7")]
    pub ls_secs: u32,
    #[prost(uint32, tag = "8")]
    pub min_wake_secs: u32,
    #[prost(uint32, tag = "9")]
    pub device_battery_ina_address: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NetworkConfig {
    #[prost(bool, tag = "1")]
    pub wifi_enabled: bool,
    #[prost(string, tag = "3")]
    pub wifi_ssid: String,
    #[prost(string, tag = "4")]
    pub wifi_psk: String,
    #[prost(string, tag = "5")]
    pub ntp_server: String,
    #[prost(bool, tag = "6")]
    pub eth_enabled: bool,
    #[prost(int32, tag = "7")]
    pub address_mode: i32,
    #[prost(string, tag = "9")]
    pub rsyslog_server: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DisplayConfig {
    #[prost(uint32, tag = "1")]
    pub screen_on_secs: u32,
    #[prost(int32, tag = "2")]
    pub gps_format: i32,
    #[prost(uint32, tag = "3")]
    pub auto_screen_carousel_secs: u32,
    #[prost(bool, tag = "4")]
    pub compass_north_top: bool,
    #[prost(bool, tag = "5")]
    pub flip_screen: bool,
    #[prost(int32, tag = "6")]
    pub units: i32,
    #[prost(int32, tag = "7")]
    pub oled: i32,
    #[prost(int32, tag = "8")]
    pub displaymode: i32,
    #[prost(bool, tag = "9")]
    pub heading_bold: bool,
    #[prost(bool, tag = "10")]
    pub wake_on_tap_or_motion: bool,
    #[prost(int32, tag = "11")]
    pub compass_orientation: i32,
}

/// Named LoRa modem settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ModemPreset {
    LongFast = 0,
    LongSlow = 1,
    VeryLongSlow = 2,
    MediumSlow = 3,
    MediumFast = 4,
    ShortSlow = 5,
    ShortFast = 6,
    LongModerate = 7,
    ShortTurbo = 8,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoRaConfig {
    /// When set, `modem_preset` wins over the raw modem parameters.
    #[prost(bool, tag = "1")]
    pub use_preset: bool,
    #[prost(enumeration = "ModemPreset", tag = "2")]
    pub modem_preset: i32,
    #[prost(uint32, tag = "3")]
    pub bandwidth: u32,
    #[prost(uint32, tag = "4")]
    pub spread_factor: u32,
    #[prost(uint32, tag = "5")]
    pub coding_rate: u32,
    #[prost(float, tag = "6")]
    pub frequency_offset: f32,
    #[prost(int32, tag = "7")]
    pub region: i32,
    #[prost(uint32, tag = "8")]
    pub hop_limit: u32,
    #[prost(bool, tag = "9")]
    pub tx_enabled: bool,
    #[prost(int32, tag = "10")]
    pub tx_power: i32,
    #[prost(uint32, tag = "11")]
    pub channel_num: u32,
    #[prost(bool, tag = "12")]
    pub override_duty_cycle: bool,
    #[prost(bool, tag = "13")]
    pub sx126x_rx_boosted_gain: bool,
    #[prost(float, tag = "14")]
    pub override_frequency: f32,
    #[prost(bool, tag = "15")]
    pub pa_fan_disabled: bool,
    #[prost(uint32, repeated, tag = "103")]
    pub ignore_incoming: Vec<u32>,
    #[prost(bool, tag = "104")]
    pub ignore_mqtt: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BluetoothConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(int32, tag = "2")]
    pub mode: i32,
    #[prost(uint32, tag = "3")]
    pub fixed_pin: u32,
}
