//! Configuration of optional firmware modules.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleConfig {
    #[prost(oneof = "ModuleSection", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13")]
    pub payload_variant: Option<ModuleSection>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum ModuleSection {
    #[prost(message, tag = "1")]
    Mqtt(MqttConfig),
    #[prost(message, tag = "2")]
    Serial(SerialConfig),
    #[prost(message, tag = "3")]
    ExternalNotification(ExternalNotificationConfig),
    #[prost(message, tag = "4")]
    StoreForward(StoreForwardConfig),
    #[prost(message, tag = "5")]
    RangeTest(RangeTestConfig),
    #[prost(message, tag = "6")]
    Telemetry(TelemetryConfig),
    #[prost(message, tag = "7")]
    CannedMessage(CannedMessageConfig),
    #[prost(message, tag = "8")]
    Audio(AudioConfig),
    #[prost(message, tag = "9")]
    RemoteHardware(RemoteHardwareConfig),
    #[prost(message, tag = "10")]
    NeighborInfo(NeighborInfoConfig),
    #[prost(message, tag = "11")]
    AmbientLighting(AmbientLightingConfig),
    #[prost(message, tag = "12")]
    DetectionSensor(DetectionSensorConfig),
    #[prost(message, tag = "13")]
    Paxcounter(PaxcounterConfig),
}

impl ModuleSection {
    /// Module name as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mqtt(_) => "mqtt",
            Self::Serial(_) => "serial",
            Self::ExternalNotification(_) => "external_notification",
            Self::StoreForward(_) => "store_forward",
            Self::RangeTest(_) => "range_test",
            Self::Telemetry(_) => "telemetry",
            Self::CannedMessage(_) => "canned_message",
            Self::Audio(_) => "audio",
            Self::RemoteHardware(_) => "remote_hardware",
            Self::NeighborInfo(_) => "neighbor_info",
            Self::AmbientLighting(_) => "ambient_lighting",
            Self::DetectionSensor(_) => "detection_sensor",
            Self::Paxcounter(_) => "paxcounter",
        }
    }
}

impl From<ModuleSection> for ModuleConfig {
    fn from(section: ModuleSection) -> Self {
        Self {
            payload_variant: Some(section),
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MqttConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(string, tag = "2")]
    pub address: String,
    #[prost(string, tag = "3")]
    pub username: String,
    #[prost(string, tag = "4")]
    pub password: String,
    #[prost(bool, tag = "5")]
    pub encryption_enabled: bool,
    #[prost(bool, tag = "6")]
    pub json_enabled: bool,
    #[prost(bool, tag = "7")]
    pub tls_enabled: bool,
    #[prost(string, tag = "8")]
    pub root: String,
    #[prost(bool, tag = "9")]
    pub proxy_to_client_enabled: bool,
    #[prost(bool, tag = "10")]
    pub map_reporting_enabled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SerialConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(bool, tag = "2")]
    pub echo: bool,
    #[prost(uint32, tag = "3")]
    pub rxd: u32,
    #[prost(uint32, tag = "4")]
    pub txd: u32,
    #[prost(int32, tag = "5")]
    pub baud: i32,
    #[prost(uint32, tag = "6")]
    pub timeout: u32,
    #[prost(int32, tag = "7")]
    pub mode: i32,
    #[prost(bool, tag = "8")]
    pub override_console_serial_port: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExternalNotificationConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(uint32, tag = "2")]
    pub output_ms: u32,
    #[prost(uint32, tag = "3")]
    pub output: u32,
    #[prost(bool, tag = "4")]
    pub active: bool,
    #[prost(bool, tag = "5")]
    pub alert_message: bool,
    #[prost(bool, tag = "6")]
    pub alert_bell: bool,
    #[prost(bool, tag = "7")]
    pub use_pwm: bool,
    #[prost(uint32, tag = "8")]
    pub output_vibra: u32,
    #[prost(uint32, tag = "9")]
    pub output_buzzer: u32,
    #[prost(bool, tag = "10")]
    pub alert_message_vibra: bool,
    #[prost(bool, tag = "11")]
    pub alert_message_buzzer: bool,
    #[prost(bool, tag = "12")]
    pub alert_bell_vibra: bool,
    #[prost(bool, tag = "13")]
    pub alert_bell_buzzer: bool,
    #[prost(uint32, tag = "14")]
    pub nag_timeout: u32,
    #[prost(bool, tag = "15")]
    pub use_i2s_as_buzzer: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StoreForwardConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(bool, tag = "2")]
    pub heartbeat: bool,
    #[prost(uint32, tag = "3")]
    pub records: u32,
    #[prost(uint32, tag = "4")]
    pub history_return_max: u32,
    #[prost(uint32, tag = "5")]
    pub history_return_window: u32,
    #[prost(bool, tag = "6")]
    pub is_server: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RangeTestConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(uint32, tag = "2")]
    pub sender: u32,
    #[prost(bool, tag = "3")]
    pub save: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TelemetryConfig {
    #[prost(uint32, tag = "1")]
    pub device_update_interval: u32,
    #[prost(uint32, tag = "2")]
    pub environment_update_interval: u32,
    #[prost(bool, tag = "3")]
    pub environment_measurement_enabled: bool,
    #[prost(bool, tag = "4")]
    pub environment_screen_enabled: bool,
    #[prost(bool, tag = "5")]
    pub environment_display_fahrenheit: bool,
    #[prost(bool, tag = "6")]
    pub air_quality_enabled: bool,
    #[prost(uint32, tag = "7")]
    pub air_quality_interval: u32,
    #[prost(bool, tag = "8")]
    pub power_measurement_enabled: bool,
    #[prost(uint32, tag = "9")]
    pub power_update_interval: u32,
    #[prost(bool, tag = "10")]
    pub power_screen_enabled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CannedMessageConfig {
    #[prost(bool, tag = "1")]
    pub rotary1_enabled: bool,
    #[prost(uint32, tag = "2")]
    pub inputbroker_pin_a: u32,
    #[prost(uint32, tag = "3")]
    pub inputbroker_pin_b: u32,
    #[prost(uint32, tag = "4")]
    pub inputbroker_pin_press: u32,
    #[prost(int32, tag = "5")]
    pub inputbroker_event_cw: i32,
    #[prost(int32, tag = "6")]
    pub inputbroker_event_ccw: i32,
    #[prost(int32, tag = "7")]
    pub inputbroker_event_press: i32,
    #[prost(bool, tag = "8")]
    pub updown1_enabled: bool,
    #[prost(bool, tag = "9")]
    pub enabled: bool,
    #[prost(string, tag = "10")]
    pub allow_input_source: String,
    #[prost(bool, tag = "11")]
    pub send_bell: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AudioConfig {
    #[prost(bool, tag = "1")]
    pub codec2_enabled: bool,
    #[prost(uint32, tag = "2")]
    pub ptt_pin: u32,
    #[prost(int32, tag = "3")]
    pub bitrate: i32,
    #[prost(uint32, tag = "4")]
    pub i2s_ws: u32,
    #[prost(uint32, tag = "5")]
    pub i2s_sd: u32,
    #[prost(uint32, tag = "6")]
    pub i2s_din: u32,
    #[prost(uint32, tag = "7")]
    pub i2s_sck: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoteHardwareConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(bool, tag = "2")]
    pub allow_undefined_pin_access: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NeighborInfoConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(uint32, tag = "2")]
    pub update_interval: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmbientLightingConfig {
    #[prost(bool, tag = "1")]
    pub led_state: bool,
    #[prost(uint32, tag = "2")]
    pub current: u32,
    #[prost(uint32, tag = "3")]
    pub red: u32,
    #[prost(uint32, tag = "4")]
    pub green: u32,
    #[prost(uint32, tag = "5")]
    pub blue: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DetectionSensorConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(uint32, tag = "2")]
    pub minimum_broadcast_secs: u32,
    #[prost(uint32, tag = "3")]
    pub state_broadcast_secs: u32,
    #[prost(bool, tag = "4")]
    pub send_bell: bool,
    #[prost(string, tag = "5")]
    pub name: String,
    #[prost(uint32, tag = "6")]
    pub monitor_pin: u32,
    #[prost(int32, tag = "7")]
    pub detection_trigger_type: i32,
    #[prost(bool, tag = "8")]
    pub use_pullup: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaxcounterConfig {
    #[prost(bool, tag = "1")]
    pub enabled: bool,
    #[prost(uint32, tag = "2")]
    pub paxcounter_update_interval: u32,
    #[prost(int32, tag = "3")]
    pub wifi_threshold: i32,
    #[prost(int32, tag = "4")]
    pub ble_threshold: i32,
}
