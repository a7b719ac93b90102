//! Set message fields by name from text values.
//!
//! Each settable message type carries a static table mapping a field name to
//! a typed setter. Names are accepted in either the CamelCase form
//! (`DebugLogEnabled`) or the protobuf form (`debug_log_enabled`).

use std::fmt;

use meshwire_proto::{
    AmbientLightingConfig, AudioConfig, BluetoothConfig, CannedMessageConfig, ChannelSettings,
    ConfigSection, DetectionSensorConfig, DeviceConfig, DisplayConfig,
    ExternalNotificationConfig, LoRaConfig, ModuleSection, ModuleSettings, MqttConfig,
    NeighborInfoConfig, NetworkConfig, PaxcounterConfig, PositionConfig, PowerConfig,
    RangeTestConfig, RemoteHardwareConfig, SerialConfig, StoreForwardConfig, TelemetryConfig,
};

/// Errors from a field-level set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown field: {0}")]
    Unknown(String),

    #[error("invalid {kind} value {value:?} for field {field}")]
    InvalidValue {
        field: &'static str,
        value: String,
        kind: FieldKind,
    },
}

/// Value type of a settable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Unsigned,
    /// Also used for enum-typed fields.
    Signed,
    Bytes,
    Text,
    Float,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Bool => "bool",
            FieldKind::Unsigned => "unsigned",
            FieldKind::Signed => "signed",
            FieldKind::Bytes => "bytes",
            FieldKind::Text => "text",
            FieldKind::Float => "float",
        };
        f.write_str(name)
    }
}

/// One named, settable field of `M`.
pub struct FieldSetter<M> {
    pub name: &'static str,
    pub proto_name: &'static str,
    pub kind: FieldKind,
    set: fn(&mut M, &str) -> Result<(), FieldError>,
}

impl<M> FieldSetter<M> {
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.proto_name == name
    }

    pub fn apply(&self, msg: &mut M, value: &str) -> Result<(), FieldError> {
        (self.set)(msg, value)
    }
}

impl<M> fmt::Debug for FieldSetter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSetter")
            .field("name", &self.name)
            .field("proto_name", &self.proto_name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A message type with a table of settable fields.
pub trait FieldTable: Sized + 'static {
    fn fields() -> &'static [FieldSetter<Self>];

    fn field(name: &str) -> Option<&'static FieldSetter<Self>> {
        Self::fields().iter().find(|f| f.matches(name))
    }

    fn has_field(name: &str) -> bool {
        Self::field(name).is_some()
    }
}

/// Set `name` on `msg` from its text form.
pub fn set_field<M: FieldTable>(msg: &mut M, name: &str, value: &str) -> Result<(), FieldError> {
    match M::field(name) {
        Some(setter) => setter.apply(msg, value),
        None => Err(FieldError::Unknown(name.to_string())),
    }
}

/// Text conversion for a field value type.
pub trait FieldValue: Sized {
    const KIND: FieldKind;

    fn parse_field(field: &'static str, value: &str) -> Result<Self, FieldError>;
}

fn invalid(field: &'static str, value: &str, kind: FieldKind) -> FieldError {
    FieldError::InvalidValue {
        field,
        value: value.to_string(),
        kind,
    }
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn parse_field(field: &'static str, value: &str) -> Result<Self, FieldError> {
        match value {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(invalid(field, value, Self::KIND)),
        }
    }
}

impl FieldValue for u32 {
    const KIND: FieldKind = FieldKind::Unsigned;

    fn parse_field(field: &'static str, value: &str) -> Result<Self, FieldError> {
        value.parse().map_err(|_| invalid(field, value, Self::KIND))
    }
}

impl FieldValue for i32 {
    const KIND: FieldKind = FieldKind::Signed;

    fn parse_field(field: &'static str, value: &str) -> Result<Self, FieldError> {
        value.parse().map_err(|_| invalid(field, value, Self::KIND))
    }
}

impl FieldValue for f32 {
    const KIND: FieldKind = FieldKind::Float;

    fn parse_field(field: &'static str, value: &str) -> Result<Self, FieldError> {
        value.parse().map_err(|_| invalid(field, value, Self::KIND))
    }
}

impl FieldValue for Vec<u8> {
    const KIND: FieldKind = FieldKind::Bytes;

    fn parse_field(_field: &'static str, value: &str) -> Result<Self, FieldError> {
        Ok(value.as_bytes().to_vec())
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn parse_field(_field: &'static str, value: &str) -> Result<Self, FieldError> {
        Ok(value.to_string())
    }
}

macro_rules! field_table {
    ($msg:ty { $($name:literal => $field:ident: $ty:ty),* $(,)? }) => {
        impl FieldTable for $msg {
            fn fields() -> &'static [FieldSetter<Self>] {
                const FIELDS: &[FieldSetter<$msg>] = &[
                    $(FieldSetter {
                        name: $name,
                        proto_name: stringify!($field),
                        kind: <$ty as FieldValue>::KIND,
                        set: |msg: &mut $msg, value: &str| {
                            msg.$field = <$ty as FieldValue>::parse_field($name, value)?;
                            Ok(())
                        },
                    },)*
                ];
                FIELDS
            }
        }
    };
}

field_table!(ChannelSettings {
    "ChannelNum" => channel_num: u32,
    "Psk" => psk: Vec<u8>,
    "Name" => name: String,
    "Id" => id: u32,
    "UplinkEnabled" => uplink_enabled: bool,
    "DownlinkEnabled" => downlink_enabled: bool,
});

field_table!(ModuleSettings {
    "PositionPrecision" => position_precision: u32,
    "IsClientMuted" => is_client_muted: bool,
});

field_table!(DeviceConfig {
    "Role" => role: i32,
    "SerialEnabled" => serial_enabled: bool,
    "DebugLogEnabled" => debug_log_enabled: bool,
    "ButtonGpio" => button_gpio: u32,
    "BuzzerGpio" => buzzer_gpio: u32,
    "RebroadcastMode" => rebroadcast_mode: i32,
    "NodeInfoBroadcastSecs" => node_info_broadcast_secs: u32,
    "DoubleTapAsButtonPress" => double_tap_as_button_press: bool,
    "IsManaged" => is_managed: bool,
    "DisableTripleClick" => disable_triple_click: bool,
    "Tzdef" => tzdef: String,
    "LedHeartbeatDisabled" => led_heartbeat_disabled: bool,
});

field_table!(PositionConfig {
    "PositionBroadcastSecs" => position_broadcast_secs: u32,
    "PositionBroadcastSmartEnabled" => position_broadcast_smart_enabled: bool,
    "FixedPosition" => fixed_position: bool,
    "GpsEnabled" => gps_enabled: bool,
    "GpsUpdateInterval" => gps_update_interval: u32,
    "GpsAttemptTime" => gps_attempt_time: u32,
    "PositionFlags" => position_flags: u32,
    "RxGpio" => rx_gpio: u32,
    "TxGpio" => tx_gpio: u32,
    "BroadcastSmartMinimumDistance" => broadcast_smart_minimum_distance: u32,
    "BroadcastSmartMinimumIntervalSecs" => broadcast_smart_minimum_interval_secs: u32,
    "GpsEnGpio" => gps_en_gpio: u32,
    "GpsMode" => gps_mode: i32,
});

field_table!(PowerConfig {
    "IsPowerSaving" => is_power_saving: bool,
    "OnBatteryShutdownAfterSecs" => on_battery_shutdown_after_secs: u32,
    "AdcMultiplierOverride" => adc_multiplier_override: f32,
    "WaitBluetoothSecs" => wait_bluetooth_secs: u32,
    "SdsSecs" => sds_secs: u32,
    "LsSecs" => ls_secs: u32,
    "MinWakeSecs" => min_wake_secs: u32,
    "DeviceBatteryInaAddress" => device_battery_ina_address: u32,
});

field_table!(NetworkConfig {
    "WifiEnabled" => wifi_enabled: bool,
    "WifiSsid" => wifi_ssid: String,
    "WifiPsk" => wifi_psk: String,
    "NtpServer" => ntp_server: String,
    "EthEnabled" => eth_enabled: bool,
    "AddressMode" => address_mode: i32,
    "RsyslogServer" => rsyslog_server: String,
});

field_table!(DisplayConfig {
    "ScreenOnSecs" => screen_on_secs: u32,
    "GpsFormat" => gps_format: i32,
    "AutoScreenCarouselSecs" => auto_screen_carousel_secs: u32,
    "CompassNorthTop" => compass_north_top: bool,
    "FlipScreen" => flip_screen: bool,
    "Units" => units: i32,
    "Oled" => oled: i32,
    "Displaymode" => displaymode: i32,
    "HeadingBold" => heading_bold: bool,
    "WakeOnTapOrMotion" => wake_on_tap_or_motion: bool,
    "CompassOrientation" => compass_orientation: i32,
});

field_table!(LoRaConfig {
    "UsePreset" => use_preset: bool,
    "ModemPreset" => modem_preset: i32,
    "Bandwidth" => bandwidth: u32,
    "SpreadFactor" => spread_factor: u32,
    "CodingRate" => coding_rate: u32,
    "FrequencyOffset" => frequency_offset: f32,
    "Region" => region: i32,
    "HopLimit" => hop_limit: u32,
    "TxEnabled" => tx_enabled: bool,
    "TxPower" => tx_power: i32,
    "ChannelNum" => channel_num: u32,
    "OverrideDutyCycle" => override_duty_cycle: bool,
    "Sx126XRxBoostedGain" => sx126x_rx_boosted_gain: bool,
    "OverrideFrequency" => override_frequency: f32,
    "PaFanDisabled" => pa_fan_disabled: bool,
    "IgnoreMqtt" => ignore_mqtt: bool,
});

field_table!(BluetoothConfig {
    "Enabled" => enabled: bool,
    "Mode" => mode: i32,
    "FixedPin" => fixed_pin: u32,
});

field_table!(MqttConfig {
    "Enabled" => enabled: bool,
    "Address" => address: String,
    "Username" => username: String,
    "Password" => password: String,
    "EncryptionEnabled" => encryption_enabled: bool,
    "JsonEnabled" => json_enabled: bool,
    "TlsEnabled" => tls_enabled: bool,
    "Root" => root: String,
    "ProxyToClientEnabled" => proxy_to_client_enabled: bool,
    "MapReportingEnabled" => map_reporting_enabled: bool,
});

field_table!(SerialConfig {
    "Enabled" => enabled: bool,
    "Echo" => echo: bool,
    "Rxd" => rxd: u32,
    "Txd" => txd: u32,
    "Baud" => baud: i32,
    "Timeout" => timeout: u32,
    "Mode" => mode: i32,
    "OverrideConsoleSerialPort" => override_console_serial_port: bool,
});

field_table!(ExternalNotificationConfig {
    "Enabled" => enabled: bool,
    "OutputMs" => output_ms: u32,
    "Output" => output: u32,
    "Active" => active: bool,
    "AlertMessage" => alert_message: bool,
    "AlertBell" => alert_bell: bool,
    "UsePwm" => use_pwm: bool,
    "OutputVibra" => output_vibra: u32,
    "OutputBuzzer" => output_buzzer: u32,
    "AlertMessageVibra" => alert_message_vibra: bool,
    "AlertMessageBuzzer" => alert_message_buzzer: bool,
    "AlertBellVibra" => alert_bell_vibra: bool,
    "AlertBellBuzzer" => alert_bell_buzzer: bool,
    "NagTimeout" => nag_timeout: u32,
    "UseI2SAsBuzzer" => use_i2s_as_buzzer: bool,
});

field_table!(StoreForwardConfig {
    "Enabled" => enabled: bool,
    "Heartbeat" => heartbeat: bool,
    "Records" => records: u32,
    "HistoryReturnMax" => history_return_max: u32,
    "HistoryReturnWindow" => history_return_window: u32,
    "IsServer" => is_server: bool,
});

field_table!(RangeTestConfig {
    "Enabled" => enabled: bool,
    "Sender" => sender: u32,
    "Save" => save: bool,
});

field_table!(TelemetryConfig {
    "DeviceUpdateInterval" => device_update_interval: u32,
    "EnvironmentUpdateInterval" => environment_update_interval: u32,
    "EnvironmentMeasurementEnabled" => environment_measurement_enabled: bool,
    "EnvironmentScreenEnabled" => environment_screen_enabled: bool,
    "EnvironmentDisplayFahrenheit" => environment_display_fahrenheit: bool,
    "AirQualityEnabled" => air_quality_enabled: bool,
    "AirQualityInterval" => air_quality_interval: u32,
    "PowerMeasurementEnabled" => power_measurement_enabled: bool,
    "PowerUpdateInterval" => power_update_interval: u32,
    "PowerScreenEnabled" => power_screen_enabled: bool,
});

field_table!(CannedMessageConfig {
    "Rotary1Enabled" => rotary1_enabled: bool,
    "InputbrokerPinA" => inputbroker_pin_a: u32,
    "InputbrokerPinB" => inputbroker_pin_b: u32,
    "InputbrokerPinPress" => inputbroker_pin_press: u32,
    "InputbrokerEventCw" => inputbroker_event_cw: i32,
    "InputbrokerEventCcw" => inputbroker_event_ccw: i32,
    "InputbrokerEventPress" => inputbroker_event_press: i32,
    "Updown1Enabled" => updown1_enabled: bool,
    "Enabled" => enabled: bool,
    "AllowInputSource" => allow_input_source: String,
    "SendBell" => send_bell: bool,
});

field_table!(AudioConfig {
    "Codec2Enabled" => codec2_enabled: bool,
    "PttPin" => ptt_pin: u32,
    "Bitrate" => bitrate: i32,
    "I2SWs" => i2s_ws: u32,
    "I2SSd" => i2s_sd: u32,
    "I2SDin" => i2s_din: u32,
    "I2SSck" => i2s_sck: u32,
});

field_table!(RemoteHardwareConfig {
    "Enabled" => enabled: bool,
    "AllowUndefinedPinAccess" => allow_undefined_pin_access: bool,
});

field_table!(NeighborInfoConfig {
    "Enabled" => enabled: bool,
    "UpdateInterval" => update_interval: u32,
});

field_table!(AmbientLightingConfig {
    "LedState" => led_state: bool,
    "Current" => current: u32,
    "Red" => red: u32,
    "Green" => green: u32,
    "Blue" => blue: u32,
});

field_table!(DetectionSensorConfig {
    "Enabled" => enabled: bool,
    "MinimumBroadcastSecs" => minimum_broadcast_secs: u32,
    "StateBroadcastSecs" => state_broadcast_secs: u32,
    "SendBell" => send_bell: bool,
    "Name" => name: String,
    "MonitorPin" => monitor_pin: u32,
    "DetectionTriggerType" => detection_trigger_type: i32,
    "UsePullup" => use_pullup: bool,
});

field_table!(PaxcounterConfig {
    "Enabled" => enabled: bool,
    "PaxcounterUpdateInterval" => paxcounter_update_interval: u32,
    "WifiThreshold" => wifi_threshold: i32,
    "BleThreshold" => ble_threshold: i32,
});

fn try_set<M: FieldTable>(msg: &mut M, name: &str, value: &str) -> Result<bool, FieldError> {
    match M::field(name) {
        Some(setter) => setter.apply(msg, value).map(|()| true),
        None => Ok(false),
    }
}

/// Set `name` on whichever message a config section holds.
///
/// Returns `Ok(false)` when the section has no such field.
pub fn set_config_field(
    section: &mut ConfigSection,
    name: &str,
    value: &str,
) -> Result<bool, FieldError> {
    match section {
        ConfigSection::Device(c) => try_set(c, name, value),
        ConfigSection::Position(c) => try_set(c, name, value),
        ConfigSection::Power(c) => try_set(c, name, value),
        ConfigSection::Network(c) => try_set(c, name, value),
        ConfigSection::Display(c) => try_set(c, name, value),
        ConfigSection::Lora(c) => try_set(c, name, value),
        ConfigSection::Bluetooth(c) => try_set(c, name, value),
    }
}

/// Set `name` on whichever message a module config section holds.
///
/// Returns `Ok(false)` when the module has no such field.
pub fn set_module_field(
    section: &mut ModuleSection,
    name: &str,
    value: &str,
) -> Result<bool, FieldError> {
    match section {
        ModuleSection::Mqtt(c) => try_set(c, name, value),
        ModuleSection::Serial(c) => try_set(c, name, value),
        ModuleSection::ExternalNotification(c) => try_set(c, name, value),
        ModuleSection::StoreForward(c) => try_set(c, name, value),
        ModuleSection::RangeTest(c) => try_set(c, name, value),
        ModuleSection::Telemetry(c) => try_set(c, name, value),
        ModuleSection::CannedMessage(c) => try_set(c, name, value),
        ModuleSection::Audio(c) => try_set(c, name, value),
        ModuleSection::RemoteHardware(c) => try_set(c, name, value),
        ModuleSection::NeighborInfo(c) => try_set(c, name, value),
        ModuleSection::AmbientLighting(c) => try_set(c, name, value),
        ModuleSection::DetectionSensor(c) => try_set(c, name, value),
        ModuleSection::Paxcounter(c) => try_set(c, name, value),
    }
}
