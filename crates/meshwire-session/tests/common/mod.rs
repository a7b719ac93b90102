//! A scripted radio for driving sessions without hardware.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use bytes::BytesMut;
use meshwire_frame::{encode_frame, FrameSync};
use meshwire_proto::{
    AdminMessage, Channel, ChannelRole, ChannelSettings, Config, ConfigSection, DeviceConfig,
    FromRadio, FromRadioVariant, LoRaConfig, Message, ModemPreset, ModuleConfig, ModuleSection,
    MqttConfig, MyNodeInfo, NodeInfo, PortNum, ToRadio, ToRadioVariant, User,
};
use meshwire_session::SessionConfig;
use meshwire_transport::{Transport, TransportError};

pub const NODE: u32 = 0x1234_5678;

pub enum Step {
    /// Raw bytes handed out one per read.
    Bytes(Vec<u8>),
    /// One read that hits the deadline.
    Silence,
}

type Responder = Box<dyn FnMut(&ToRadio) -> Vec<Step>>;

/// Transport double: decodes every write and queues the scripted reply.
///
/// Reads with nothing queued behave like an idle device (deadline).
pub struct Device {
    respond: Responder,
    pending: VecDeque<Step>,
    pub sent: Vec<ToRadio>,
    pub idle_reads: usize,
    pub closes: usize,
}

impl Device {
    pub fn new(respond: impl FnMut(&ToRadio) -> Vec<Step> + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            pending: VecDeque::new(),
            sent: Vec::new(),
            idle_reads: 0,
            closes: 0,
        }
    }

    /// A device that never answers anything.
    pub fn silent() -> Self {
        Self::new(|_| Vec::new())
    }

    /// Admin commands written so far, in order.
    pub fn admin_sent(&self) -> Vec<(u32, AdminMessage)> {
        self.sent
            .iter()
            .filter_map(|msg| match &msg.payload_variant {
                Some(ToRadioVariant::Packet(packet)) => {
                    let data = packet.decoded()?;
                    if data.portnum() != PortNum::AdminApp {
                        return None;
                    }
                    let admin = AdminMessage::decode(data.payload.as_slice())
                        .expect("admin payload should decode");
                    Some((packet.to, admin))
                }
                _ => None,
            })
            .collect()
    }

    pub fn want_config_count(&self) -> usize {
        self.sent
            .iter()
            .filter(|msg| matches!(msg.payload_variant, Some(ToRadioVariant::WantConfigId(_))))
            .count()
    }
}

impl Transport for Device {
    fn write_all(&mut self, buf: &[u8]) -> meshwire_transport::Result<()> {
        let frames = FrameSync::new().push_slice(buf);
        assert_eq!(frames.len(), 1, "each write should carry exactly one frame");
        let msg = ToRadio::decode(frames[0].as_ref()).expect("written frame should be a ToRadio");
        let reply = (self.respond)(&msg);
        self.pending.extend(reply);
        self.sent.push(msg);
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> meshwire_transport::Result<usize> {
        loop {
            let Some(step) = self.pending.front_mut() else {
                self.idle_reads += 1;
                return Err(TransportError::DeadlineExceeded);
            };
            if let Step::Bytes(bytes) = step {
                if !bytes.is_empty() {
                    buf[0] = bytes.remove(0);
                    return Ok(1);
                }
            }
            if let Some(Step::Silence) = self.pending.pop_front() {
                self.idle_reads += 1;
                return Err(TransportError::DeadlineExceeded);
            }
        }
    }

    fn close(&mut self) {
        self.closes += 1;
    }
}

/// Frame one message as the radio would send it.
pub fn wire(msg: &FromRadio) -> Vec<u8> {
    let mut buf = BytesMut::new();
    encode_frame(&msg.encode_to_vec(), &mut buf);
    buf.to_vec()
}

pub fn wire_all(msgs: &[FromRadio]) -> Vec<u8> {
    msgs.iter().flat_map(wire).collect()
}

pub fn from_radio(variant: FromRadioVariant) -> FromRadio {
    FromRadio {
        id: 0,
        payload_variant: Some(variant),
    }
}

pub fn my_info(num: u32) -> FromRadio {
    from_radio(FromRadioVariant::MyInfo(MyNodeInfo {
        my_node_num: num,
        ..MyNodeInfo::default()
    }))
}

pub fn channel(index: i32, role: ChannelRole, name: &str) -> Channel {
    Channel {
        index,
        role: role as i32,
        settings: Some(ChannelSettings {
            name: name.to_string(),
            psk: vec![1],
            ..ChannelSettings::default()
        }),
    }
}

pub fn node(num: u32, long_name: &str) -> NodeInfo {
    NodeInfo {
        num,
        user: Some(User {
            id: format!("!{num:08x}"),
            long_name: long_name.to_string(),
            short_name: long_name.chars().take(3).collect(),
            ..User::default()
        }),
        ..NodeInfo::default()
    }
}

/// What a healthy radio reports after a want-config request.
#[derive(Clone)]
pub struct Dump {
    pub node: u32,
    pub channels: Vec<Channel>,
    pub nodes: Vec<NodeInfo>,
    pub config: Vec<ConfigSection>,
    pub modules: Vec<ModuleSection>,
}

impl Default for Dump {
    fn default() -> Self {
        Self {
            node: NODE,
            channels: vec![
                channel(0, ChannelRole::Primary, "base"),
                channel(1, ChannelRole::Secondary, "ops"),
                Channel {
                    index: 2,
                    ..Channel::default()
                },
            ],
            nodes: vec![node(NODE, "Base Camp"), node(0x0BAD_F00D, "Ridge Relay")],
            config: vec![
                ConfigSection::Device(DeviceConfig::default()),
                ConfigSection::Lora(LoRaConfig {
                    modem_preset: ModemPreset::LongFast as i32,
                    hop_limit: 3,
                    ..LoRaConfig::default()
                }),
            ],
            modules: vec![ModuleSection::Mqtt(MqttConfig::default())],
        }
    }
}

impl Dump {
    pub fn messages(&self) -> Vec<FromRadio> {
        let mut msgs = vec![my_info(self.node)];
        msgs.extend(
            self.nodes
                .iter()
                .cloned()
                .map(|n| from_radio(FromRadioVariant::NodeInfo(n))),
        );
        msgs.extend(
            self.config
                .iter()
                .cloned()
                .map(|c| from_radio(FromRadioVariant::Config(Config::from(c)))),
        );
        msgs.extend(
            self.modules
                .iter()
                .cloned()
                .map(|m| from_radio(FromRadioVariant::ModuleConfig(ModuleConfig::from(m)))),
        );
        msgs.extend(
            self.channels
                .iter()
                .cloned()
                .map(|c| from_radio(FromRadioVariant::Channel(c))),
        );
        msgs.push(from_radio(FromRadioVariant::ConfigCompleteId(42)));
        msgs
    }

    /// A device that answers every want-config with this dump and ignores
    /// packets.
    pub fn device(self) -> Device {
        Device::new(move |req| match req.payload_variant {
            Some(ToRadioVariant::WantConfigId(_)) => vec![Step::Bytes(wire_all(&self.messages()))],
            _ => Vec::new(),
        })
    }
}

/// Session config with no pause between query attempts.
pub fn fast_config() -> SessionConfig {
    SessionConfig {
        retry_delay: Duration::ZERO,
        ..SessionConfig::default()
    }
}
