use std::thread;

use meshwire_frame::{FrameReader, FrameWriter};
use meshwire_proto::{
    AdminMessage, AdminVariant, Channel, ChannelRole, ChannelSet, ChannelSettings, Config,
    ConfigSection, FromRadio, FromRadioVariant, LoRaConfig, Message, ModemPreset, ModuleConfig,
    ModuleSection, ModuleSettings, NodeInfo, PortNum, Position, User, BROADCAST_ADDR,
};
use meshwire_transport::{Link, Target, Transport};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::fields::{self, FieldTable};
use crate::packet::{
    build_admin_envelope, build_data_envelope, build_text_message, build_want_config, PacketIds,
};

/// Device configuration as reported during a config dump.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadioConfig {
    pub config: Vec<ConfigSection>,
    pub modules: Vec<ModuleSection>,
}

impl RadioConfig {
    pub fn is_empty(&self) -> bool {
        self.config.is_empty() && self.modules.is_empty()
    }

    /// The LoRa section, if the device reported one.
    pub fn lora(&self) -> Option<&LoRaConfig> {
        self.config.iter().find_map(|section| match section {
            ConfigSection::Lora(lora) => Some(lora),
            _ => None,
        })
    }
}

/// A request/response session with one device.
///
/// The session exclusively owns its transport. Every query and command is a
/// blocking write followed by one read cycle; there is never more than one
/// request in flight.
pub struct Session<T: Transport = Link> {
    transport: T,
    config: SessionConfig,
    node_num: Option<u32>,
    packet_ids: PacketIds,
    closed: bool,
}

impl Session<Link> {
    /// Open the device at `target`.
    pub fn open(target: &Target, config: SessionConfig) -> Result<Self> {
        let link = Link::open(target, &config.transport)?;
        debug!(%target, transport = link.transport_name(), "session open");
        Ok(Self::from_transport(link, config))
    }

    /// Classify `addr` as serial path or IP address and open it.
    pub fn open_addr(addr: &str, config: SessionConfig) -> Result<Self> {
        Self::open(&Target::parse(addr), config)
    }
}

impl<T: Transport> Session<T> {
    /// Wrap an already-open transport.
    pub fn from_transport(transport: T, config: SessionConfig) -> Self {
        Self {
            transport,
            config,
            node_num: None,
            packet_ids: PacketIds::new(),
            closed: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Borrow the underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport. Safe to call more than once.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.transport.close();
        self.closed = true;
        info!("session closed");
    }

    /// The node number resolved so far, without querying the device.
    pub fn cached_node_num(&self) -> Option<u32> {
        self.node_num
    }

    /// Drop the cached node number so the next call re-queries the device.
    pub fn forget_node_num(&mut self) {
        self.node_num = None;
    }

    /// The node number of the attached device, querying it on first use.
    pub fn node_num(&mut self) -> Result<u32> {
        if let Some(num) = self.node_num {
            return Ok(num);
        }

        let request = build_want_config(self.config.want_config_id)?;
        let responses = self.execute(&request)?;
        let num = responses
            .iter()
            .find_map(|msg| match &msg.payload_variant {
                Some(FromRadioVariant::MyInfo(info)) => Some(info.my_node_num),
                _ => None,
            })
            .ok_or(SessionError::NodeUnresolved)?;

        debug!(node_num = num, "resolved node number");
        self.node_num = Some(num);
        Ok(num)
    }

    /// Send one request frame and collect whatever the device answers.
    ///
    /// If the first read cycle yields nothing, one more cycle runs for slow
    /// devices. An empty result is not an error.
    pub fn execute(&mut self, request: &[u8]) -> Result<Vec<FromRadio>> {
        self.write(request)?;

        let mut reader = FrameReader::with_config(&mut self.transport, self.config.frame.clone());
        let mut frames = reader.read_cycle()?;
        if frames.is_empty() {
            warn!("no response from device, reading once more");
            frames = reader.read_cycle()?;
        }

        let messages = frames
            .iter()
            .map(|frame| FromRadio::decode(frame.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(count = messages.len(), "collected responses");
        Ok(messages)
    }

    /// Full config dump: identity, config sections, channels, node database.
    pub fn radio_info(&mut self) -> Result<Vec<FromRadio>> {
        self.node_num()?;
        let request = build_want_config(self.config.want_config_id)?;
        self.execute(&request)
    }

    /// All channel slots the device reports, including disabled ones.
    pub fn channels(&mut self) -> Result<Vec<Channel>> {
        let channels = self.query(|msg| match msg.payload_variant {
            Some(FromRadioVariant::Channel(channel)) => Some(channel),
            _ => None,
        })?;
        if channels.is_empty() {
            return Err(SessionError::NoChannelsFound);
        }
        Ok(channels)
    }

    pub fn channel(&mut self, index: i32) -> Result<Channel> {
        self.channels()?
            .into_iter()
            .find(|channel| channel.index == index)
            .ok_or(SessionError::ChannelNotFound(index))
    }

    /// Config and module config sections.
    pub fn radio_config(&mut self) -> Result<RadioConfig> {
        let mut best = RadioConfig::default();
        for attempt in 0..self.config.query_attempts {
            if attempt > 0 {
                thread::sleep(self.config.retry_delay);
            }

            let mut found = RadioConfig::default();
            for msg in self.radio_info()? {
                match msg.payload_variant {
                    Some(FromRadioVariant::Config(Config {
                        payload_variant: Some(section),
                    })) => found.config.push(section),
                    Some(FromRadioVariant::ModuleConfig(ModuleConfig {
                        payload_variant: Some(section),
                    })) => found.modules.push(section),
                    _ => {}
                }
            }

            let complete = !found.config.is_empty() && !found.modules.is_empty();
            if !found.is_empty() {
                best = found;
            }
            if complete {
                break;
            }
        }

        if best.is_empty() {
            return Err(SessionError::ConfigNotFound);
        }
        Ok(best)
    }

    /// Entries of the device's node database.
    pub fn nodes(&mut self) -> Result<Vec<NodeInfo>> {
        let nodes = self.query(|msg| match msg.payload_variant {
            Some(FromRadioVariant::NodeInfo(node)) => Some(node),
            _ => None,
        })?;
        if nodes.is_empty() {
            return Err(SessionError::NoNodesFound);
        }
        Ok(nodes)
    }

    /// Owner of the attached device.
    pub fn owner(&mut self) -> Result<User> {
        let num = self.node_num()?;
        self.nodes()?
            .into_iter()
            .find(|node| node.num == num)
            .and_then(|node| node.user)
            .ok_or(SessionError::OwnerNotFound)
    }

    /// Send a text message and return its packet id.
    ///
    /// `None` and `Some(0)` both broadcast. The message is written without
    /// waiting for delivery.
    pub fn send_text(&mut self, text: &str, to: Option<u32>) -> Result<u32> {
        if text.len() > self.config.max_text_len {
            return Err(SessionError::MessageTooLong {
                len: text.len(),
                max: self.config.max_text_len,
            });
        }

        let to = match to {
            None | Some(0) => BROADCAST_ADDR,
            Some(num) => num,
        };
        let id = self.packet_ids.next_id();
        let packet = build_text_message(to, text, id)?;
        self.write(&packet)?;
        info!(to, id, len = text.len(), "sent text message");
        Ok(id)
    }

    /// Set the owner names. The short name is the first three characters.
    pub fn set_owner(&mut self, name: &str) -> Result<()> {
        if name.chars().count() <= 2 {
            return Err(SessionError::NameTooShort);
        }

        let user = User {
            long_name: name.to_string(),
            short_name: name.chars().take(3).collect(),
            ..User::default()
        };
        self.admin(AdminVariant::SetOwner(user))
    }

    /// Write every channel of a decoded channel set to the device.
    ///
    /// The first entry becomes the primary channel. Only the key and module
    /// settings of each entry are applied.
    pub fn apply_channel_set(&mut self, set: &ChannelSet) -> Result<()> {
        for (index, settings) in (0..).zip(&set.settings) {
            let channel = Channel {
                index,
                role: role_for_index(index) as i32,
                settings: Some(ChannelSettings {
                    psk: settings.psk.clone(),
                    module_settings: settings.module_settings.clone(),
                    ..ChannelSettings::default()
                }),
            };
            self.admin(AdminVariant::SetChannel(channel))?;
        }
        debug!(count = set.settings.len(), "applied channel set");
        Ok(())
    }

    /// Define a new channel in a disabled slot.
    pub fn add_channel(&mut self, name: &str, index: i32, psk: Vec<u8>) -> Result<()> {
        let current = self.channel(index)?;
        if current.role() != ChannelRole::Disabled {
            return Err(SessionError::ChannelExists(index));
        }

        let channel = Channel {
            index,
            role: role_for_index(index) as i32,
            settings: Some(ChannelSettings {
                name: name.to_string(),
                psk,
                module_settings: current.settings.and_then(|s| s.module_settings),
                ..ChannelSettings::default()
            }),
        };
        self.admin(AdminVariant::SetChannel(channel))
    }

    /// Change one named field of an enabled channel.
    pub fn set_channel(&mut self, index: i32, field: &str, value: &str) -> Result<()> {
        let current = self.channel(index)?;
        let role = current.role();
        if role == ChannelRole::Disabled {
            return Err(SessionError::ChannelDisabled(index));
        }

        let mut settings = current.settings.unwrap_or_default();
        if ModuleSettings::has_field(field) {
            let module = settings
                .module_settings
                .get_or_insert_with(ModuleSettings::default);
            fields::set_field(module, field, value)?;
        } else {
            fields::set_field(&mut settings, field, value)?;
        }

        let channel = Channel {
            index,
            role: role as i32,
            settings: Some(settings),
        };
        self.admin(AdminVariant::SetChannel(channel))
    }

    /// Disable a secondary channel.
    pub fn delete_channel(&mut self, index: i32) -> Result<()> {
        let current = self.channel(index)?;
        if current.role() == ChannelRole::Primary {
            return Err(SessionError::CannotDeletePrimaryChannel);
        }

        let channel = Channel {
            index,
            role: ChannelRole::Disabled as i32,
            settings: None,
        };
        self.admin(AdminVariant::SetChannel(channel))
    }

    /// Change one named field in whichever config or module section has it.
    ///
    /// Device config sections are searched before module sections; the first
    /// section that knows `field` is updated and written back whole.
    pub fn set_radio_config(&mut self, field: &str, value: &str) -> Result<()> {
        let RadioConfig { config, modules } = self.radio_config()?;

        for mut section in config {
            if fields::set_config_field(&mut section, field, value)? {
                debug!(section = section.name(), field, "setting config field");
                return self.admin(AdminVariant::SetConfig(Config::from(section)));
            }
        }
        for mut section in modules {
            if fields::set_module_field(&mut section, field, value)? {
                debug!(section = section.name(), field, "setting module config field");
                return self.admin(AdminVariant::SetModuleConfig(ModuleConfig::from(section)));
            }
        }

        Err(SessionError::UnknownField(field.to_string()))
    }

    /// Report a position for the attached node.
    ///
    /// Coordinates are degrees scaled by 1e7; altitude is meters.
    pub fn set_location(&mut self, latitude_i: i32, longitude_i: i32, altitude: i32) -> Result<()> {
        let num = self.node_num()?;
        let position = position_at(latitude_i, longitude_i, altitude);
        let packet =
            build_data_envelope(num, position.encode_to_vec(), PortNum::PositionApp, true)?;
        self.submit(&packet)
    }

    /// Store a fixed position on the device.
    pub fn set_fixed_position(
        &mut self,
        latitude_i: i32,
        longitude_i: i32,
        altitude: i32,
    ) -> Result<()> {
        self.admin(AdminVariant::SetFixedPosition(position_at(
            latitude_i,
            longitude_i,
            altitude,
        )))
    }

    /// Switch the LoRa radio to a named modem preset.
    pub fn set_modem_preset(&mut self, preset: ModemPreset) -> Result<()> {
        let mut lora = self
            .radio_config()?
            .lora()
            .cloned()
            .ok_or(SessionError::ConfigNotFound)?;
        lora.use_preset = true;
        lora.modem_preset = preset as i32;
        self.admin(AdminVariant::SetConfig(Config::from(ConfigSection::Lora(lora))))
    }

    fn write(&mut self, payload: &[u8]) -> Result<()> {
        FrameWriter::with_config(&mut self.transport, self.config.frame.clone()).send(payload)?;
        Ok(())
    }

    /// Address an admin command to the attached node and run its cycle.
    fn admin(&mut self, variant: AdminVariant) -> Result<()> {
        let num = self.node_num()?;
        let packet = build_admin_envelope(num, &AdminMessage::from(variant))?;
        self.submit(&packet)
    }

    /// Execute a command and drain whatever the device answers.
    fn submit(&mut self, packet: &[u8]) -> Result<()> {
        let replies = self.execute(packet)?;
        debug!(replies = replies.len(), "command acknowledged");
        Ok(())
    }

    /// Run info cycles until `pick` selects something or attempts run out.
    fn query<R>(&mut self, mut pick: impl FnMut(FromRadio) -> Option<R>) -> Result<Vec<R>> {
        for attempt in 0..self.config.query_attempts {
            if attempt > 0 {
                debug!(attempt, "retrying query");
                thread::sleep(self.config.retry_delay);
            }
            let found: Vec<R> = self.radio_info()?.into_iter().filter_map(&mut pick).collect();
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }
}

impl<T: Transport> Drop for Session<T> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<T: Transport + std::fmt::Debug> std::fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("transport", &self.transport)
            .field("node_num", &self.node_num)
            .field("closed", &self.closed)
            .finish()
    }
}

fn role_for_index(index: i32) -> ChannelRole {
    if index == 0 {
        ChannelRole::Primary
    } else {
        ChannelRole::Secondary
    }
}

fn position_at(latitude_i: i32, longitude_i: i32, altitude: i32) -> Position {
    Position {
        latitude_i: Some(latitude_i),
        longitude_i: Some(longitude_i),
        altitude: Some(altitude),
        ..Position::default()
    }
}
