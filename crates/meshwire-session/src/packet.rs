//! Outgoing envelope builders.
//!
//! Every builder returns the serialized `ToRadio` bytes ready to hand to a
//! [`FrameWriter`](meshwire_frame::FrameWriter). None of them touch the
//! transport.

use std::time::{SystemTime, UNIX_EPOCH};

use meshwire_proto::{
    AdminMessage, Data, MeshPacket, Message, PacketPayload, PortNum, ToRadio, ToRadioVariant,
};

use crate::error::Result;

/// Wrap an application payload in a device-addressed packet envelope.
///
/// The packet always requests a link-level ack.
pub fn build_data_envelope(
    to: u32,
    payload: Vec<u8>,
    port: PortNum,
    want_response: bool,
) -> Result<Vec<u8>> {
    let packet = MeshPacket {
        to,
        want_ack: true,
        payload_variant: Some(PacketPayload::Decoded(Data {
            portnum: port as i32,
            payload,
            want_response,
            ..Data::default()
        })),
        ..MeshPacket::default()
    };
    encode(&ToRadio {
        payload_variant: Some(ToRadioVariant::Packet(packet)),
    })
}

/// Encode an admin command and address it to `to` on the admin port.
pub fn build_admin_envelope(to: u32, admin: &AdminMessage) -> Result<Vec<u8>> {
    build_data_envelope(to, encode(admin)?, PortNum::AdminApp, true)
}

/// Ask the device to dump its identity, config, channels and node database.
pub fn build_want_config(config_id: u32) -> Result<Vec<u8>> {
    encode(&ToRadio {
        payload_variant: Some(ToRadioVariant::WantConfigId(config_id)),
    })
}

/// A text message on the text port with an explicit packet id.
pub fn build_text_message(to: u32, text: &str, packet_id: u32) -> Result<Vec<u8>> {
    let packet = MeshPacket {
        to,
        id: packet_id,
        want_ack: true,
        payload_variant: Some(PacketPayload::Decoded(Data {
            portnum: PortNum::TextMessageApp as i32,
            payload: text.as_bytes().to_vec(),
            ..Data::default()
        })),
        ..MeshPacket::default()
    };
    encode(&ToRadio {
        payload_variant: Some(ToRadioVariant::Packet(packet)),
    })
}

fn encode<M: Message>(msg: &M) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(msg.encoded_len());
    msg.encode(&mut buf)?;
    Ok(buf)
}

/// Source of packet ids for packets the host originates.
///
/// Seeded from the wall clock so ids differ across sessions; zero is
/// skipped because the firmware treats it as "assign one for me".
#[derive(Debug, Clone)]
pub struct PacketIds {
    next: u32,
}

impl PacketIds {
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::starting_at(nanos)
    }

    pub fn starting_at(seed: u32) -> Self {
        Self { next: seed }
    }

    pub fn next_id(&mut self) -> u32 {
        if self.next == 0 {
            self.next = 1;
        }
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

impl Default for PacketIds {
    fn default() -> Self {
        Self::new()
    }
}
