//! Print identity, channels and node database of a radio.
//!
//! Run with:
//!   cargo run --example radio-info -- /dev/ttyUSB0
//!   cargo run --example radio-info -- 192.168.1.40

use meshwire::proto::ChannelRole;
use meshwire::session::{Session, SessionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing_subscriber::filter::LevelFilter::INFO)
        .with_target(false)
        .init();

    let addr = std::env::args()
        .nth(1)
        .ok_or("usage: radio-info <serial-path|ip-address>")?;

    let mut session = Session::open_addr(&addr, SessionConfig::default())?;
    println!("node: !{:08x}", session.node_num()?);

    if let Ok(owner) = session.owner() {
        println!("owner: {} ({})", owner.long_name, owner.short_name);
    }

    for channel in session.channels()? {
        if channel.role() == ChannelRole::Disabled {
            continue;
        }
        let name = channel
            .settings
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or_default();
        println!("channel {}: {:?} {}", channel.index, channel.role(), name);
    }

    for node in session.nodes()? {
        let name = node.user.map(|u| u.long_name).unwrap_or_default();
        println!("node !{:08x} {} snr={:.1}", node.num, name, node.snr);
    }

    session.close();
    Ok(())
}
