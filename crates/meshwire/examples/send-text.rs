//! Send a text message, broadcast or to one node.
//!
//! Run with:
//!   cargo run --example send-text -- /dev/ttyUSB0 "hello mesh"
//!   cargo run --example send-text -- 192.168.1.40 "hello ridge" 0badf00d

use meshwire::session::{Session, SessionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let usage = "usage: send-text <serial-path|ip-address> <text> [node-hex]";
    let addr = args.next().ok_or(usage)?;
    let text = args.next().ok_or(usage)?;
    let to = match args.next() {
        Some(hex) => Some(u32::from_str_radix(hex.trim_start_matches('!'), 16)?),
        None => None,
    };

    let mut session = Session::open_addr(&addr, SessionConfig::default())?;
    let id = session.send_text(&text, to)?;
    eprintln!("sent packet {id:#010x}");
    Ok(())
}
