use std::io::{self, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use meshwire_session::{Session, SessionConfig};
use meshwire_transport::{Target, TransportConfig};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().expect("capture lock");
        String::from_utf8_lossy(&buf).lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn opening_a_session_logs_once_at_info() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let config = SessionConfig {
        transport: TransportConfig {
            tcp_port: listener.local_addr().expect("local addr").port(),
            ..TransportConfig::default()
        },
        ..SessionConfig::default()
    };

    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let target = Target::parse("127.0.0.1");
        let session = Session::open(&target, config).expect("open over loopback");
        let _peer = listener.accept().expect("accept");

        let lines = capture.lines();
        let info: Vec<_> = lines.iter().filter(|line| line.contains(" INFO ")).collect();
        assert_eq!(info.len(), 1, "open should log once at info: {lines:?}");
        assert!(info[0].contains("device link open"));
        assert!(lines
            .iter()
            .any(|line| line.contains("DEBUG") && line.contains("session open")));
        drop(session);
    });
}
