use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use pathgraph::loader::parse_graph;

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_parse_graph_logs_load_summary() {
    let writer = CaptureWriter::default();
    let sink = writer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        parse_graph("a: b c\nb: c\n").expect("parse");
    });
    let logged = String::from_utf8(writer.0.lock().unwrap().clone()).expect("utf8");
    assert!(logged.contains("graph loaded"), "log was {logged:?}");
    assert!(logged.contains("edges=3"), "log was {logged:?}");
}
