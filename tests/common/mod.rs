//! Sinks shared by the integration test binaries

#![allow(dead_code)]

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Length of the `YYYY-MM-DD HH:MM:SS ` field that starts every line.
pub const TIMESTAMP_FIELD_LEN: usize = 20;

/// In-memory sink whose contents stay readable after the logger takes it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("log output is UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that records every `write` call separately, so tests can check that
/// a line reaches the sink in a single call.
#[derive(Clone, Default)]
pub struct ChunkRecorder(Arc<Mutex<Vec<Vec<u8>>>>);

impl ChunkRecorder {
    pub fn chunks(&self) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .map(|chunk| String::from_utf8(chunk.clone()).expect("log output is UTF-8"))
            .collect()
    }
}

impl Write for ChunkRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that rejects every write with the given error kind.
pub struct FailingSink(pub io::ErrorKind);

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "simulated sink failure"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(self.0, "simulated flush failure"))
    }
}

/// Strip the timestamp field from a formatted line.
pub fn without_timestamp(line: &str) -> &str {
    &line[TIMESTAMP_FIELD_LEN..]
}
