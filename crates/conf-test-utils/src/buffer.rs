//! [`SharedBuffer`] for capturing [`StreamLogger`](conf_core::StreamLogger)
//! output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory writer whose clones all append to the same bytes.
///
/// # Example
///
/// ```
/// use conf_core::{Logger, StreamLogger};
/// use conf_test_utils::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// StreamLogger::new(buffer.clone()).info("hello");
/// assert!(buffer.contents().contains("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Written lines, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
