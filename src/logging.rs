//! In-memory log capture.
//!
//! A [`LogBuffer`] collects formatted `tracing` output line by line so a
//! scrollback view can show it. It is attached explicitly and only for as
//! long as the returned [`LogScope`] lives; the library never installs a
//! global subscriber.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Shared, cloneable store of captured log lines.
#[derive(Clone, Debug, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<Vec<String>>>,
    echo: bool,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also copy every line to stderr.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Route `tracing` events on the current thread into this buffer until
    /// the returned scope is dropped.
    ///
    /// An unparsable `filter` falls back to `info`.
    pub fn attach(&self, filter: &str) -> LogScope {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(self.clone())
            .with_ansi(false)
            .with_target(false)
            .finish();
        LogScope {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }

    /// Snapshot of the captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    fn push_text(&self, text: &str) {
        let mut lines = self.lines.lock();
        lines.extend(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string),
        );
    }
}

/// Keeps a [`LogBuffer`] attached; dropping it restores the previous subscriber.
#[must_use = "the buffer detaches as soon as the scope is dropped"]
pub struct LogScope {
    _guard: tracing::subscriber::DefaultGuard,
}

/// Writer handed to the formatter for each event.
pub struct LogWriter {
    buffer: LogBuffer,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        if self.buffer.echo {
            io::stderr().write_all(buf)?;
        }
        self.buffer.push_text(&text);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.echo {
            io::stderr().flush()?;
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.clone(),
        }
    }
}
