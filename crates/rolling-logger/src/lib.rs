//! Rolling Logger
//!
//! A `tracing` layer that formats every event as a single line, keeps the most
//! recent lines in a bounded in-memory buffer and forwards each line to an
//! optional sink (the browser console in the app).

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::field::{Field, Visit};
use tracing::subscriber::SetGlobalDefaultError;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

type Sink = Box<dyn Fn(&Level, &str) + Send + Sync>;

/// Circular buffer of formatted log lines, shared with the layer
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn locked(&self) -> MutexGuard<'_, VecDeque<String>> {
        // A panic while logging must not silence every later line
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, line: String) {
        let mut lines = self.locked();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.locked().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.locked().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked().is_empty()
    }

    pub fn clear(&self) {
        self.locked().clear();
    }
}

/// Layer writing into a [`LogBuffer`]
pub struct RollingLayer {
    buffer: LogBuffer,
    max_level: Level,
    sink: Option<Sink>,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            max_level: Level::INFO,
            sink: None,
        }
    }

    /// Most verbose level recorded
    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }

    pub fn with_sink(mut self, sink: impl Fn(&Level, &str) + Send + Sync + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() > self.max_level {
            return;
        }

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let line = format!(
            "{} {:<5} {}: {}{}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            meta.target(),
            visitor.message,
            visitor.fields,
        );

        if let Some(sink) = &self.sink {
            sink(meta.level(), &line);
        }
        self.buffer.push(line);
    }
}

/// Collects the message and `key=value` pairs of one event
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Install a global subscriber with a [`RollingLayer`] and return its buffer
pub fn init(
    max_level: Level,
    sink: impl Fn(&Level, &str) + Send + Sync + 'static,
) -> Result<LogBuffer, SetGlobalDefaultError> {
    let buffer = LogBuffer::default();
    let layer = RollingLayer::new(buffer.clone())
        .with_max_level(max_level)
        .with_sink(sink);
    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(layer))?;
    Ok(buffer)
}
