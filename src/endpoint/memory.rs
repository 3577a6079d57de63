//! Terminal sink that retains every event in memory.

use crate::endpoint::Endpoint;
use crate::event::Event;

/// An endpoint that appends every written value to an in-memory sequence,
/// in arrival order, for later inspection. Intended for tests and
/// verification.
///
/// Writes are appended as-is with no validation: a caller bypassing
/// [`PropertySetter`](crate::endpoint::PropertySetter) may append `None`,
/// and it is retained like any other entry. History is never discarded,
/// not even by `close`.
#[derive(Debug, Default)]
pub struct InMemoryEndpoint {
    events: Vec<Option<Event>>,
}

impl InMemoryEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// The retained sequence, in the order the events arrived.
    pub fn events(&self) -> &[Option<Event>] {
        &self.events
    }
}

impl Endpoint for InMemoryEndpoint {
    fn write(&mut self, event: Option<Event>) {
        self.events.push(event);
        log::trace!("retained telemetry event ({} total)", self.events.len());
    }

    fn close(&mut self) {}
}
