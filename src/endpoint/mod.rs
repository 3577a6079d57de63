//! Endpoints: where telemetry events go.
//!
//! An endpoint either disposes of events itself (a terminal sink such as
//! [`InMemoryEndpoint`]) or decorates another endpoint ([`PropertySetter`]).
//! External backends — network uploaders, file loggers — plug into the chain
//! by implementing [`Endpoint`].

pub mod memory;
pub mod setter;

pub use memory::InMemoryEndpoint;
pub use setter::PropertySetter;

use crate::event::Event;

/// A destination for telemetry events.
///
/// Every operation is synchronous and runs to completion on the caller's
/// thread. `write` takes `&mut self`, so single-writer-at-a-time use is
/// enforced by the borrow rules; callers wanting to share a chain across
/// threads add their own synchronization.
pub trait Endpoint {
    /// Accept an event for disposition. `None` models a missing event;
    /// what happens to it is the implementor's policy (decorators swallow
    /// it, the in-memory sink retains it as-is).
    fn write(&mut self, event: Option<Event>);

    /// Release any resources this endpoint holds. Decorators must forward
    /// the call down the chain. Implementations should tolerate repeated
    /// calls; no state machine rejects writes after close.
    fn close(&mut self);
}

impl<E: Endpoint + ?Sized> Endpoint for Box<E> {
    fn write(&mut self, event: Option<Event>) {
        (**self).write(event);
    }

    fn close(&mut self) {
        (**self).close();
    }
}
