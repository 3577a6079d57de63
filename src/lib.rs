//! Telemetry event core: a typed event model, property resolution, and a
//! decorator-style endpoint chain.
//!
//! An [`Event`] carries a name and an ordered bag of resolved property
//! values. Properties are supplied as literals or as zero-argument
//! suppliers, resolved exactly once when attached — at construction or when
//! a [`PropertySetter`] decorates an event on its way to a terminal sink.
//!
//! ```
//! use telemetry_core::{Endpoint, Event, InMemoryEndpoint, Properties, PropertySetter};
//!
//! let mut chain = PropertySetter::new(
//!     InMemoryEndpoint::new(),
//!     Properties::new().set("appVersion", "1.2.3"),
//! );
//!
//! chain.write(Some(Event::new("session.start")));
//! chain.close();
//!
//! let events = chain.inner().events();
//! assert_eq!(events.len(), 1);
//! ```

pub mod endpoint;
pub mod event;
pub mod format;
pub mod property;

pub use endpoint::{Endpoint, InMemoryEndpoint, PropertySetter};
pub use event::Event;
pub use format::{event_to_string, property_value_to_string};
pub use property::{Properties, PropertySource, PropertyValue};
