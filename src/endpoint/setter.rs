//! Endpoint decorator that stamps properties onto every event.

use crate::endpoint::Endpoint;
use crate::event::Event;
use crate::property::Properties;

/// Decorates an inner endpoint, injecting a fixed set of properties into
/// every event that passes through.
///
/// Injection sources are resolved fresh on every `write`, so a computed
/// source (a counter, a clock) yields a per-event value. The original
/// event's properties are copied verbatim — already resolved, never
/// re-resolved — and injected values win on name collision.
///
/// Setters compose: each setter copies the incoming properties and then
/// overwrites them with its own injections, so for overlapping names the
/// setter nearest the terminal sink wins.
pub struct PropertySetter<E: Endpoint> {
    inner: E,
    properties: Properties,
}

impl<E: Endpoint> PropertySetter<E> {
    pub fn new(inner: E, properties: Properties) -> Self {
        Self { inner, properties }
    }

    /// The wrapped endpoint, for inspection.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap the decorator, recovering the inner endpoint.
    pub fn into_inner(self) -> E {
        self.inner
    }

    fn decorate(&self, event: &Event) -> Event {
        let mut decorated = Event::new(event.name().clone());
        for (name, value) in event.properties() {
            decorated.set_resolved(name, value.clone());
        }
        for (name, source) in self.properties.iter() {
            decorated.set_resolved(name, source.resolve());
        }
        decorated
    }
}

impl<E: Endpoint> Endpoint for PropertySetter<E> {
    fn write(&mut self, event: Option<Event>) {
        let Some(event) = event else {
            // Missing events stop here; the inner endpoint never sees them.
            log::trace!("dropping missing telemetry event");
            return;
        };

        if self.properties.is_empty() {
            self.inner.write(Some(event));
            return;
        }

        let decorated = self.decorate(&event);
        log::trace!(
            "forwarding event with {} injected properties",
            self.properties.len()
        );
        self.inner.write(Some(decorated));
    }

    fn close(&mut self) {
        log::debug!("closing property setter chain");
        self.inner.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::InMemoryEndpoint;
    use crate::property::{Properties, PropertyValue};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_empty_injection_forwards_event_unchanged() {
        let mut setter = PropertySetter::new(InMemoryEndpoint::new(), Properties::new());

        setter.write(Some(Event::new("A")));
        assert_eq!(setter.inner().events(), &[Some(Event::new("A"))]);

        setter.close();
    }

    #[test]
    fn test_injection_applies_to_event_without_properties() {
        let mut setter =
            PropertySetter::new(InMemoryEndpoint::new(), Properties::new().set("B", true));

        setter.write(Some(Event::new("A")));
        assert_eq!(
            setter.inner().events(),
            &[Some(Event::with_properties(
                "A",
                &Properties::new().set("B", true)
            ))]
        );

        setter.close();
    }

    #[test]
    fn test_injection_preserves_original_properties() {
        let mut setter =
            PropertySetter::new(InMemoryEndpoint::new(), Properties::new().set("B", true));

        setter.write(Some(Event::with_properties(
            "A",
            &Properties::new().set("Hello", "there"),
        )));
        assert_eq!(
            setter.inner().events(),
            &[Some(Event::with_properties(
                "A",
                &Properties::new().set("Hello", "there").set("B", true)
            ))]
        );
    }

    #[test]
    fn test_injected_value_wins_on_collision() {
        let mut setter =
            PropertySetter::new(InMemoryEndpoint::new(), Properties::new().set("B", "injected"));

        setter.write(Some(Event::with_properties(
            "A",
            &Properties::new().set("B", "original"),
        )));
        let forwarded = setter.inner().events()[0].as_ref().unwrap();
        assert_eq!(
            forwarded.get("B"),
            Some(&PropertyValue::String("injected".to_string()))
        );
    }

    #[test]
    fn test_missing_event_is_swallowed() {
        let mut setter =
            PropertySetter::new(InMemoryEndpoint::new(), Properties::new().set("B", true));

        setter.write(None);
        assert!(setter.inner().events().is_empty());

        setter.close();
    }

    #[test]
    fn test_injection_resolved_fresh_per_write() {
        let counter = Rc::new(Cell::new(0i64));
        let supplier_counter = Rc::clone(&counter);
        let properties = Properties::new().computed("seq", move || {
            supplier_counter.set(supplier_counter.get() + 1);
            supplier_counter.get()
        });
        let mut setter = PropertySetter::new(InMemoryEndpoint::new(), properties);

        setter.write(Some(Event::new("A")));
        setter.write(Some(Event::new("A")));

        let events = setter.inner().events();
        assert_eq!(
            events[0].as_ref().unwrap().get("seq"),
            Some(&PropertyValue::Number(1.0))
        );
        assert_eq!(
            events[1].as_ref().unwrap().get("seq"),
            Some(&PropertyValue::Number(2.0))
        );
    }

    #[test]
    fn test_original_properties_not_re_resolved() {
        let calls = Rc::new(Cell::new(0u32));
        let supplier_calls = Rc::clone(&calls);
        let event_properties = Properties::new().computed("n", move || {
            supplier_calls.set(supplier_calls.get() + 1);
            7
        });
        let event = Event::with_properties("A", &event_properties);
        assert_eq!(calls.get(), 1);

        let mut setter =
            PropertySetter::new(InMemoryEndpoint::new(), Properties::new().set("B", true));
        setter.write(Some(event));

        // Decoration copies the resolved value; the supplier is not invoked again.
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_nested_setters_downstream_wins() {
        let inner = PropertySetter::new(
            InMemoryEndpoint::new(),
            Properties::new().set("B", "inner").set("C", "inner"),
        );
        let mut outer = PropertySetter::new(inner, Properties::new().set("B", "outer"));

        outer.write(Some(Event::new("A")));

        // The inner setter decorates last, so its injection overwrites the
        // outer setter's value for the shared name.
        let forwarded = outer.inner().inner().events()[0].as_ref().unwrap();
        assert_eq!(
            forwarded.get("B"),
            Some(&PropertyValue::String("inner".to_string()))
        );
        assert_eq!(
            forwarded.get("C"),
            Some(&PropertyValue::String("inner".to_string()))
        );
    }

    #[test]
    fn test_close_forwards_down_the_chain() {
        struct CloseProbe {
            closes: Rc<Cell<u32>>,
        }

        impl Endpoint for CloseProbe {
            fn write(&mut self, _event: Option<Event>) {}

            fn close(&mut self) {
                self.closes.set(self.closes.get() + 1);
            }
        }

        let closes = Rc::new(Cell::new(0u32));
        let probe = CloseProbe {
            closes: Rc::clone(&closes),
        };
        let mut setter = PropertySetter::new(probe, Properties::new());

        setter.close();
        assert_eq!(closes.get(), 1);

        // Repeated close is safe as long as the inner endpoint tolerates it.
        setter.close();
        assert_eq!(closes.get(), 2);
    }
}
