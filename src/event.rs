//! The telemetry event record.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::property::{Properties, PropertyValue};

/// Reserved property name that addresses the event's name rather than an
/// entry in the property map.
pub(crate) const EVENT_NAME_KEY: &str = "eventName";

/// A named telemetry event with zero or more resolved properties.
///
/// Events are immutable after construction: every value reachable through an
/// `Event` is already resolved (never a supplier), and decorators that need
/// to change properties build a new event rather than mutating this one.
///
/// Equality is structural: two events are equal iff their names and their
/// full property mappings are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    name: PropertyValue,
    properties: IndexMap<String, PropertyValue>,
}

impl Event {
    /// Create an event with no properties. The name is stored verbatim,
    /// including [`PropertyValue::Null`] and [`PropertyValue::Undefined`].
    pub fn new(name: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
        }
    }

    /// Create an event, resolving each property source in insertion order.
    ///
    /// A property named `eventName` assigns the event's name instead of
    /// landing in the property map, shadowing the `name` argument. Callers
    /// own that collision; it is not validated.
    pub fn with_properties(name: impl Into<PropertyValue>, properties: &Properties) -> Self {
        let mut event = Event::new(name);
        for (property_name, source) in properties.iter() {
            event.set_resolved(property_name, source.resolve());
        }
        event
    }

    pub fn name(&self) -> &PropertyValue {
        &self.name
    }

    /// Look up a property's resolved value.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Property names in insertion order, excluding `eventName`.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Name/value pairs in insertion order, excluding `eventName`.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Attach an already-resolved value, routing the reserved `eventName`
    /// key onto the name field. Shared by construction and decoration.
    pub(crate) fn set_resolved(&mut self, name: &str, value: PropertyValue) {
        if name == EVENT_NAME_KEY {
            self.name = value;
        } else {
            self.properties.insert(name.to_string(), value);
        }
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len() + 1))?;
        map.serialize_entry(EVENT_NAME_KEY, &self.name)?;
        for (name, value) in &self.properties {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
