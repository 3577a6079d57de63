//! Property values and their resolution.
//!
//! Properties arrive either as literal values or as zero-argument suppliers
//! that produce a value on demand. Resolution collapses a supplier into its
//! value at the moment the property is attached to an event, so events only
//! ever carry concrete values.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A resolved telemetry property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    String(String),
    /// An explicitly absent value, rendered as `null` in diagnostics.
    Null,
    /// A never-assigned value, rendered as `undefined` in diagnostics.
    Undefined,
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Bool(value) => serializer.serialize_bool(*value),
            PropertyValue::Number(value) => serializer.serialize_f64(*value),
            PropertyValue::String(value) => serializer.serialize_str(value),
            // JSON has no `undefined`; both absent flavors serialize as null.
            PropertyValue::Null | PropertyValue::Undefined => serializer.serialize_unit(),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<i64> for PropertyValue {
    /// Lossy for magnitudes above 2^53: numbers share the f64 value model,
    /// so larger integers round to the nearest representable double.
    fn from(value: i64) -> Self {
        PropertyValue::Number(value as f64)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => PropertyValue::Null,
        }
    }
}

/// An unresolved property input: either a value supplied directly or a
/// supplier invoked to produce one.
pub enum PropertySource {
    /// A value passed through resolution unchanged.
    Literal(PropertyValue),
    /// A supplier invoked exactly once per resolution.
    Computed(Box<dyn Fn() -> PropertyValue>),
}

impl PropertySource {
    /// Wrap a supplier whose return converts into a [`PropertyValue`].
    pub fn computed<F, T>(supplier: F) -> Self
    where
        F: Fn() -> T + 'static,
        T: Into<PropertyValue>,
    {
        PropertySource::Computed(Box::new(move || supplier().into()))
    }

    /// Collapse this source into a concrete value.
    ///
    /// Literals come back unchanged. Computed sources invoke their supplier
    /// exactly once, synchronously, with no caching: resolving the same
    /// source twice invokes the supplier twice, and a non-deterministic
    /// supplier may yield different values each time. A panicking supplier
    /// propagates to the caller.
    pub fn resolve(&self) -> PropertyValue {
        match self {
            PropertySource::Literal(value) => value.clone(),
            PropertySource::Computed(supplier) => supplier(),
        }
    }
}

impl fmt::Debug for PropertySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertySource::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            PropertySource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<PropertyValue> for PropertySource {
    fn from(value: PropertyValue) -> Self {
        PropertySource::Literal(value)
    }
}

/// An ordered mapping from property name to unresolved source.
///
/// Iteration order is insertion order. Re-setting an existing name replaces
/// its source but keeps the name's original position.
#[derive(Debug, Default)]
pub struct Properties {
    entries: IndexMap<String, PropertySource>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a literal value under `name`.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.entries
            .insert(name.into(), PropertySource::Literal(value.into()));
        self
    }

    /// Attach a supplier under `name`, invoked fresh on every resolution.
    pub fn computed<F, T>(mut self, name: impl Into<String>, supplier: F) -> Self
    where
        F: Fn() -> T + 'static,
        T: Into<PropertyValue>,
    {
        self.entries
            .insert(name.into(), PropertySource::computed(supplier));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate name/source pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySource)> {
        self.entries.iter().map(|(name, source)| (name.as_str(), source))
    }
}
