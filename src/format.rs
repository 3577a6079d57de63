//! Diagnostic string rendering for events and property values.
//!
//! The output is a single-line, comma-separated, JSON-fragment-like string
//! intended for diagnostics and logging, not machine parsing. Consumers
//! depend on it character-for-character, so the grammar here is frozen:
//! string values are quoted without escaping, and null/undefined names
//! render as the bare sentinel words inside the surrounding quotes. Use the
//! `Serialize` impl on [`Event`] when valid JSON is required.

use eyre::{Result, bail};
use std::fmt;

use crate::event::{EVENT_NAME_KEY, Event};
use crate::property::PropertyValue;

/// Render a single resolved property value.
///
/// Strings are double-quoted as-is; embedded quote characters are not
/// escaped. Numbers use their shortest decimal form (`20`, `-1.7`).
pub fn property_value_to_string(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Null => "null".to_string(),
        PropertyValue::Undefined => "undefined".to_string(),
        PropertyValue::String(text) => format!("\"{text}\""),
        PropertyValue::Bool(flag) => flag.to_string(),
        PropertyValue::Number(number) => number.to_string(),
    }
}

/// Render an event, failing loudly when there is no event to render.
///
/// `None` is a precondition violation and produces an error, never a
/// placeholder string. A present event always renders.
pub fn event_to_string(event: Option<&Event>) -> Result<String> {
    let Some(event) = event else {
        bail!("cannot format a missing telemetry event");
    };
    Ok(render(event))
}

fn render(event: &Event) -> String {
    let mut result = format!("\"{EVENT_NAME_KEY}\": \"{}\"", coerce_name(event.name()));
    for (name, value) in event.properties() {
        result.push_str(&format!(", \"{name}\": {}", property_value_to_string(value)));
    }
    result
}

// The event name sits inside the surrounding quotes in its bare string form,
// so null/undefined become the sentinel words without further quoting.
fn coerce_name(name: &PropertyValue) -> String {
    match name {
        PropertyValue::String(text) => text.clone(),
        PropertyValue::Null => "null".to_string(),
        PropertyValue::Undefined => "undefined".to_string(),
        PropertyValue::Bool(flag) => flag.to_string(),
        PropertyValue::Number(number) => number.to_string(),
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
